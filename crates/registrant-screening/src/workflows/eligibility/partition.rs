use super::domain::{RegistrantRecord, RegistrantTable};
use super::evaluation::{EligibilityEngine, EligibilityOutcome};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionLabel {
    Eligible,
    Ineligible,
}

impl PartitionLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eligible => "Eligible",
            Self::Ineligible => "Ineligible",
        }
    }

    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::Ineligible => "ineligible",
        }
    }
}

/// A classified registrant kept with the decision that placed it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a RegistrantRecord,
    pub outcome: EligibilityOutcome,
}

/// Registrants sharing one decision, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<'a> {
    pub label: PartitionLabel,
    pub members: Vec<ClassifiedRecord<'a>>,
}

impl<'a> Partition<'a> {
    fn new(label: PartitionLabel) -> Self {
        Self {
            label,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a RegistrantRecord> + '_ {
        self.members.iter().map(|member| member.record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchCounts {
    pub total: usize,
    pub eligible: usize,
    pub ineligible: usize,
}

/// Result of screening one table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningBatch<'a> {
    pub eligible: Partition<'a>,
    pub ineligible: Partition<'a>,
}

impl<'a> ScreeningBatch<'a> {
    pub fn counts(&self) -> BatchCounts {
        BatchCounts {
            total: self.eligible.len() + self.ineligible.len(),
            eligible: self.eligible.len(),
            ineligible: self.ineligible.len(),
        }
    }

    pub fn partition(&self, label: PartitionLabel) -> &Partition<'a> {
        match label {
            PartitionLabel::Eligible => &self.eligible,
            PartitionLabel::Ineligible => &self.ineligible,
        }
    }

    pub fn partitions(&self) -> [&Partition<'a>; 2] {
        [&self.eligible, &self.ineligible]
    }
}

/// Splits a table into eligible and ineligible partitions, classifying each
/// record exactly once.
pub struct BatchPartitioner {
    engine: EligibilityEngine,
}

impl BatchPartitioner {
    pub fn new(engine: EligibilityEngine) -> Self {
        Self { engine }
    }

    pub fn partition<'a>(&self, table: &'a RegistrantTable) -> ScreeningBatch<'a> {
        let mut eligible = Partition::new(PartitionLabel::Eligible);
        let mut ineligible = Partition::new(PartitionLabel::Ineligible);

        for record in table.records() {
            let outcome = self.engine.evaluate(record);
            let target = if outcome.is_eligible() {
                &mut eligible
            } else {
                &mut ineligible
            };
            target.members.push(ClassifiedRecord { record, outcome });
        }

        ScreeningBatch {
            eligible,
            ineligible,
        }
    }
}

impl Default for BatchPartitioner {
    fn default() -> Self {
        Self::new(EligibilityEngine::default())
    }
}
