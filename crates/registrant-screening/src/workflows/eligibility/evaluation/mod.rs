mod config;
mod policy;
mod rules;

pub use config::EligibilityRules;
pub use policy::{EligibilityDecision, IneligibilityReason};

use super::domain::RegistrantRecord;
use policy::decide_outcome;
use serde::Serialize;

/// Stateless classifier applying the fixed rule set to one registrant.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    rules: EligibilityRules,
}

impl EligibilityEngine {
    pub fn new(rules: EligibilityRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }

    pub fn evaluate(&self, record: &RegistrantRecord) -> EligibilityOutcome {
        EligibilityOutcome {
            row_number: record.row_number,
            decision: decide_outcome(record, &self.rules),
        }
    }

    pub fn is_eligible(&self, record: &RegistrantRecord) -> bool {
        self.evaluate(record).is_eligible()
    }

    /// CPF digits exactly as the identity-number gate sees them.
    pub fn normalized_identity_number(&self, record: &RegistrantRecord) -> String {
        rules::padded_identity_number(record, &self.rules)
    }
}

/// Decision for one source row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityOutcome {
    pub row_number: usize,
    pub decision: EligibilityDecision,
}

impl EligibilityOutcome {
    pub fn is_eligible(&self) -> bool {
        self.decision.is_eligible()
    }
}
