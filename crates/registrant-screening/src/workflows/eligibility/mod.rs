//! Registrant eligibility screening: CPF checksum, per-record rule gates,
//! batch partitioning and report rendering.

pub mod checksum;
pub mod domain;
pub mod evaluation;
pub mod partition;
pub mod report;

#[cfg(test)]
mod tests;

pub use checksum::{is_valid_cpf, CpfChecksum};
pub use domain::{Field, FieldValue, RegistrantRecord, RegistrantTable};
pub use evaluation::{
    EligibilityDecision, EligibilityEngine, EligibilityOutcome, EligibilityRules,
    IneligibilityReason,
};
pub use partition::{
    BatchCounts, BatchPartitioner, ClassifiedRecord, Partition, PartitionLabel, ScreeningBatch,
};
