use super::super::domain::{Field, RegistrantRecord};
use super::config::EligibilityRules;
use super::rules::GATES;
use serde::Serialize;

/// Pass/fail outcome for one registrant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum EligibilityDecision {
    Eligible,
    Ineligible(IneligibilityReason),
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    pub fn summary(&self) -> String {
        match self {
            Self::Eligible => "eligible".to_string(),
            Self::Ineligible(reason) => format!("ineligible: {}", reason.summary()),
        }
    }
}

/// First gate a registrant failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    InvalidIdentityNumber,
    IdentityDocumentTooShort { length: usize, minimum: usize },
    IdentityDocumentNotAlphanumeric,
    ActivityHoursNotNumeric,
    ActivityHoursNotPositive,
    AgeNotNumeric,
    AgeOutOfRange { maximum: f64 },
    InvalidEmail,
}

impl IneligibilityReason {
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidIdentityNumber => Field::IdentityNumber,
            Self::IdentityDocumentTooShort { .. } | Self::IdentityDocumentNotAlphanumeric => {
                Field::IdentityDocument
            }
            Self::ActivityHoursNotNumeric | Self::ActivityHoursNotPositive => Field::ActivityHours,
            Self::AgeNotNumeric | Self::AgeOutOfRange { .. } => Field::Age,
            Self::InvalidEmail => Field::Email,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::InvalidIdentityNumber => "CPF fails check-digit validation".to_string(),
            Self::IdentityDocumentTooShort { length, minimum } => {
                format!("RG has {length} character(s), at least {minimum} required")
            }
            Self::IdentityDocumentNotAlphanumeric => {
                "RG must contain only letters and digits".to_string()
            }
            Self::ActivityHoursNotNumeric => "activity hours missing or not numeric".to_string(),
            Self::ActivityHoursNotPositive => "activity hours must be greater than zero".to_string(),
            Self::AgeNotNumeric => "age missing or not numeric".to_string(),
            Self::AgeOutOfRange { maximum } => {
                format!("age must be greater than zero and at most {maximum}")
            }
            Self::InvalidEmail => "email is not in name@domain.tld form".to_string(),
        }
    }
}

pub(crate) fn decide_outcome(
    record: &RegistrantRecord,
    rules: &EligibilityRules,
) -> EligibilityDecision {
    match GATES.iter().try_for_each(|gate| gate(record, rules)) {
        Ok(()) => EligibilityDecision::Eligible,
        Err(reason) => EligibilityDecision::Ineligible(reason),
    }
}
