use serde::Serialize;

/// Fixed thresholds of the eligibility rule set. Only [`EligibilityRules::standard`]
/// constructs one, so every engine applies the same rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityRules {
    pub(super) identity_number_length: usize,
    pub(super) identity_document_min_length: usize,
    pub(super) identity_document_separators: &'static [char],
    pub(super) minimum_activity_hours_exclusive: f64,
    pub(super) minimum_age_exclusive: f64,
    pub(super) maximum_age: f64,
    pub(super) email_pattern: &'static str,
}

impl EligibilityRules {
    pub const fn standard() -> Self {
        Self {
            identity_number_length: 11,
            identity_document_min_length: 5,
            identity_document_separators: &['.', '-'],
            minimum_activity_hours_exclusive: 0.0,
            minimum_age_exclusive: 0.0,
            maximum_age: 120.0,
            email_pattern: r"^[^@]+@[^@]+\.[^@]+",
        }
    }

    pub const fn identity_number_length(&self) -> usize {
        self.identity_number_length
    }

    pub const fn identity_document_min_length(&self) -> usize {
        self.identity_document_min_length
    }

    pub const fn maximum_age(&self) -> f64 {
        self.maximum_age
    }

    pub const fn email_pattern(&self) -> &'static str {
        self.email_pattern
    }
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self::standard()
    }
}
