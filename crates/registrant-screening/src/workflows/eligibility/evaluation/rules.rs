use super::super::checksum::CpfChecksum;
use super::super::domain::{Field, RegistrantRecord};
use super::config::EligibilityRules;
use super::policy::IneligibilityReason;
use regex::Regex;
use std::sync::LazyLock;

// Compiled once from the standard rule set, which is the only one that exists.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EligibilityRules::standard().email_pattern).expect("invalid email pattern")
});

pub(crate) type Gate =
    fn(&RegistrantRecord, &EligibilityRules) -> Result<(), IneligibilityReason>;

/// Hard gates in evaluation order. Evaluation stops at the first failure.
pub(crate) const GATES: [Gate; 5] = [
    identity_number,
    identity_document,
    activity_hours,
    age,
    email,
];

/// Digits of the CPF cell, left-padded with zeros to the configured length.
pub(crate) fn padded_identity_number(
    record: &RegistrantRecord,
    rules: &EligibilityRules,
) -> String {
    let digits: String = record
        .text(Field::IdentityNumber)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!("{digits:0>width$}", width = rules.identity_number_length)
}

fn identity_number(
    record: &RegistrantRecord,
    rules: &EligibilityRules,
) -> Result<(), IneligibilityReason> {
    if CpfChecksum.is_valid(&padded_identity_number(record, rules)) {
        Ok(())
    } else {
        Err(IneligibilityReason::InvalidIdentityNumber)
    }
}

fn identity_document(
    record: &RegistrantRecord,
    rules: &EligibilityRules,
) -> Result<(), IneligibilityReason> {
    let document = record.text(Field::IdentityDocument);
    let length = document.chars().count();
    if length < rules.identity_document_min_length {
        return Err(IneligibilityReason::IdentityDocumentTooShort {
            length,
            minimum: rules.identity_document_min_length,
        });
    }

    let stripped = document.replace(rules.identity_document_separators, "");
    if stripped.is_empty() || !stripped.chars().all(char::is_alphanumeric) {
        return Err(IneligibilityReason::IdentityDocumentNotAlphanumeric);
    }

    Ok(())
}

fn activity_hours(
    record: &RegistrantRecord,
    rules: &EligibilityRules,
) -> Result<(), IneligibilityReason> {
    match record.number(Field::ActivityHours) {
        None => Err(IneligibilityReason::ActivityHoursNotNumeric),
        Some(hours) if hours <= rules.minimum_activity_hours_exclusive => {
            Err(IneligibilityReason::ActivityHoursNotPositive)
        }
        Some(_) => Ok(()),
    }
}

fn age(record: &RegistrantRecord, rules: &EligibilityRules) -> Result<(), IneligibilityReason> {
    match record.number(Field::Age) {
        None => Err(IneligibilityReason::AgeNotNumeric),
        Some(age) if age <= rules.minimum_age_exclusive || age > rules.maximum_age => {
            Err(IneligibilityReason::AgeOutOfRange {
                maximum: rules.maximum_age,
            })
        }
        Some(_) => Ok(()),
    }
}

fn email(record: &RegistrantRecord, rules: &EligibilityRules) -> Result<(), IneligibilityReason> {
    debug_assert_eq!(rules.email_pattern(), EMAIL_PATTERN.as_str());
    if EMAIL_PATTERN.is_match(&record.text(Field::Email)) {
        Ok(())
    } else {
        Err(IneligibilityReason::InvalidEmail)
    }
}
