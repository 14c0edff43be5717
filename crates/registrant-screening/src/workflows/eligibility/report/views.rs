use super::super::domain::{Field, RegistrantRecord};
use super::super::evaluation::EligibilityDecision;
use super::super::partition::{ClassifiedRecord, Partition, PartitionLabel};
use chrono::NaiveDate;
use serde::Serialize;

pub const MISSING_VALUE: &str = "N/A";

const IDENTITY_NUMBER_WIDTH: usize = 11;

/// Display-ready fields for one registrant entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrantEntryView {
    pub position: usize,
    pub row_number: usize,
    pub name: String,
    pub identity_number: String,
    pub identity_document: String,
    pub activity_hours: String,
    pub age: String,
    pub locality: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RegistrantEntryView {
    pub fn from_classified(position: usize, member: &ClassifiedRecord<'_>) -> Self {
        let record = member.record;
        let reason = match &member.outcome.decision {
            EligibilityDecision::Eligible => None,
            EligibilityDecision::Ineligible(reason) => Some(reason.summary()),
        };

        Self {
            position,
            row_number: record.row_number,
            name: display_or(record, Field::Name, MISSING_VALUE),
            identity_number: padded_identity_number(record),
            identity_document: display_or(record, Field::IdentityDocument, MISSING_VALUE),
            activity_hours: display_or(record, Field::ActivityHours, "0"),
            age: display_or(record, Field::Age, MISSING_VALUE),
            locality: display_or(record, Field::Locality, MISSING_VALUE),
            email: display_or(record, Field::Email, MISSING_VALUE),
            reason,
        }
    }
}

/// Everything a renderer needs to lay out one partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionReportView {
    pub label: PartitionLabel,
    pub title: String,
    pub issuer: String,
    pub generated_on: NaiveDate,
    pub entries: Vec<RegistrantEntryView>,
}

impl PartitionReportView {
    pub fn build(partition: &Partition<'_>, issuer: &str, generated_on: NaiveDate) -> Self {
        let entries = partition
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| RegistrantEntryView::from_classified(index + 1, member))
            .collect();

        Self {
            label: partition.label,
            title: report_title(partition.label, issuer),
            issuer: issuer.to_string(),
            generated_on,
            entries,
        }
    }
}

pub fn report_title(label: PartitionLabel, issuer: &str) -> String {
    let issuer = issuer.trim();
    if issuer.is_empty() {
        format!("{} Registrants Report", label.label())
    } else {
        format!("{} Registrants Report - {}", label.label(), issuer)
    }
}

/// CPF as displayed: the raw cell left-padded with zeros, without digit
/// filtering, so formatted numbers keep their punctuation.
fn padded_identity_number(record: &RegistrantRecord) -> String {
    let raw = record.text(Field::IdentityNumber);
    format!("{raw:0>width$}", width = IDENTITY_NUMBER_WIDTH)
}

fn display_or(record: &RegistrantRecord, field: Field, fallback: &str) -> String {
    let text = record.text(field);
    if text.is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
