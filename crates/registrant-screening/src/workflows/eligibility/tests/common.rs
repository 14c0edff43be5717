use chrono::NaiveDate;

use crate::workflows::eligibility::{
    BatchPartitioner, EligibilityEngine, Field, RegistrantRecord, RegistrantTable,
};

pub(super) const VALID_CPF: &str = "52998224725";

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn partitioner() -> BatchPartitioner {
    BatchPartitioner::new(engine())
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

/// A registrant passing every gate.
pub(super) fn valid_record(row_number: usize) -> RegistrantRecord {
    RegistrantRecord::new(row_number)
        .with(Field::Name, "Maria da Silva")
        .with(Field::IdentityNumber, VALID_CPF)
        .with(Field::IdentityDocument, "MG-12.345.678")
        .with(Field::ActivityHours, 10_i64)
        .with(Field::Age, 30_i64)
        .with(Field::Locality, "Zona Rural")
        .with(Field::Email, "a@b.com")
}

/// The three-registrant batch: valid, repeated-digit CPF, malformed email.
pub(super) fn sample_table() -> RegistrantTable {
    RegistrantTable::new(vec![
        valid_record(1),
        valid_record(2).with(Field::IdentityNumber, "00000000000"),
        valid_record(3).with(Field::Email, "not-an-email"),
    ])
}
