use super::mapping::field_for_header;
use super::RegistrantImportError;
use crate::workflows::eligibility::{Field, FieldValue, RegistrantRecord};
use std::io::Read;
use tracing::debug;

/// Column positions resolved from the header row.
#[derive(Debug)]
pub(crate) struct ColumnLayout {
    columns: Vec<(usize, Field)>,
}

impl ColumnLayout {
    pub(crate) fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns: Vec<(usize, Field)> = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            match field_for_header(header) {
                Some(field) if columns.iter().any(|(_, known)| *known == field) => {
                    debug!(header, column = index, "duplicate column ignored");
                }
                Some(field) => columns.push((index, field)),
                None => debug!(header, column = index, "unrecognized column ignored"),
            }
        }

        Self { columns }
    }

    pub(crate) fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.columns.iter().map(|(_, field)| *field)
    }

    fn record(&self, row_number: usize, row: &csv::StringRecord) -> RegistrantRecord {
        self.columns
            .iter()
            .filter_map(|(index, field)| {
                row.get(*index)
                    .and_then(|raw| infer_value(*field, raw))
                    .map(|value| (*field, value))
            })
            .fold(RegistrantRecord::new(row_number), |record, (field, value)| {
                record.with(field, value)
            })
    }
}

pub(crate) struct ParsedTable {
    pub(crate) layout: ColumnLayout,
    pub(crate) records: Vec<RegistrantRecord>,
}

pub(crate) fn parse_records<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<ParsedTable, RegistrantImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(RegistrantImportError::MissingHeader);
    }
    let layout = ColumnLayout::from_headers(headers);
    let mut records = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        records.push(layout.record(index + 1, &row));
    }

    Ok(ParsedTable { layout, records })
}

/// Types a raw cell for its field. Only the quantity columns are read as
/// numbers; identifiers and free text keep their digits verbatim so leading
/// zeros survive. Blank cells are missing.
pub(crate) fn infer_value(field: Field, raw: &str) -> Option<FieldValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match field {
        Field::ActivityHours | Field::Age => Some(infer_number(trimmed)),
        Field::Name
        | Field::IdentityNumber
        | Field::IdentityDocument
        | Field::Locality
        | Field::Email => Some(FieldValue::Text(trimmed.to_string())),
    }
}

/// Whole numbers, finite decimals, otherwise text.
fn infer_number(trimmed: &str) -> FieldValue {
    if let Ok(integer) = trimmed.parse::<i64>() {
        return FieldValue::Integer(integer);
    }

    match trimmed.parse::<f64>() {
        Ok(real) if real.is_finite() && looks_numeric(trimmed) => FieldValue::Real(real),
        _ => FieldValue::Text(trimmed.to_string()),
    }
}

// `f64::from_str` also accepts words such as "inf" or "NaN".
fn looks_numeric(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}
