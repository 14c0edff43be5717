use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Registrant attributes recognized by the screening workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    IdentityNumber,
    IdentityDocument,
    ActivityHours,
    Age,
    Locality,
    Email,
}

impl Field {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Name,
            Self::IdentityNumber,
            Self::IdentityDocument,
            Self::ActivityHours,
            Self::Age,
            Self::Locality,
            Self::Email,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::IdentityNumber => "CPF",
            Self::IdentityDocument => "RG",
            Self::ActivityHours => "Activity hours",
            Self::Age => "Age",
            Self::Locality => "Locality",
            Self::Email => "Email",
        }
    }
}

/// A single cell as typed by the intake step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value; text never counts as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Real(value) if value.is_finite() => Some(*value),
            Self::Real(_) | Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// One registrant row. Absent keys are missing cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrantRecord {
    pub row_number: usize,
    values: HashMap<Field, FieldValue>,
}

impl RegistrantRecord {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Text form of the field, trimmed; missing fields read as empty.
    pub fn text(&self, field: Field) -> String {
        self.get(field)
            .map(|value| value.to_string().trim().to_string())
            .unwrap_or_default()
    }

    pub fn number(&self, field: Field) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }
}

/// Ordered batch of registrants as read from the source table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegistrantTable {
    records: Vec<RegistrantRecord>,
}

impl RegistrantTable {
    pub fn new(records: Vec<RegistrantRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RegistrantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<RegistrantRecord>> for RegistrantTable {
    fn from(records: Vec<RegistrantRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<RegistrantRecord> for RegistrantTable {
    fn from_iter<I: IntoIterator<Item = RegistrantRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
