//! CSV intake of registrant tables.

mod mapping;
mod normalizer;
mod parser;

use crate::workflows::eligibility::{Field, RegistrantTable};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, thiserror::Error)]
pub enum RegistrantImportError {
    #[error("failed to read registrant table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid registrant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("registrant table has no header row")]
    MissingHeader,
}

/// Reads registrant rows from CSV exports of the registration spreadsheet.
#[derive(Debug, Clone, Copy)]
pub struct RegistrantImporter {
    delimiter: u8,
}

impl Default for RegistrantImporter {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl RegistrantImporter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn import_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<RegistrantTable, RegistrantImportError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading registrant table");
        let file = std::fs::File::open(path).map_err(|source| RegistrantImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_reader(file)
    }

    pub fn import_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<RegistrantTable, RegistrantImportError> {
        let parsed = parser::parse_records(reader, self.delimiter)?;

        let present: Vec<Field> = parsed.layout.fields().collect();
        for field in Field::ordered() {
            if !present.contains(&field) {
                warn!(field = field.label(), "column missing; every row treats it as empty");
            }
        }

        info!(rows = parsed.records.len(), "registrant table loaded");
        Ok(RegistrantTable::new(parsed.records))
    }
}
