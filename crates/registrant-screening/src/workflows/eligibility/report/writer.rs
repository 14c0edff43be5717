use super::document::render_document;
use super::views::PartitionReportView;
use super::super::partition::{PartitionLabel, ScreeningBatch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    fn writes_text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    fn writes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "both" | "all" => Ok(Self::Both),
            other => Err(format!(
                "unknown report format '{other}' (expected text, json or both)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Both => "both",
        };
        f.write_str(label)
    }
}

/// Layout and destination settings shared by every partition report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub issuer: String,
    pub lines_per_page: usize,
    pub generated_on: NaiveDate,
}

/// What happened to one partition during writing.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Written {
        label: PartitionLabel,
        entries: usize,
        pages: usize,
        paths: Vec<PathBuf>,
    },
    Skipped {
        label: PartitionLabel,
    },
}

impl ReportOutcome {
    pub fn label(&self) -> PartitionLabel {
        match self {
            Self::Written { label, .. } | Self::Skipped { label } => *label,
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Self::Written { paths, .. } => paths,
            Self::Skipped { .. } => &[],
        }
    }
}

pub struct ReportWriter {
    settings: ReportSettings,
}

impl ReportWriter {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    /// Writes one document per non-empty partition. Empty partitions are
    /// reported as skipped and leave no file behind.
    pub fn write_batch(
        &self,
        batch: &ScreeningBatch<'_>,
    ) -> Result<Vec<ReportOutcome>, ReportError> {
        let mut outcomes = Vec::with_capacity(2);
        let mut directory_ready = false;

        for partition in batch.partitions() {
            if partition.is_empty() {
                warn!(partition = partition.label.label(), "no registrants; report skipped");
                outcomes.push(ReportOutcome::Skipped {
                    label: partition.label,
                });
                continue;
            }

            if !directory_ready {
                fs::create_dir_all(&self.settings.output_dir).map_err(|source| {
                    ReportError::OutputDirectory {
                        path: self.settings.output_dir.clone(),
                        source,
                    }
                })?;
                directory_ready = true;
            }

            let view = PartitionReportView::build(
                partition,
                &self.settings.issuer,
                self.settings.generated_on,
            );
            outcomes.push(self.write_partition(&view)?);
        }

        Ok(outcomes)
    }

    fn write_partition(&self, view: &PartitionReportView) -> Result<ReportOutcome, ReportError> {
        let document = render_document(view, self.settings.lines_per_page);
        let stem = view.label.file_stem();
        let mut paths = Vec::new();

        if self.settings.format.writes_text() {
            let path = self.settings.output_dir.join(format!("{stem}.txt"));
            write_file(&path, document.to_text().as_bytes())?;
            paths.push(path);
        }

        if self.settings.format.writes_json() {
            let path = self.settings.output_dir.join(format!("{stem}.json"));
            let payload = serde_json::to_vec_pretty(view)?;
            write_file(&path, &payload)?;
            paths.push(path);
        }

        for path in &paths {
            info!(
                partition = view.label.label(),
                entries = view.entries.len(),
                pages = document.page_count(),
                path = %path.display(),
                "report written"
            );
        }

        Ok(ReportOutcome::Written {
            label: view.label,
            entries: view.entries.len(),
            pages: document.page_count(),
            paths,
        })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Hands `path` to the desktop's default viewer. Failures are logged only.
pub fn open_in_viewer(path: &Path) -> bool {
    match open::that(path) {
        Ok(()) => true,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not open report");
            false
        }
    }
}
