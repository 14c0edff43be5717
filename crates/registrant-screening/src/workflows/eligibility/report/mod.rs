mod document;
pub mod views;
mod writer;

pub use document::{
    render_document, ReportDocument, ReportPage, DEFAULT_LINES_PER_PAGE, MIN_LINES_PER_PAGE,
};
pub use views::{PartitionReportView, RegistrantEntryView, MISSING_VALUE};
pub use writer::{
    open_in_viewer, OutputFormat, ReportError, ReportOutcome, ReportSettings, ReportWriter,
};
