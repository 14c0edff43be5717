use crate::render::{render_cpf_checks, render_summary};
use chrono::Local;
use clap::Args;
use registrant_screening::config::{parse_delimiter, AppConfig};
use registrant_screening::error::AppError;
use registrant_screening::telemetry;
use registrant_screening::workflows::eligibility::report::{
    open_in_viewer, OutputFormat, ReportOutcome, ReportSettings, ReportWriter,
};
use registrant_screening::workflows::eligibility::{
    is_valid_cpf, BatchPartitioner, EligibilityDecision, EligibilityEngine, Field,
    RegistrantRecord,
};
use registrant_screening::workflows::intake::RegistrantImporter;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// CSV export of the registration spreadsheet (defaults to APP_INPUT_PATH)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Directory receiving the reports (defaults to APP_OUTPUT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Field delimiter: a single character, `tab` or `semicolon`
    #[arg(long, value_parser = parse_delimiter_arg)]
    pub(crate) delimiter: Option<u8>,
    /// Report format: text, json or both
    #[arg(long)]
    pub(crate) format: Option<OutputFormat>,
    /// Open each written report in the desktop viewer
    #[arg(long)]
    pub(crate) open: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckCpfArgs {
    /// CPF numbers, with or without punctuation
    #[arg(required = true)]
    pub(crate) values: Vec<String>,
}

fn parse_delimiter_arg(raw: &str) -> Result<u8, String> {
    parse_delimiter(raw).map_err(|err| err.to_string())
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs {
        input,
        output_dir,
        delimiter,
        format,
        open,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(path) = input {
        config.input.path = path;
    }
    if let Some(dir) = output_dir {
        config.report.output_dir = dir;
    }
    if let Some(delimiter) = delimiter {
        config.input.delimiter = delimiter;
    }
    if let Some(format) = format {
        config.report.format = format;
    }
    config.report.open_reports |= open;

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, input = %config.input.path.display(), "screening run started");

    let table = RegistrantImporter::new(config.input.delimiter).import_path(&config.input.path)?;
    let partitioner = BatchPartitioner::default();
    let batch = partitioner.partition(&table);

    for member in &batch.ineligible.members {
        if let EligibilityDecision::Ineligible(reason) = &member.outcome.decision {
            debug!(
                row = member.outcome.row_number,
                field = reason.field().label(),
                reason = %reason.summary(),
                "registrant ineligible"
            );
        }
    }

    let counts = batch.counts();
    info!(
        total = counts.total,
        eligible = counts.eligible,
        ineligible = counts.ineligible,
        "classification finished"
    );

    let writer = ReportWriter::new(ReportSettings {
        output_dir: config.report.output_dir.clone(),
        format: config.report.format,
        issuer: config.report.issuer.clone(),
        lines_per_page: config.report.lines_per_page,
        generated_on: Local::now().date_naive(),
    });
    let outcomes = writer.write_batch(&batch)?;

    render_summary(&config.input.path, counts, &outcomes);

    if config.report.open_reports {
        for outcome in &outcomes {
            if let ReportOutcome::Written { paths, .. } = outcome {
                for path in paths {
                    open_in_viewer(path);
                }
            }
        }
    }

    info!("screening run finished");
    Ok(())
}

/// Result of running one value through the identity-number gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CpfCheck {
    pub(crate) value: String,
    pub(crate) normalized: String,
    pub(crate) valid: bool,
}

pub(crate) fn check_cpf_values(engine: &EligibilityEngine, values: Vec<String>) -> Vec<CpfCheck> {
    values
        .into_iter()
        .map(|value| {
            let record = RegistrantRecord::new(0).with(Field::IdentityNumber, value.as_str());
            let normalized = engine.normalized_identity_number(&record);
            let valid = is_valid_cpf(&normalized);
            CpfCheck {
                value,
                normalized,
                valid,
            }
        })
        .collect()
}

pub(crate) fn run_check_cpf(args: CheckCpfArgs) {
    let checks = check_cpf_values(&EligibilityEngine::default(), args.values);
    render_cpf_checks(&checks);
}
