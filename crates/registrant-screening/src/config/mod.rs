use crate::workflows::eligibility::report::{
    OutputFormat, DEFAULT_LINES_PER_PAGE, MIN_LINES_PER_PAGE,
};
use crate::workflows::intake::DEFAULT_DELIMITER;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for a screening run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub input: InputConfig,
    pub report: ReportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let path = PathBuf::from(
            env::var("APP_INPUT_PATH").unwrap_or_else(|_| "cadastros.csv".to_string()),
        );
        let delimiter = match env::var("APP_CSV_DELIMITER") {
            Ok(raw) => parse_delimiter(&raw)?,
            Err(_) => DEFAULT_DELIMITER,
        };

        let output_dir =
            PathBuf::from(env::var("APP_OUTPUT_DIR").unwrap_or_else(|_| "saida".to_string()));
        let issuer =
            env::var("APP_REPORT_ISSUER").unwrap_or_else(|_| "Secretaria de Cultura".to_string());
        let format = match env::var("APP_REPORT_FORMAT") {
            Ok(raw) => raw
                .parse::<OutputFormat>()
                .map_err(|_| ConfigError::InvalidFormat { value: raw })?,
            Err(_) => OutputFormat::default(),
        };
        let lines_per_page = match env::var("APP_LINES_PER_PAGE") {
            Ok(raw) => parse_lines_per_page(&raw)?,
            Err(_) => DEFAULT_LINES_PER_PAGE,
        };
        let open_reports = match env::var("APP_OPEN_REPORTS") {
            Ok(raw) => parse_flag("APP_OPEN_REPORTS", &raw)?,
            Err(_) => false,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            input: InputConfig { path, delimiter },
            report: ReportConfig {
                output_dir,
                issuer,
                format,
                lines_per_page,
                open_reports,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the registrant table comes from.
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub path: PathBuf,
    pub delimiter: u8,
}

/// Destination and layout of the generated reports.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub issuer: String,
    pub format: OutputFormat,
    pub lines_per_page: usize,
    pub open_reports: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Accepts a single ASCII character, or the words `tab` and `semicolon`.
pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    let invalid = || ConfigError::InvalidDelimiter {
        value: raw.to_string(),
    };

    match raw.to_ascii_lowercase().as_str() {
        "tab" | "\\t" | "\t" => return Ok(b'\t'),
        "semicolon" => return Ok(b';'),
        _ => {}
    }

    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(invalid()),
    }
}

pub fn parse_lines_per_page(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(lines) if lines >= MIN_LINES_PER_PAGE => Ok(lines),
        _ => Err(ConfigError::InvalidLinesPerPage {
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDelimiter { value: String },
    InvalidFormat { value: String },
    InvalidLinesPerPage { value: String },
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDelimiter { value } => write!(
                f,
                "APP_CSV_DELIMITER must be a single ASCII character, got '{value}'"
            ),
            ConfigError::InvalidFormat { value } => write!(
                f,
                "APP_REPORT_FORMAT must be text, json or both, got '{value}'"
            ),
            ConfigError::InvalidLinesPerPage { value } => write!(
                f,
                "APP_LINES_PER_PAGE must be a whole number of at least {MIN_LINES_PER_PAGE}, got '{value}'"
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_INPUT_PATH",
            "APP_CSV_DELIMITER",
            "APP_OUTPUT_DIR",
            "APP_REPORT_ISSUER",
            "APP_REPORT_FORMAT",
            "APP_LINES_PER_PAGE",
            "APP_OPEN_REPORTS",
            "APP_LOG_LEVEL",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.input.path, PathBuf::from("cadastros.csv"));
        assert_eq!(config.input.delimiter, b',');
        assert_eq!(config.report.output_dir, PathBuf::from("saida"));
        assert_eq!(config.report.issuer, "Secretaria de Cultura");
        assert_eq!(config.report.format, OutputFormat::Text);
        assert_eq!(config.report.lines_per_page, DEFAULT_LINES_PER_PAGE);
        assert!(!config.report.open_reports);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_CSV_DELIMITER", ";");
        env::set_var("APP_REPORT_FORMAT", "both");
        env::set_var("APP_LINES_PER_PAGE", "40");
        env::set_var("APP_OPEN_REPORTS", "yes");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.input.delimiter, b';');
        assert_eq!(config.report.format, OutputFormat::Both);
        assert_eq!(config.report.lines_per_page, 40);
        assert!(config.report.open_reports);
    }

    #[test]
    fn rejects_short_pages() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_LINES_PER_PAGE", "3");
        let error = AppConfig::load().expect_err("page size below minimum");
        reset_env();
        assert!(matches!(error, ConfigError::InvalidLinesPerPage { .. }));
    }

    #[test]
    fn parse_delimiter_accepts_names_and_single_characters() {
        assert_eq!(parse_delimiter(";").expect("semicolon"), b';');
        assert_eq!(parse_delimiter("tab").expect("tab"), b'\t');
        assert_eq!(parse_delimiter("|").expect("pipe"), b'|');
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("§").is_err());
    }
}
