use crate::classify::{run_check_cpf, run_classify, CheckCpfArgs, ClassifyArgs};
use clap::{Parser, Subcommand};
use registrant_screening::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "screening",
    about = "Split a registrant table into eligible and ineligible reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every registrant and write one report per outcome (default command)
    Classify(ClassifyArgs),
    /// Check CPF numbers against the identity-number rule
    CheckCpf(CheckCpfArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Classify(ClassifyArgs::default()));

    match command {
        Command::Classify(args) => run_classify(args),
        Command::CheckCpf(args) => {
            run_check_cpf(args);
            Ok(())
        }
    }
}
