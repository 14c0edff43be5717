mod classify;
mod cli;
mod render;

use registrant_screening::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
