mod cli;
mod commands;
mod infra;

use talent_grade::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
