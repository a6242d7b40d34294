use crate::commands::{run_rank, run_score, RankArgs, ScoreArgs};
use clap::{Parser, Subcommand};
use talent_grade::config::AppConfig;
use talent_grade::error::AppError;
use talent_grade::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Grade",
    about = "Score insurance-sales applicants against the screening rubric",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every applicant and emit the trimmed score map
    Score(ScoreArgs),
    /// Score, apply the pass threshold, and write ranking reports
    Rank(RankArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "talent grade starting");

    match cli.command {
        Command::Score(args) => run_score(&config.screening, args),
        Command::Rank(args) => run_rank(&config.screening, args),
    }
}
