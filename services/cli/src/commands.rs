use crate::infra::build_engine;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use talent_grade::config::ScreeningSettings;
use talent_grade::error::AppError;
use talent_grade::workflows::screening::{
    score_batch, ApplicantImporter, ScoredBatch, ScreeningReport,
};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant export (JSON object keyed by applicant, or a JSON list)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write the scored map (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Keyword dictionary override (JSON, camelCase category keys)
    #[arg(long)]
    pub(crate) dictionary: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Applicant export (JSON object keyed by applicant, or a JSON list)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Minimum total score to pass (overrides SCREENING_MIN_SCORE)
    #[arg(long)]
    pub(crate) min_score: Option<u8>,
    /// Write passing applicants, best first, as JSON
    #[arg(long)]
    pub(crate) json: Option<PathBuf>,
    /// Write every applicant's breakdown and decision as CSV
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Keyword dictionary override (JSON, camelCase category keys)
    #[arg(long)]
    pub(crate) dictionary: Option<PathBuf>,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_score(settings: &ScreeningSettings, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        output,
        dictionary,
    } = args;

    let engine = build_engine(settings, dictionary, None)?;
    let applicants = ApplicantImporter::from_path(&input)?;
    let scored = score_batch(&applicants, &engine);

    match output {
        Some(path) => {
            write_scored(&scored, File::create(&path)?)?;
            info!(path = %path.display(), "scored applicants written");
        }
        None => write_scored(&scored, io::stdout().lock())?,
    }

    let status = scored.status();
    info!(%status, "scoring finished");
    eprintln!("{status}");
    Ok(())
}

pub(crate) fn run_rank(settings: &ScreeningSettings, args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        input,
        min_score,
        json,
        csv,
        dictionary,
        today,
    } = args;

    let engine = build_engine(settings, dictionary, min_score)?;
    let applicants = ApplicantImporter::from_path(&input)?;
    let scored = score_batch(&applicants, &engine);
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = ScreeningReport::from_batch(&scored, today);

    render_report(&report);

    if let Some(path) = json {
        report.write_json(BufWriter::new(File::create(&path)?))?;
        info!(path = %path.display(), "passing applicants written");
    }
    if let Some(path) = csv {
        report.write_csv(BufWriter::new(File::create(&path)?))?;
        info!(path = %path.display(), "screening CSV written");
    }

    Ok(())
}

fn write_scored<W: Write>(scored: &ScoredBatch, writer: W) -> Result<(), AppError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, scored)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn render_report(report: &ScreeningReport) {
    let summary = report.summary();
    let total = summary.total;

    println!(
        "Screening report ({}), pass threshold {}",
        summary.generated_on, summary.min_pass_score
    );
    for (position, row) in report.rows().iter().enumerate() {
        println!(
            "[{}/{}] {} {} - {} points ({})",
            position + 1,
            total,
            row.key,
            row.name,
            row.breakdown.total,
            row.decision.label()
        );
    }

    println!("\nSummary");
    println!("- applicants: {}", summary.total);
    println!("- passed: {}", summary.passed);
    println!("- failed: {}", summary.failed);
    println!("- pass rate: {:.1}%", summary.pass_rate);
}
