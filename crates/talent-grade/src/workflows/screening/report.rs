use super::batch::ScoredBatch;
use super::evaluation::{ScoreBreakdown, ScreeningDecision};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// One applicant line in the screening report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub key: String,
    pub name: String,
    pub breakdown: ScoreBreakdown,
    pub decision: ScreeningDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_on: NaiveDate,
    pub min_pass_score: u8,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    key: &'a str,
    name: &'a str,
    sales_experience: u8,
    customer_fit: u8,
    specialization: u8,
    motivation_language: u8,
    total: u8,
    decision: &'static str,
}

/// Pass/fail view over a scored batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningReport {
    rows: Vec<ReportRow>,
    summary: ReportSummary,
}

impl ScreeningReport {
    pub fn from_batch(batch: &ScoredBatch, generated_on: NaiveDate) -> Self {
        let rows: Vec<ReportRow> = batch
            .entries()
            .iter()
            .map(|entry| ReportRow {
                key: entry.key.clone(),
                name: entry.display_name.clone(),
                breakdown: entry.outcome.breakdown(),
                decision: entry.outcome.decision,
            })
            .collect();

        let total = rows.len();
        let passed = rows.iter().filter(|row| row.decision.is_pass()).count();
        let pass_rate = if total == 0 {
            0.0
        } else {
            (passed as f64 / total as f64 * 1000.0).round() / 10.0
        };

        Self {
            rows,
            summary: ReportSummary {
                generated_on,
                min_pass_score: batch.min_pass_score(),
                total,
                passed,
                failed: total - passed,
                pass_rate,
            },
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    /// Passing applicants, highest total first; ties keep batch order.
    pub fn passed(&self) -> Vec<&ReportRow> {
        let mut passed: Vec<&ReportRow> = self
            .rows
            .iter()
            .filter(|row| row.decision.is_pass())
            .collect();
        passed.sort_by(|left, right| right.breakdown.total.cmp(&left.breakdown.total));
        passed
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(writer, &self.passed())?;
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ReportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(CsvRow {
                key: &row.key,
                name: &row.name,
                sales_experience: row.breakdown.sales_experience,
                customer_fit: row.breakdown.customer_fit,
                specialization: row.breakdown.specialization,
                motivation_language: row.breakdown.motivation_language,
                total: row.breakdown.total,
                decision: row.decision.label(),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
