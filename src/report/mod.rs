pub mod json;
pub mod md;

use crate::analyze::blog::ReadingMetrics;
use crate::error::SeoError;
use crate::types::scoring::{Grade, Score, ScoreResult};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Full result for one scored entity.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub subject: String,
    pub kind: &'static str,
    pub result: ScoreResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<ReadingMetrics>,
}

/// One line of a batch run. `cached` marks entries served from the cache.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: String,
    pub kind: &'static str,
    pub subject: String,
    pub score: Score,
    pub grade: Grade,
    pub issue_count: usize,
    pub cached: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchTotals {
    pub entities: usize,
    pub average_score: f64,
    pub with_issues: usize,
    pub failing: usize,
    pub cached: usize,
    pub by_grade: BTreeMap<Grade, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
    pub totals: BatchTotals,
}

impl BatchSummary {
    pub fn new(entries: Vec<BatchEntry>) -> Self {
        let mut totals = BatchTotals {
            entities: entries.len(),
            ..BatchTotals::default()
        };
        for entry in &entries {
            *totals.by_grade.entry(entry.grade).or_default() += 1;
            if entry.issue_count > 0 {
                totals.with_issues += 1;
            }
            if entry.grade == Grade::F {
                totals.failing += 1;
            }
            if entry.cached {
                totals.cached += 1;
            }
        }
        if !entries.is_empty() {
            let sum = entries.iter().map(|entry| entry.score as f64).sum::<f64>();
            totals.average_score = sum / entries.len() as f64;
        }
        Self { entries, totals }
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(summary: &BatchSummary, format: OutputFormat) -> Result<String, SeoError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(SeoError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(summary)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::types::scoring::{ChecklistEntry, Severity};

    pub fn media_report() -> ScoreReport {
        ScoreReport {
            subject: "banner.jpg".to_string(),
            kind: "media",
            result: ScoreResult {
                score: 72,
                grade: Grade::BPlus,
                grade_text: Grade::BPlus.label().to_string(),
                grade_class: Grade::BPlus.class(),
                issues: vec!["File is somewhat heavy".to_string()],
                recommendations: vec!["Compress the image".to_string()],
                checklist: vec![
                    ChecklistEntry {
                        severity: Severity::Success,
                        message: "Alt text is optimal (46 chars)".to_string(),
                    },
                    ChecklistEntry {
                        severity: Severity::Danger,
                        message: "File size: 1.50 MB (too heavy)".to_string(),
                    },
                ],
            },
            reading: None,
        }
    }

    pub fn entry(path: &str, score: Score, grade: Grade, issue_count: usize) -> BatchEntry {
        BatchEntry {
            path: path.to_string(),
            kind: "media",
            subject: path.to_string(),
            score,
            grade,
            issue_count,
            cached: false,
        }
    }
}
