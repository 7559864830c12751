//! Grade report types with JSON persistence.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GradeError;
use crate::grading::{grade, GradedAnswer, Submission};
use crate::model::CaseFile;

/// The graded outcome of one batch of submissions against a case file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the case file.
    pub case_file: CaseFileSummary,
    /// Evaluated submissions, in submission order.
    pub answers: Vec<GradedAnswer>,
    /// Submissions that could not be graded.
    #[serde(default)]
    pub rejected: Vec<RejectedSubmission>,
    pub totals: GradeTotals,
}

/// Summary of a case file (without the question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFileSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedSubmission {
    pub question_id: String,
    pub reason: String,
}

/// Aggregate figures over the graded answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeTotals {
    pub answered: usize,
    pub correct: usize,
    pub total_xp: u64,
    /// XP available across the whole case file.
    pub possible_xp: u64,
    /// Mean score of the answered questions.
    pub average_score: f64,
}

impl GradeReport {
    /// Grade every submission. Only the first answer per question is graded.
    pub fn build(case_file: &CaseFile, submissions: &[Submission]) -> Self {
        let mut answers = Vec::new();
        let mut rejected = Vec::new();
        let mut answered_ids = HashSet::new();

        for submission in submissions {
            let known = case_file.question(&submission.question_id).is_some();
            let outcome = if known && !answered_ids.insert(submission.question_id.as_str()) {
                Err(GradeError::DuplicateSubmission(submission.question_id.clone()))
            } else {
                grade(case_file, submission)
            };

            match outcome {
                Ok(graded) => answers.push(graded),
                Err(e) => {
                    tracing::warn!("rejected submission: {e}");
                    rejected.push(RejectedSubmission {
                        question_id: e.question_id().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let totals = GradeTotals::compute(&answers, case_file.possible_xp());

        GradeReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            case_file: CaseFileSummary {
                id: case_file.id.clone(),
                title: case_file.title.clone(),
                question_count: case_file.questions.len(),
            },
            answers,
            rejected,
            totals,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: GradeReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

impl GradeTotals {
    pub fn compute(answers: &[GradedAnswer], possible_xp: u64) -> Self {
        let answered = answers.len();
        let average_score = if answered == 0 {
            0.0
        } else {
            answers.iter().map(|a| f64::from(a.result.score)).sum::<f64>() / answered as f64
        };

        Self {
            answered,
            correct: answers.iter().filter(|a| a.result.is_correct).count(),
            total_xp: answers.iter().map(|a| u64::from(a.result.xp_earned)).sum(),
            possible_xp,
            average_score,
        }
    }
}
