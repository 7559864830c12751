//! Best-of-attempts progress per user and lesson.
//!
//! Each attempt is merged by keeping the higher of the previous and new
//! score and XP. Updates for one (user, lesson) pair are serialized.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::results::EvaluationResult;

/// Stored progress for one user on one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    pub user_id: String,
    pub lesson_id: String,
    pub best_score: u32,
    pub best_xp: u32,
    pub attempts: u32,
    pub completed: bool,
    pub last_attempt_at: DateTime<Utc>,
}

impl LessonProgress {
    pub fn new(user_id: impl Into<String>, lesson_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            lesson_id: lesson_id.into(),
            best_score: 0,
            best_xp: 0,
            attempts: 0,
            completed: false,
            last_attempt_at: Utc::now(),
        }
    }

    /// Fold an attempt in. Score and XP never decrease.
    pub fn merge(&mut self, result: &EvaluationResult) {
        self.best_score = self.best_score.max(result.score);
        self.best_xp = self.best_xp.max(result.xp_earned);
        self.completed |= result.is_correct;
        self.attempts = self.attempts.saturating_add(1);
        self.last_attempt_at = Utc::now();
    }
}

/// In-memory progress store.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    rows: Mutex<HashMap<(String, String), LessonProgress>>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update-or-insert the row for `(user_id, lesson_id)` and return it.
    pub fn record(
        &self,
        user_id: &str,
        lesson_id: &str,
        result: &EvaluationResult,
    ) -> LessonProgress {
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        let row = rows
            .entry((user_id.to_string(), lesson_id.to_string()))
            .or_insert_with(|| LessonProgress::new(user_id, lesson_id));
        row.merge(result);
        tracing::debug!(
            user_id,
            lesson_id,
            best_score = row.best_score,
            best_xp = row.best_xp,
            attempts = row.attempts,
            "recorded attempt"
        );
        row.clone()
    }

    pub fn get(&self, user_id: &str, lesson_id: &str) -> Option<LessonProgress> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        rows.get(&(user_id.to_string(), lesson_id.to_string())).cloned()
    }

    /// Sum of best XP across all lessons for a user.
    pub fn total_xp(&self, user_id: &str) -> u64 {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        rows.values()
            .filter(|p| p.user_id == user_id)
            .map(|p| u64::from(p.best_xp))
            .sum()
    }
}
