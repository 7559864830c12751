//! Evaluation result type returned by every evaluator.

use serde::{Deserialize, Serialize};

/// Upper bound of every score.
pub const MAX_SCORE: u32 = 100;

/// Outcome of evaluating one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Score in `0..=max_score`.
    pub score: u32,
    /// Always [`MAX_SCORE`].
    pub max_score: u32,
    pub is_correct: bool,
    /// Human-readable feedback for the learner.
    pub feedback: String,
    pub xp_earned: u32,
    /// Concepts detected in a free-text answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_concepts: Option<Vec<String>>,
    /// Concepts a free-text answer did not mention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_concepts: Option<Vec<String>>,
}

impl EvaluationResult {
    /// Build a result whose XP follows the score.
    pub fn scored(score: u32, base_xp: u32, is_correct: bool, feedback: impl Into<String>) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            score,
            max_score: MAX_SCORE,
            is_correct,
            feedback: feedback.into(),
            xp_earned: xp_for(base_xp, score),
            matched_concepts: None,
            missed_concepts: None,
        }
    }

    /// Zero-score result for a question type no evaluator handles.
    pub fn unknown_type(tag: &str) -> Self {
        Self {
            score: 0,
            max_score: MAX_SCORE,
            is_correct: false,
            feedback: format!("Unknown question type: {tag}"),
            xp_earned: 0,
            matched_concepts: None,
            missed_concepts: None,
        }
    }

    /// Override the XP award, capped at `base_xp`.
    pub fn with_xp(mut self, xp: u32, base_xp: u32) -> Self {
        self.xp_earned = xp.min(base_xp);
        self
    }

    pub fn with_concepts(mut self, matched: Vec<String>, missed: Vec<String>) -> Self {
        self.matched_concepts = Some(matched);
        self.missed_concepts = Some(missed);
        self
    }
}

/// XP for a score: `floor(base_xp * score / 100)`.
pub fn xp_for(base_xp: u32, score: u32) -> u32 {
    let score = u64::from(score.min(MAX_SCORE));
    (u64::from(base_xp) * score / u64::from(MAX_SCORE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_floors() {
        assert_eq!(xp_for(50, 100), 50);
        assert_eq!(xp_for(50, 60), 30);
        assert_eq!(xp_for(15, 40), 6);
        assert_eq!(xp_for(7, 50), 3);
        assert_eq!(xp_for(0, 100), 0);
    }

    #[test]
    fn xp_never_exceeds_base() {
        assert_eq!(xp_for(40, 250), 40);
        assert_eq!(xp_for(u32::MAX, 100), u32::MAX);
    }

    #[test]
    fn scored_clamps_to_max() {
        let r = EvaluationResult::scored(130, 20, true, "great");
        assert_eq!(r.score, 100);
        assert_eq!(r.max_score, 100);
        assert_eq!(r.xp_earned, 20);
    }

    #[test]
    fn unknown_type_is_zero() {
        let r = EvaluationResult::unknown_type("bogus_type");
        assert_eq!(r.score, 0);
        assert_eq!(r.xp_earned, 0);
        assert!(!r.is_correct);
        assert!(r.feedback.contains("Unknown question type"));
    }

    #[test]
    fn concept_lists_skipped_when_absent() {
        let r = EvaluationResult::scored(100, 10, true, "ok");
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("matched_concepts"));

        let r = r.with_concepts(vec!["caching".into()], vec![]);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"matched_concepts\":[\"caching\"]"));
    }
}
