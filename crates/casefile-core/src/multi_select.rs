//! Multi-select evaluator with partial credit and wrong-pick penalties.

use std::collections::HashSet;

use crate::model::AnswerOption;
use crate::results::{EvaluationResult, MAX_SCORE};

/// Tally of a multi-select submission against the correct set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTally {
    pub correct: usize,
    pub wrong: usize,
    pub missed: usize,
    pub total_correct: usize,
}

impl SelectionTally {
    /// Count selections. Each distinct id counts once.
    pub fn count(selected: &[&str], options: &[AnswerOption]) -> Self {
        let correct_ids: HashSet<&str> = options
            .iter()
            .filter(|o| o.correct)
            .map(|o| o.id.as_str())
            .collect();

        let mut seen = HashSet::new();
        let (mut correct, mut wrong) = (0, 0);
        for id in selected.iter().copied().filter(|id| seen.insert(*id)) {
            if correct_ids.contains(id) {
                correct += 1;
            } else {
                wrong += 1;
            }
        }

        Self {
            correct,
            wrong,
            missed: correct_ids.len() - correct,
            total_correct: correct_ids.len(),
        }
    }

    /// Every correct option picked and nothing else.
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total_correct && self.wrong == 0
    }

    /// Partial-credit score, clamped to `0..=100` and rounded.
    ///
    /// With no correct options configured each pick is worth nothing.
    pub fn score(&self, penalty: u32) -> u32 {
        let points_per_correct = if self.total_correct == 0 {
            0.0
        } else {
            f64::from(MAX_SCORE) / self.total_correct as f64
        };
        let raw = self.correct as f64 * points_per_correct - self.wrong as f64 * f64::from(penalty);
        raw.clamp(0.0, f64::from(MAX_SCORE)).round() as u32
    }

    fn feedback(&self) -> String {
        if self.is_perfect() {
            return format!(
                "Perfect! You identified all {} correct options.",
                self.total_correct
            );
        }
        if self.correct == 0 {
            return format!(
                "None of your selections were correct. There were {} correct options to find.",
                self.total_correct
            );
        }

        let mut feedback = format!(
            "You found {} of {} correct options.",
            self.correct, self.total_correct
        );
        if self.wrong > 0 {
            feedback.push_str(&format!(" {} incorrect selection(s).", self.wrong));
        }
        if self.missed > 0 {
            feedback.push_str(&format!(" You missed {}.", self.missed));
        }
        feedback
    }
}

/// Evaluate a multi-select answer.
pub fn evaluate_multi_select(
    selected: &[&str],
    options: &[AnswerOption],
    base_xp: u32,
    penalty: u32,
) -> EvaluationResult {
    let tally = SelectionTally::count(selected, options);
    let score = tally.score(penalty);

    tracing::debug!(
        correct = tally.correct,
        wrong = tally.wrong,
        missed = tally.missed,
        score,
        "multi-select tally"
    );

    EvaluationResult::scored(score, base_xp, tally.is_perfect(), tally.feedback())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: &str, correct: bool) -> AnswerOption {
        AnswerOption {
            id: id.into(),
            text: format!("Option {id}"),
            score: None,
            correct,
            feedback: None,
        }
    }

    fn options() -> Vec<AnswerOption> {
        vec![option("1", true), option("2", true), option("3", false)]
    }

    #[test]
    fn all_correct() {
        let r = evaluate_multi_select(&["1", "2"], &options(), 100, 10);
        assert_eq!(r.score, 100);
        assert!(r.is_correct);
        assert_eq!(r.xp_earned, 100);
        assert!(r.feedback.starts_with("Perfect!"));
    }

    #[test]
    fn one_right_one_wrong() {
        let tally = SelectionTally::count(&["1", "3"], &options());
        assert_eq!(tally.correct, 1);
        assert_eq!(tally.wrong, 1);
        assert_eq!(tally.missed, 1);

        let r = evaluate_multi_select(&["1", "3"], &options(), 100, 10);
        assert_eq!(r.score, 40);
        assert!(!r.is_correct);
        assert_eq!(r.xp_earned, 40);
        assert_eq!(
            r.feedback,
            "You found 1 of 2 correct options. 1 incorrect selection(s). You missed 1."
        );
    }

    #[test]
    fn extra_pick_is_not_correct() {
        let r = evaluate_multi_select(&["1", "2", "3"], &options(), 100, 10);
        assert_eq!(r.score, 90);
        assert!(!r.is_correct);
        assert_eq!(r.feedback, "You found 2 of 2 correct options. 1 incorrect selection(s).");
    }

    #[test]
    fn missed_only_clause() {
        let r = evaluate_multi_select(&["2"], &options(), 100, 10);
        assert_eq!(r.score, 50);
        assert_eq!(r.feedback, "You found 1 of 2 correct options. You missed 1.");
    }

    #[test]
    fn no_correct_picks_clamps_to_zero() {
        let r = evaluate_multi_select(&["3"], &options(), 100, 10);
        assert_eq!(r.score, 0);
        assert_eq!(r.xp_earned, 0);
        assert!(r.feedback.starts_with("None of your selections were correct."));

        let empty = evaluate_multi_select(&[], &options(), 100, 10);
        assert_eq!(empty.score, 0);
        assert!(!empty.is_correct);
    }

    #[test]
    fn rounds_thirds() {
        let opts = vec![option("a", true), option("b", true), option("c", true)];
        let r = evaluate_multi_select(&["a", "b"], &opts, 10, 10);
        assert_eq!(r.score, 67);
        assert_eq!(r.xp_earned, 6);

        let r = evaluate_multi_select(&["a"], &opts, 10, 10);
        assert_eq!(r.score, 33);
    }

    #[test]
    fn duplicate_ids_count_once() {
        let r = evaluate_multi_select(&["1", "1", "3", "3"], &options(), 100, 10);
        assert_eq!(r.score, 40);
    }

    #[test]
    fn no_correct_options_configured() {
        let opts = vec![option("a", false), option("b", false)];
        let r = evaluate_multi_select(&["a"], &opts, 100, 10);
        assert_eq!(r.score, 0);
        assert!(!r.is_correct);

        let r = evaluate_multi_select(&[], &opts, 100, 10);
        assert_eq!(r.score, 0);
        assert_eq!(r.xp_earned, 0);
    }

    #[test]
    fn custom_penalty() {
        let r = evaluate_multi_select(&["1", "2", "3"], &options(), 100, 25);
        assert_eq!(r.score, 75);
        let r = evaluate_multi_select(&["1", "2", "3"], &options(), 100, 0);
        assert_eq!(r.score, 100);
        assert!(!r.is_correct);
    }
}
