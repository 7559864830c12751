//! Self-judged questions, where the learner grades their own answer.

use crate::results::{EvaluationResult, MAX_SCORE};

/// Score awarded for honestly reporting a failed attempt.
pub const SELF_JUDGE_FAIL_SCORE: u32 = 40;

pub fn evaluate_self_judge(passed: bool, base_xp: u32) -> EvaluationResult {
    if passed {
        EvaluationResult::scored(
            MAX_SCORE,
            base_xp,
            true,
            "Great work! You judged your answer as meeting the bar.",
        )
    } else {
        EvaluationResult::scored(
            SELF_JUDGE_FAIL_SCORE,
            base_xp,
            false,
            "Thanks for the honest assessment. Review the explanation and try again.",
        )
    }
}
