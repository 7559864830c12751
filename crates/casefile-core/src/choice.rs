//! Single-choice evaluators: multiple-choice and weighted trade-off.

use crate::model::AnswerOption;
use crate::results::{EvaluationResult, MAX_SCORE};

/// Trade-off scores at or above this count as correct.
pub const TRADE_OFF_PASS_THRESHOLD: u32 = 80;

/// Evaluate a multiple-choice answer by exact id equality.
///
/// A wrong answer still earns a tenth of the base XP. An empty `correct` id
/// never matches. If `correct` names no option in `options`, the feedback
/// omits the option text.
pub fn evaluate_multiple_choice(
    selected: &str,
    correct: &str,
    options: &[AnswerOption],
    base_xp: u32,
) -> EvaluationResult {
    let correct_option = options.iter().find(|o| o.id == correct);
    let correct_text = correct_option.map(|o| o.text.as_str()).unwrap_or_default();
    let detail = correct_option
        .and_then(|o| o.feedback.as_deref())
        .map(|f| format!(" {f}"))
        .unwrap_or_default();

    if !correct.is_empty() && selected == correct {
        EvaluationResult::scored(
            MAX_SCORE,
            base_xp,
            true,
            format!("Correct! {correct_text}{detail}").trim_end().to_string(),
        )
    } else {
        EvaluationResult::scored(
            0,
            base_xp,
            false,
            format!("Not quite. The correct answer was: {correct_text}{detail}")
                .trim_end()
                .to_string(),
        )
        .with_xp(base_xp / 10, base_xp)
    }
}

/// Evaluate a trade-off answer, where each option carries its own score.
///
/// The feedback always names the best option (highest score, first wins ties).
pub fn evaluate_trade_off(
    selected: &str,
    options: &[AnswerOption],
    base_xp: u32,
) -> EvaluationResult {
    let score = options
        .iter()
        .find(|o| o.id == selected)
        .and_then(|o| o.score)
        .unwrap_or(0)
        .min(MAX_SCORE);

    let best_text = best_option(options).map(|o| o.text.as_str()).unwrap_or_default();

    let feedback = match score {
        100 => format!("Excellent! That's the optimal choice: {best_text}"),
        s if s >= TRADE_OFF_PASS_THRESHOLD => {
            format!("Good choice! The optimal answer was: {best_text}")
        }
        s if s >= 50 => format!("Acceptable, but there's a better option: {best_text}"),
        _ => format!("Not the best choice. Consider: {best_text}"),
    };

    EvaluationResult::scored(score, base_xp, score >= TRADE_OFF_PASS_THRESHOLD, feedback)
}

fn best_option(options: &[AnswerOption]) -> Option<&AnswerOption> {
    options.iter().fold(None, |best: Option<&AnswerOption>, o| match best {
        Some(b) if b.score.unwrap_or(0) >= o.score.unwrap_or(0) => Some(b),
        _ => Some(o),
    })
}
