//! Free-text evaluator that scores answers by keyword-detected concepts.
//!
//! Keywords match as case-insensitive substrings of the answer, so "cache"
//! also matches "cached" and short keywords can match inside unrelated words.

use crate::model::ConceptKeyword;
use crate::results::EvaluationResult;

/// Minimum percentage for a correct answer (with no required concept missed).
pub const TEXT_INPUT_PASS_THRESHOLD: u32 = 60;

/// Number of missed concepts named in the feedback.
const MISSED_HINT_LIMIT: usize = 3;

/// Which concepts an answer covered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptMatch {
    pub matched: Vec<String>,
    pub missed: Vec<String>,
    pub required_missed: Vec<String>,
    pub total_weight: f64,
    pub matched_weight: f64,
}

impl ConceptMatch {
    pub fn find(answer: &str, concepts: &[ConceptKeyword]) -> Self {
        let normalized = answer.to_lowercase();
        let mut found = Self::default();

        for concept in concepts {
            found.total_weight += concept.weight;
            let mentioned = concept
                .keywords
                .iter()
                .any(|k| normalized.contains(&k.to_lowercase()));

            if mentioned {
                found.matched_weight += concept.weight;
                found.matched.push(concept.concept.clone());
            } else {
                found.missed.push(concept.concept.clone());
                if concept.required {
                    found.required_missed.push(concept.concept.clone());
                }
            }
        }

        found
    }

    /// Matched weight as a rounded percentage; 0 when nothing is configured.
    pub fn percent(&self) -> u32 {
        if self.total_weight <= 0.0 {
            return 0;
        }
        (100.0 * self.matched_weight / self.total_weight)
            .round()
            .clamp(0.0, 100.0) as u32
    }
}

/// Evaluate a free-text answer against weighted concepts.
pub fn evaluate_text_input(
    answer: &str,
    concepts: &[ConceptKeyword],
    base_xp: u32,
) -> EvaluationResult {
    let found = ConceptMatch::find(answer, concepts);
    let percent = found.percent();
    let is_correct = found.required_missed.is_empty() && percent >= TEXT_INPUT_PASS_THRESHOLD;

    let mut feedback = match percent {
        p if p >= 90 && !found.required_missed.is_empty() => format!(
            "Strong answer, but it leaves out a required concept: {}.",
            found.required_missed.join(", ")
        ),
        p if p >= 90 => "Excellent answer! You covered all the key concepts.".to_string(),
        p if p >= 70 => "Good answer! You covered most of the important points.".to_string(),
        p if p >= 50 => "Decent answer, but some key concepts are missing.".to_string(),
        _ => "Your answer needs more detail.".to_string(),
    };
    if percent < 90 && !found.missed.is_empty() {
        let hint: Vec<&str> = found
            .missed
            .iter()
            .take(MISSED_HINT_LIMIT)
            .map(String::as_str)
            .collect();
        feedback.push_str(&format!(" Consider discussing: {}.", hint.join(", ")));
    }

    EvaluationResult::scored(percent, base_xp, is_correct, feedback)
        .with_concepts(found.matched, found.missed)
}
