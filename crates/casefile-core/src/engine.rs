//! Evaluation dispatcher.
//!
//! Routes a submission to the evaluator for its question type. Every path
//! returns a well-formed [`EvaluationResult`]; nothing here fails or blocks.

use crate::choice::{evaluate_multiple_choice, evaluate_trade_off};
use crate::model::{QuestionConfig, QuestionType, UserAnswer};
use crate::multi_select::evaluate_multi_select;
use crate::results::EvaluationResult;
use crate::self_judge::evaluate_self_judge;
use crate::text_input::evaluate_text_input;

/// Evaluate one submitted answer.
///
/// Each evaluator receives only the configuration fields it reads. Unknown
/// question types produce a zero result instead of an error.
pub fn evaluate(
    question_type: &QuestionType,
    answer: &UserAnswer,
    config: &QuestionConfig,
) -> EvaluationResult {
    let base_xp = config.xp_value;

    let result = match question_type {
        QuestionType::MultipleChoice => evaluate_multiple_choice(
            &answer.as_text(),
            config.correct_answer.as_deref().unwrap_or_default(),
            &config.options,
            base_xp,
        ),
        QuestionType::TradeOff => evaluate_trade_off(&answer.as_text(), &config.options, base_xp),
        QuestionType::MultiSelect => evaluate_multi_select(
            &answer.selections(),
            &config.options,
            base_xp,
            config.wrong_selection_penalty,
        ),
        QuestionType::TextInput => {
            evaluate_text_input(&answer.as_text(), &config.concepts, base_xp)
        }
        QuestionType::SelfJudge => {
            let passed = config.self_judge.map(|j| j.passed).unwrap_or(false);
            evaluate_self_judge(passed, base_xp)
        }
        QuestionType::Unknown(tag) => {
            tracing::warn!("unknown question type '{tag}', awarding zero");
            EvaluationResult::unknown_type(tag)
        }
    };

    tracing::debug!(
        question_type = %question_type,
        score = result.score,
        xp = result.xp_earned,
        correct = result.is_correct,
        "evaluated answer"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerOption, ConceptKeyword, SelfJudgeResult};

    fn option(id: &str, score: Option<u32>, correct: bool) -> AnswerOption {
        AnswerOption {
            id: id.into(),
            text: format!("Option {id}"),
            score,
            correct,
            feedback: None,
        }
    }

    fn config(xp_value: u32) -> QuestionConfig {
        QuestionConfig {
            xp_value,
            ..QuestionConfig::default()
        }
    }

    #[test]
    fn dispatches_multiple_choice() {
        let cfg = QuestionConfig {
            options: vec![option("a", None, false), option("b", None, false)],
            correct_answer: Some("a".into()),
            ..config(40)
        };
        let right = evaluate(&QuestionType::MultipleChoice, &"a".into(), &cfg);
        assert_eq!((right.score, right.xp_earned), (100, 40));

        let wrong = evaluate(&QuestionType::MultipleChoice, &"b".into(), &cfg);
        assert_eq!((wrong.score, wrong.xp_earned), (0, 4));
    }

    #[test]
    fn multiple_choice_without_correct_answer() {
        let cfg = QuestionConfig {
            options: vec![option("a", None, false)],
            ..config(40)
        };
        let r = evaluate(&QuestionType::MultipleChoice, &"a".into(), &cfg);
        assert!(!r.is_correct);
        assert_eq!(r.score, 0);
    }

    #[test]
    fn dispatches_trade_off() {
        let cfg = QuestionConfig {
            options: vec![option("a", Some(100), false), option("b", Some(60), false)],
            ..config(50)
        };
        let r = evaluate(&QuestionType::TradeOff, &"b".into(), &cfg);
        assert_eq!((r.score, r.xp_earned, r.is_correct), (60, 30, false));
    }

    #[test]
    fn dispatches_multi_select() {
        let cfg = QuestionConfig {
            options: vec![
                option("1", None, true),
                option("2", None, true),
                option("3", None, false),
            ],
            ..config(100)
        };
        let answer = UserAnswer::Multiple(vec!["1".into(), "3".into()]);
        let r = evaluate(&QuestionType::MultiSelect, &answer, &cfg);
        assert_eq!((r.score, r.is_correct), (40, false));

        // a lone string is a one-item selection
        let r = evaluate(&QuestionType::MultiSelect, &"1".into(), &cfg);
        assert_eq!(r.score, 50);
    }

    #[test]
    fn dispatches_text_input() {
        let cfg = QuestionConfig {
            concepts: vec![ConceptKeyword {
                concept: "caching".into(),
                keywords: vec!["cache".into()],
                weight: 1.0,
                required: true,
            }],
            ..config(20)
        };
        let r = evaluate(&QuestionType::TextInput, &"Use a cache".into(), &cfg);
        assert_eq!((r.score, r.xp_earned, r.is_correct), (100, 20, true));
        assert_eq!(r.matched_concepts, Some(vec!["caching".to_string()]));
    }

    #[test]
    fn dispatches_self_judge() {
        let passed = QuestionConfig {
            self_judge: Some(SelfJudgeResult { passed: true }),
            ..config(50)
        };
        let r = evaluate(&QuestionType::SelfJudge, &"".into(), &passed);
        assert_eq!((r.score, r.xp_earned, r.is_correct), (100, 50, true));

        let failed = QuestionConfig {
            self_judge: Some(SelfJudgeResult { passed: false }),
            ..config(50)
        };
        let r = evaluate(&QuestionType::SelfJudge, &"".into(), &failed);
        assert_eq!((r.score, r.xp_earned, r.is_correct), (40, 20, false));
    }

    #[test]
    fn self_judge_without_payload_counts_as_not_passed() {
        let r = evaluate(&QuestionType::SelfJudge, &"".into(), &config(50));
        assert_eq!(r.score, 40);
        assert!(!r.is_correct);
    }

    #[test]
    fn unknown_type_never_fails() {
        let kind: QuestionType = "bogus_type".parse().unwrap();
        let r = evaluate(&kind, &"anything".into(), &config(50));
        assert_eq!(r.score, 0);
        assert_eq!(r.xp_earned, 0);
        assert!(!r.is_correct);
        assert_eq!(r.feedback, "Unknown question type: bogus_type");
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let cfg = QuestionConfig {
            options: vec![option("1", Some(70), true), option("2", Some(90), false)],
            correct_answer: Some("1".into()),
            ..config(33)
        };
        let answer = UserAnswer::Multiple(vec!["1".into(), "2".into()]);
        for kind in [
            QuestionType::MultipleChoice,
            QuestionType::TradeOff,
            QuestionType::MultiSelect,
            QuestionType::TextInput,
            QuestionType::SelfJudge,
        ] {
            let first = serde_json::to_string(&evaluate(&kind, &answer, &cfg)).unwrap();
            let second = serde_json::to_string(&evaluate(&kind, &answer, &cfg)).unwrap();
            assert_eq!(first, second, "{kind} is not deterministic");
        }
    }

    #[test]
    fn scores_and_xp_stay_in_bounds() {
        let cfg = QuestionConfig {
            options: vec![
                option("1", Some(250), true),
                option("2", None, false),
                option("3", Some(10), false),
            ],
            correct_answer: Some("1".into()),
            concepts: vec![ConceptKeyword {
                concept: "x".into(),
                keywords: vec!["1".into()],
                weight: 5.0,
                required: false,
            }],
            wrong_selection_penalty: 1000,
            ..config(17)
        };
        let answers = [
            UserAnswer::from(""),
            UserAnswer::from("1"),
            UserAnswer::from("2"),
            UserAnswer::Multiple(vec!["1".into(), "2".into(), "3".into()]),
            UserAnswer::Multiple(vec![]),
        ];
        for kind in [
            QuestionType::MultipleChoice,
            QuestionType::TradeOff,
            QuestionType::MultiSelect,
            QuestionType::TextInput,
            QuestionType::SelfJudge,
            QuestionType::Unknown("future".into()),
        ] {
            for answer in &answers {
                let r = evaluate(&kind, answer, &cfg);
                assert!(r.score <= r.max_score, "{kind}: {r:?}");
                assert_eq!(r.max_score, 100);
                assert!(r.xp_earned <= cfg.xp_value, "{kind}: {r:?}");
            }
        }
    }
}
