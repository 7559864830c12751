//! Grading glue: look a question up, evaluate the answer, attach the explanation.

use serde::{Deserialize, Serialize};

use crate::engine::evaluate;
use crate::error::GradeError;
use crate::model::{CaseFile, QuestionType, SelfJudgeResult, UserAnswer};
use crate::results::EvaluationResult;

/// A learner's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub question_id: String,
    pub answer: UserAnswer,
    /// Learner's verdict for self-judged questions.
    #[serde(default)]
    pub self_judge: Option<SelfJudgeResult>,
}

/// An evaluated submission, ready to show the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    pub question_id: String,
    pub question_type: QuestionType,
    pub result: EvaluationResult,
    /// The question's explanation, carried alongside the result.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Grade a submission against its case file.
///
/// A self-judge verdict on the submission takes precedence over one stored in
/// the question configuration.
pub fn grade(case_file: &CaseFile, submission: &Submission) -> Result<GradedAnswer, GradeError> {
    let question = case_file.question(&submission.question_id).ok_or_else(|| {
        GradeError::QuestionNotFound {
            case_file: case_file.id.clone(),
            question_id: submission.question_id.clone(),
        }
    })?;

    let result = match submission.self_judge {
        Some(verdict) => {
            let mut config = question.config.clone();
            config.self_judge = Some(verdict);
            evaluate(&question.question_type, &submission.answer, &config)
        }
        None => evaluate(&question.question_type, &submission.answer, &question.config),
    };

    Ok(GradedAnswer {
        question_id: question.id.clone(),
        question_type: question.question_type.clone(),
        result,
        explanation: question.explanation.clone(),
    })
}
