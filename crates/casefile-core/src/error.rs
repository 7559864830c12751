//! Grading error types.
//!
//! The evaluator never fails; these cover the lookups done around it.

use thiserror::Error;

/// Errors raised while matching a submission to its question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    /// The submission names a question the case file does not contain.
    #[error("question '{question_id}' not found in case file '{case_file}'")]
    QuestionNotFound {
        case_file: String,
        question_id: String,
    },

    /// The same question was submitted more than once in one batch.
    #[error("question '{0}' was already answered in this submission batch")]
    DuplicateSubmission(String),
}

impl GradeError {
    /// The question id the error refers to.
    pub fn question_id(&self) -> &str {
        match self {
            GradeError::QuestionNotFound { question_id, .. } => question_id,
            GradeError::DuplicateSubmission(question_id) => question_id,
        }
    }
}
