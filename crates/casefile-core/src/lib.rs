//! casefile-core — Answer evaluation engine for case-file lessons.
//!
//! This crate defines the question data model, the per-question-type
//! evaluators and their dispatcher, and the grading, progress, and report
//! plumbing built around them.

pub mod choice;
pub mod engine;
pub mod error;
pub mod grading;
pub mod model;
pub mod multi_select;
pub mod parser;
pub mod progress;
pub mod report;
pub mod results;
pub mod self_judge;
pub mod text_input;

pub use engine::evaluate;
pub use error::GradeError;
pub use results::EvaluationResult;
