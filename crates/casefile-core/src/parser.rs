//! TOML case-file and submission parser.
//!
//! Loads case files from TOML files and directories, validates them, and
//! reads batches of learner submissions.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::grading::Submission;
use crate::model::{
    default_wrong_selection_penalty, default_xp_value, AnswerOption, CaseFile, ConceptKeyword,
    Question, QuestionConfig, QuestionType, SelfJudgeResult, UserAnswer,
};

/// Intermediate TOML structure for parsing case files.
#[derive(Debug, Deserialize)]
struct TomlCaseFile {
    case_file: TomlCaseFileHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCaseFileHeader {
    id: String,
    title: String,
    #[serde(default)]
    clearance: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(rename = "type")]
    question_type: String,
    prompt: String,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default = "default_xp_value")]
    xp_value: u32,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default = "default_wrong_selection_penalty")]
    wrong_selection_penalty: u32,
    #[serde(default)]
    options: Vec<AnswerOption>,
    #[serde(default)]
    concepts: Vec<ConceptKeyword>,
}

#[derive(Debug, Deserialize)]
struct TomlSubmissions {
    #[serde(default)]
    submissions: Vec<TomlSubmission>,
}

#[derive(Debug, Deserialize)]
struct TomlSubmission {
    question_id: String,
    #[serde(default)]
    answer: Option<UserAnswer>,
    #[serde(default)]
    passed: Option<bool>,
}

/// Parse a single TOML file into a `CaseFile`.
pub fn parse_case_file(path: &Path) -> Result<CaseFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read case file: {}", path.display()))?;

    parse_case_file_str(&content, path)
}

/// Parse a TOML string into a `CaseFile` (useful for testing).
pub fn parse_case_file_str(content: &str, source_path: &Path) -> Result<CaseFile> {
    let parsed: TomlCaseFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            question_type: QuestionType::from(q.question_type),
            prompt: q.prompt,
            explanation: q.explanation,
            config: QuestionConfig {
                options: q.options,
                correct_answer: q.correct_answer,
                concepts: q.concepts,
                xp_value: q.xp_value,
                self_judge: None,
                wrong_selection_penalty: q.wrong_selection_penalty,
            },
        })
        .collect();

    Ok(CaseFile {
        id: parsed.case_file.id,
        title: parsed.case_file.title,
        clearance: parsed.case_file.clearance,
        description: parsed.case_file.description,
        questions,
    })
}

/// Recursively load all `.toml` case files from a directory.
pub fn load_case_directory(dir: &Path) -> Result<Vec<CaseFile>> {
    let mut case_files = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            case_files.extend(load_case_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_case_file(&path) {
                Ok(case_file) => case_files.push(case_file),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(case_files)
}

/// Parse a TOML submissions file.
pub fn parse_submissions(path: &Path) -> Result<Vec<Submission>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submissions file: {}", path.display()))?;

    parse_submissions_str(&content, path)
}

/// Parse TOML submissions from a string.
///
/// A missing `answer` is an empty answer; `passed` becomes the self-judge verdict.
pub fn parse_submissions_str(content: &str, source_path: &Path) -> Result<Vec<Submission>> {
    let parsed: TomlSubmissions = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(parsed
        .submissions
        .into_iter()
        .map(|s| Submission {
            question_id: s.question_id,
            answer: s.answer.unwrap_or_else(|| UserAnswer::Single(String::new())),
            self_judge: s.passed.map(|passed| SelfJudgeResult { passed }),
        })
        .collect())
}

/// A warning from case-file validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn question(id: &str, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }
}

/// Validate a case file for content problems the evaluator would silently absorb.
pub fn validate_case_file(case_file: &CaseFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if case_file.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "case file has no questions".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &case_file.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning::question(
                &question.id,
                format!("duplicate question ID: {}", question.id),
            ));
        }
    }

    for question in &case_file.questions {
        warnings.extend(validate_question(question));
    }

    warnings
}

fn validate_question(question: &Question) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let id = question.id.as_str();
    let config = &question.config;

    if question.prompt.trim().is_empty() {
        warnings.push(ValidationWarning::question(id, "prompt is empty"));
    }

    let mut option_ids = HashSet::new();
    for option in &config.options {
        if !option_ids.insert(option.id.as_str()) {
            warnings.push(ValidationWarning::question(
                id,
                format!("duplicate option ID: {}", option.id),
            ));
        }
    }

    match &question.question_type {
        QuestionType::MultipleChoice => match &config.correct_answer {
            None => warnings.push(ValidationWarning::question(
                id,
                "multiple_choice question has no correct_answer",
            )),
            Some(correct) if !option_ids.contains(correct.as_str()) => {
                warnings.push(ValidationWarning::question(
                    id,
                    format!("correct_answer '{correct}' does not match any option"),
                ))
            }
            Some(_) => {}
        },
        QuestionType::TradeOff => {
            for option in &config.options {
                match option.score {
                    None => warnings.push(ValidationWarning::question(
                        id,
                        format!("trade_off option '{}' has no score (counts as 0)", option.id),
                    )),
                    Some(s) if s > 100 => warnings.push(ValidationWarning::question(
                        id,
                        format!("trade_off option '{}' score {s} exceeds 100", option.id),
                    )),
                    Some(_) => {}
                }
            }
        }
        QuestionType::MultiSelect => {
            if !config.options.iter().any(|o| o.correct) {
                warnings.push(ValidationWarning::question(
                    id,
                    "multi_select question has no correct options",
                ));
            }
        }
        QuestionType::TextInput => {
            if config.concepts.is_empty() {
                warnings.push(ValidationWarning::question(
                    id,
                    "text_input question has no concepts (always scores 0)",
                ));
            }
            for concept in &config.concepts {
                if concept.keywords.iter().any(|k| k.is_empty()) {
                    warnings.push(ValidationWarning::question(
                        id,
                        format!(
                            "concept '{}' has an empty keyword that matches any answer",
                            concept.concept
                        ),
                    ));
                }
                if concept.keywords.is_empty() {
                    warnings.push(ValidationWarning::question(
                        id,
                        format!(
                            "concept '{}' has no keywords and can never match",
                            concept.concept
                        ),
                    ));
                }
            }
        }
        QuestionType::SelfJudge => {}
        QuestionType::Unknown(tag) => warnings.push(ValidationWarning::question(
            id,
            format!("unknown question type '{tag}' (always scores 0)"),
        )),
    }

    warnings
}
