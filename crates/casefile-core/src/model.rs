//! Core data model types for casefile.
//!
//! These are the types the evaluator consumes: answer options, keyword
//! concepts, question configuration, and the case files that group them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable answer option.
///
/// Used by multiple-choice, trade-off, and multi-select questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Identifier, unique within a question.
    pub id: String,
    /// Display text.
    pub text: String,
    /// Desirability score (0-100), used by trade-off questions.
    #[serde(default)]
    pub score: Option<u32>,
    /// Whether this option is one of the correct picks (multi-select).
    #[serde(default)]
    pub correct: bool,
    /// Feedback shown alongside this option.
    #[serde(default)]
    pub feedback: Option<String>,
}

/// A named concept a free-text answer is expected to mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptKeyword {
    /// Concept name reported back as matched or missed.
    pub concept: String,
    /// Keywords, any of which marks the concept as mentioned.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Contribution to the maximum score.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Missing a required concept means the answer cannot be correct.
    #[serde(default)]
    pub required: bool,
}

fn default_weight() -> f64 {
    1.0
}

/// The learner's own verdict on a self-judged question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfJudgeResult {
    pub passed: bool,
}

/// Question format, selecting which evaluator handles a submission.
///
/// Tags that are not recognised parse to `Unknown` rather than failing, so
/// content written for newer question types still reaches the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    TradeOff,
    MultiSelect,
    TextInput,
    SelfJudge,
    Unknown(String),
}

impl QuestionType {
    /// The snake_case tag used in case files.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::TradeOff => "trade_off",
            QuestionType::MultiSelect => "multi_select",
            QuestionType::TextInput => "text_input",
            QuestionType::SelfJudge => "self_judge",
            QuestionType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, QuestionType::Unknown(_))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "multiple_choice" => QuestionType::MultipleChoice,
            "trade_off" => QuestionType::TradeOff,
            "multi_select" => QuestionType::MultiSelect,
            "text_input" => QuestionType::TextInput,
            "self_judge" => QuestionType::SelfJudge,
            other => QuestionType::Unknown(other.to_string()),
        })
    }
}

impl From<String> for QuestionType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        kind.as_str().to_string()
    }
}

/// A submitted answer: either one value or a set of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Single(String),
    Multiple(Vec<String>),
}

impl UserAnswer {
    /// The answer as a single value. Lists are joined with ", ".
    pub fn as_text(&self) -> String {
        match self {
            UserAnswer::Single(s) => s.clone(),
            UserAnswer::Multiple(values) => values.join(", "),
        }
    }

    /// The answer as a list of selections. An empty single value selects nothing.
    pub fn selections(&self) -> Vec<&str> {
        match self {
            UserAnswer::Single(s) if s.is_empty() => Vec::new(),
            UserAnswer::Single(s) => vec![s.as_str()],
            UserAnswer::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for UserAnswer {
    fn from(s: &str) -> Self {
        UserAnswer::Single(s.to_string())
    }
}

impl From<Vec<String>> for UserAnswer {
    fn from(values: Vec<String>) -> Self {
        UserAnswer::Multiple(values)
    }
}

/// Per-question configuration handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionConfig {
    #[serde(default)]
    pub options: Vec<AnswerOption>,
    /// Correct option id for multiple-choice questions.
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub concepts: Vec<ConceptKeyword>,
    /// Base XP awarded for a full score.
    #[serde(default = "default_xp_value")]
    pub xp_value: u32,
    #[serde(default)]
    pub self_judge: Option<SelfJudgeResult>,
    /// Points deducted per wrong pick in multi-select questions.
    #[serde(default = "default_wrong_selection_penalty")]
    pub wrong_selection_penalty: u32,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            correct_answer: None,
            concepts: Vec::new(),
            xp_value: default_xp_value(),
            self_judge: None,
            wrong_selection_penalty: default_wrong_selection_penalty(),
        }
    }
}

pub(crate) fn default_xp_value() -> u32 {
    10
}

pub(crate) fn default_wrong_selection_penalty() -> u32 {
    10
}

/// A single question inside a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question_type: QuestionType,
    pub prompt: String,
    /// Shown to the learner after answering, whatever the outcome.
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub config: QuestionConfig,
}

/// A lesson: a scenario and the questions asked about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    pub id: String,
    pub title: String,
    /// Clearance level label shown by the surrounding application.
    #[serde(default)]
    pub clearance: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl CaseFile {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// XP available if every question is answered perfectly.
    pub fn possible_xp(&self) -> u64 {
        self.questions.iter().map(|q| u64::from(q.config.xp_value)).sum()
    }
}
