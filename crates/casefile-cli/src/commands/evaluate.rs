//! The `casefile evaluate` command.

use std::path::PathBuf;

use anyhow::Result;

use casefile_core::grading::{grade, Submission};
use casefile_core::model::{QuestionType, SelfJudgeResult, UserAnswer};
use casefile_core::parser;
use casefile_core::GradeError;

use crate::config::load_config_from;

pub fn execute(
    case_file_path: PathBuf,
    question_id: String,
    answers: Vec<String>,
    passed: bool,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let case_file = parser::parse_case_file(&case_file_path)?;

    let question =
        case_file
            .question(&question_id)
            .ok_or_else(|| GradeError::QuestionNotFound {
                case_file: case_file.id.clone(),
                question_id: question_id.clone(),
            })?;

    let answer = match question.question_type {
        QuestionType::MultiSelect => UserAnswer::Multiple(answers),
        _ => UserAnswer::Single(answers.join(" ")),
    };
    let self_judge = (question.question_type == QuestionType::SelfJudge)
        .then_some(SelfJudgeResult { passed });

    let graded = grade(
        &case_file,
        &Submission {
            question_id,
            answer,
            self_judge,
        },
    )?;

    let format = format.unwrap_or(config.default_format);
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&graded)?),
        _ => {
            let result = &graded.result;
            let verdict = if result.is_correct { "CORRECT" } else { "INCORRECT" };
            println!(
                "[{}] {} :: {}",
                verdict, graded.question_type, graded.question_id
            );
            println!("Score: {}/{}", result.score, result.max_score);
            println!("XP earned: {}", result.xp_earned);
            println!("{}", result.feedback);
            if let Some(matched) = &result.matched_concepts {
                println!("Matched concepts: {}", display_list(matched));
            }
            if let Some(missed) = &result.missed_concepts {
                println!("Missed concepts: {}", display_list(missed));
            }
            if let Some(explanation) = &graded.explanation {
                println!("\nExplanation: {}", explanation.trim());
            }
        }
    }

    Ok(())
}

fn display_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
