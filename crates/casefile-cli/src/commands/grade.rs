//! The `casefile grade` command.

use std::path::PathBuf;

use anyhow::Result;

use casefile_core::parser;
use casefile_core::report::GradeReport;

use crate::config::load_config_from;

pub fn execute(
    case_file_path: PathBuf,
    submissions_path: PathBuf,
    output: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let case_file = parser::parse_case_file(&case_file_path)?;
    let submissions = parser::parse_submissions(&submissions_path)?;

    for w in parser::validate_case_file(&case_file) {
        let question = w.question_id.as_deref().unwrap_or("-");
        tracing::warn!("[{question}] {}", w.message);
    }

    eprintln!(
        "Grading {} submission(s) against '{}' ({} questions)",
        submissions.len(),
        case_file.title,
        case_file.questions.len()
    );

    let report = GradeReport::build(&case_file, &submissions);

    let format = format.unwrap_or(config.default_format);
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print_summary(&report),
    }

    let output = output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
    let path = output.join(format!("grade-{timestamp}.json"));
    report.save_json(&path)?;
    eprintln!("Report saved to: {}", path.display());

    Ok(())
}

fn print_summary(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Question", "Type", "Score", "Correct", "XP", "Feedback"]);

    for answer in &report.answers {
        let result = &answer.result;
        table.add_row(vec![
            Cell::new(&answer.question_id),
            Cell::new(answer.question_type.as_str()),
            Cell::new(format!("{}/{}", result.score, result.max_score)),
            Cell::new(if result.is_correct { "yes" } else { "no" }),
            Cell::new(result.xp_earned),
            Cell::new(&result.feedback),
        ]);
    }

    println!("{table}");

    let totals = &report.totals;
    println!(
        "\nCorrect: {}/{}  XP: {}/{}  Average score: {:.1}",
        totals.correct, totals.answered, totals.total_xp, totals.possible_xp, totals.average_score
    );

    for r in &report.rejected {
        println!("  REJECTED [{}]: {}", r.question_id, r.reason);
    }
}
