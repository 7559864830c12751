//! The `casefile validate` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use casefile_core::model::CaseFile;
use casefile_core::parser::{load_case_directory, parse_case_file, validate_case_file};

pub fn execute(case_file_path: PathBuf) -> Result<()> {
    let case_files = if case_file_path.is_dir() {
        load_case_directory(&case_file_path)?
    } else {
        vec![parse_case_file(&case_file_path)?]
    };

    let mut total_warnings = 0;

    for case_file in &case_files {
        println!(
            "Case file: {} ({} questions)",
            case_file.title,
            case_file.questions.len()
        );
        println!("  Types: {}", type_summary(case_file));
        println!("  Possible XP: {}", case_file.possible_xp());

        let warnings = validate_case_file(case_file);
        for w in &warnings {
            let prefix = match &w.question_id {
                Some(id) => format!("  [{id}]"),
                None => "  ".to_string(),
            };
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All case files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

/// Question counts per type tag, e.g. `multi_select 1, self_judge 2`.
fn type_summary(case_file: &CaseFile) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for q in &case_file.questions {
        *counts.entry(q.question_type.as_str()).or_default() += 1;
    }
    if counts.is_empty() {
        return "none".to_string();
    }
    counts
        .iter()
        .map(|(tag, n)| format!("{tag} {n}"))
        .collect::<Vec<_>>()
        .join(", ")
}
