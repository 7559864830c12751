//! The `casefile init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create casefile.toml
    if std::path::Path::new("casefile.toml").exists() {
        println!("casefile.toml already exists, skipping.");
    } else {
        std::fs::write("casefile.toml", SAMPLE_CONFIG)?;
        println!("Created casefile.toml");
    }

    // Create example case file
    std::fs::create_dir_all("case-files")?;
    let example_path = std::path::Path::new("case-files/example.toml");
    if example_path.exists() {
        println!("case-files/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CASE_FILE)?;
        println!("Created case-files/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: casefile validate --case-file {}", example_path.display());
    println!(
        "  2. Run: casefile evaluate --case-file {} --question suspect --answer b",
        example_path.display()
    );

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# casefile configuration

output_dir = "./casefile-results"
default_format = "text"
"#;

const EXAMPLE_CASE_FILE: &str = r#"[case_file]
id = "example"
title = "The Slow Dashboard"
clearance = "recruit"
description = "The metrics dashboard takes thirty seconds to load every morning."

[[questions]]
id = "suspect"
type = "multiple_choice"
prompt = "Which component should you investigate first?"
explanation = "The dashboard issues one query per widget on a cold cache."
xp_value = 20
correct_answer = "b"

[[questions.options]]
id = "a"
text = "The CDN"

[[questions.options]]
id = "b"
text = "The database query path"
feedback = "Slow first loads usually point at cold reads."

[[questions]]
id = "fix"
type = "text_input"
prompt = "Describe how you would make the first load fast."
xp_value = 30

[[questions.concepts]]
concept = "caching"
keywords = ["cache", "memoize"]
weight = 50
required = true

[[questions.concepts]]
concept = "batching"
keywords = ["batch", "single query", "join"]
weight = 50
"#;
