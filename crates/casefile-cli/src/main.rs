//! casefile CLI — grade learner answers against case-file lessons.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "casefile", version, about = "Case-file lesson answer grader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single answer
    Evaluate {
        /// Path to the .toml case file
        #[arg(long)]
        case_file: PathBuf,

        /// Question ID within the case file
        #[arg(long)]
        question: String,

        /// Answer value (repeat for multi-select)
        #[arg(long)]
        answer: Vec<String>,

        /// Self-judge verdict: the learner judged their answer as passing
        #[arg(long)]
        passed: bool,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade a batch of submissions and write a report
    Grade {
        /// Path to the .toml case file
        #[arg(long)]
        case_file: PathBuf,

        /// Path to the .toml submissions file
        #[arg(long)]
        submissions: PathBuf,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate case file TOML files
    Validate {
        /// Path to case file or directory
        #[arg(long)]
        case_file: PathBuf,
    },

    /// Create starter config and example case file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("casefile=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            case_file,
            question,
            answer,
            passed,
            format,
            config,
        } => commands::evaluate::execute(case_file, question, answer, passed, format, config),
        Commands::Grade {
            case_file,
            submissions,
            output,
            format,
            config,
        } => commands::grade::execute(case_file, submissions, output, format, config),
        Commands::Validate { case_file } => commands::validate::execute(case_file),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
