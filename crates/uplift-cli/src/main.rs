use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use uplift_form::{QuestionSchema, answers_schema, decode, decode_strict, render_remarkup, validate};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Uplift request questionnaire helper",
    long_about = "Validates, renders, and templates uplift request questionnaire payloads"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an answers payload against the uplift questionnaire.
    Validate {
        /// Path to the answers JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Render an answers payload as remarkup.
    Render {
        /// Path to the answers JSON file.
        #[arg(long, value_name = "ANSWERS")]
        answers: PathBuf,
    },
    /// Print a blank answers payload ready to fill in.
    Blank,
    /// Print the JSON Schema for a fully-answered payload.
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Validate { answers } => run_validate(answers),
        Command::Render { answers } => run_render(answers),
        Command::Blank => run_blank(),
        Command::Schema => run_schema(),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_validate(answers_path: PathBuf) -> CliResult<ExitCode> {
    let raw = fs::read_to_string(&answers_path)?;
    let answers = decode_strict(&raw)?;

    let schema = QuestionSchema::uplift_request();
    let errors = validate(&schema, &answers);
    if errors.is_empty() {
        println!("OK");
        return Ok(ExitCode::SUCCESS);
    }

    for error in &errors {
        println!("{}", error);
    }
    Ok(ExitCode::FAILURE)
}

fn run_render(answers_path: PathBuf) -> CliResult<ExitCode> {
    let raw = fs::read_to_string(&answers_path)?;
    // The render path mirrors the host's property view: a corrupted stored
    // value degrades to an empty form instead of failing.
    let answers = decode(&raw);
    println!("{}", render_remarkup(&answers)?);
    Ok(ExitCode::SUCCESS)
}

fn run_blank() -> CliResult<ExitCode> {
    let blank = QuestionSchema::uplift_request().default_answers();
    println!("{}", serde_json::to_string_pretty(&blank)?);
    Ok(ExitCode::SUCCESS)
}

fn run_schema() -> CliResult<ExitCode> {
    let schema = answers_schema(&QuestionSchema::uplift_request());
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(ExitCode::SUCCESS)
}
