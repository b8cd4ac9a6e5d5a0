use crate::prelude::{eprintln, *};
use claudius_core::consult::{
    build_prompt, debug_instruction, exit_code_for, review_instruction, DEFAULT_REVIEW_FOCUS,
};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Duration;

pub mod invoke;
pub mod load;
pub mod output;

#[derive(Debug, Clone, clap::Args)]
pub struct ConsultOptions {
    /// Your question or instruction
    #[arg(short, long, required = true)]
    pub instruction: Option<String>,

    /// File paths to include for context
    #[arg(short, long, num_args = 0..)]
    pub files: Vec<String>,

    /// Image paths to include (will be converted to base64). Also accepted as -img
    #[arg(long, num_args = 0..)]
    pub images: Vec<String>,
}

/// Shortcuts that fill in the instruction from a template
#[derive(Debug, clap::Subcommand)]
pub enum Preset {
    /// Ask a simple question without files or images
    #[clap(name = "ask")]
    Ask {
        /// Your question
        question: String,
    },

    /// Debug a specific file
    #[clap(name = "debug")]
    Debug {
        /// Path to the file with the issue
        file: String,

        /// Description of the issue
        #[arg(long)]
        issue: String,
    },

    /// Request a code review for the given files
    #[clap(name = "review")]
    Review {
        /// Files to review
        #[arg(required = true, num_args = 1..)]
        files: Vec<String>,

        /// What to focus on (e.g. performance, security, style)
        #[arg(long, default_value = DEFAULT_REVIEW_FOCUS)]
        focus: String,
    },
}

/// Instruction plus the paths to attach, before anything is read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub instruction: String,
    pub files: Vec<String>,
    pub images: Vec<String>,
}

/// Turn parsed arguments into a consultation. A preset takes precedence over
/// the top-level flags.
pub fn resolve(preset: Option<Preset>, options: ConsultOptions) -> Result<Consultation> {
    let consultation = match preset {
        Some(Preset::Ask { question }) => Consultation {
            instruction: question,
            files: Vec::new(),
            images: Vec::new(),
        },
        Some(Preset::Debug { file, issue }) => Consultation {
            instruction: debug_instruction(&issue),
            files: vec![file],
            images: Vec::new(),
        },
        Some(Preset::Review { files, focus }) => Consultation {
            instruction: review_instruction(&focus),
            files,
            images: Vec::new(),
        },
        None => Consultation {
            instruction: options.instruction.ok_or(Error::MissingInstruction)?,
            files: options.files,
            images: options.images,
        },
    };

    Ok(consultation)
}

/// Module entry point
pub async fn run(consultation: Consultation, global: crate::Global) -> Result<ExitCode> {
    let loaded = load::load_inputs(
        consultation.instruction,
        &consultation.files,
        &consultation.images,
    )
    .await;

    for skipped in &loaded.skipped {
        eprintln!("{}", skipped.warning().yellow());
    }

    let prompt = build_prompt(&loaded.request);
    let target = global.exec_target();

    if global.verbose {
        eprintln!("Program: {}", target.program);
        eprintln!("Container: {}", target.container);
        eprintln!("User: {}", target.user);
        eprintln!("Timeout: {}s", global.timeout);
        eprintln!("Prompt length: {} chars", prompt.chars().count());
        eprintln!("Skipped inputs: {}", loaded.skipped.len());
    }

    if !global.json {
        output::print_request(&prompt);
    }

    let outcome = invoke::invoke(&target, &prompt, Duration::from_secs(global.timeout)).await;
    let response = outcome.into_response();

    if global.json {
        let report =
            output::ConsultOutput::new(&target, &global, &prompt, loaded.skipped, &response);
        output::print_json(&report)?;
    } else {
        output::print_response(&response);
    }

    Ok(ExitCode::from(exit_code_for(&response) as u8))
}
