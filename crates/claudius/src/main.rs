use crate::prelude::*;
use clap::Parser;
use claudius_core::consult::command::{
    DEFAULT_ASSISTANT, DEFAULT_CONTAINER, DEFAULT_PROGRAM, DEFAULT_TIMEOUT_SECS, DEFAULT_USER,
};
use claudius_core::consult::ExecTarget;
use std::ffi::OsString;
use std::process::ExitCode;

mod consult;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Consult a containerized coding assistant with files and screenshots attached",
    subcommand_negates_reqs = true,
    after_help = "Examples:
  claudius -i \"How do I center a div in CSS?\"
  claudius -i \"Why is this not working?\" -f src/app.py src/utils.py
  claudius -i \"What's wrong with this UI?\" -f src/component.tsx -img screenshot.png"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<crate::consult::Preset>,

    #[clap(flatten)]
    consult: crate::consult::ConsultOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Docker container name
    #[clap(long, env = "CLAUDIUS_CONTAINER", global = true, default_value = DEFAULT_CONTAINER)]
    container: String,

    /// User in the container
    #[clap(long, env = "CLAUDIUS_USER", global = true, default_value = DEFAULT_USER)]
    user: String,

    /// Timeout in seconds
    #[clap(
        long,
        env = "CLAUDIUS_TIMEOUT",
        global = true,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Container runtime executable
    #[clap(long, env = "CLAUDIUS_DOCKER", global = true, default_value = DEFAULT_PROGRAM)]
    docker: String,

    /// Assistant executable inside the container
    #[clap(long, env = "CLAUDIUS_ASSISTANT", global = true, default_value = DEFAULT_ASSISTANT)]
    assistant: String,

    /// Print a JSON document instead of the formatted output
    #[clap(long, global = true)]
    json: bool,

    /// Whether to display additional information.
    #[clap(long, env = "CLAUDIUS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn exec_target(&self) -> ExecTarget {
        ExecTarget {
            program: self.docker.clone(),
            container: self.container.clone(),
            user: self.user.clone(),
            assistant: self.assistant.clone(),
        }
    }
}

/// Rewrite the single-dash `-img` spelling to `--images`.
///
/// Clap only accepts single-character short flags, and left alone `-img`
/// would parse as `-i mg`. Both `-img` and `-img=PATH` are rewritten. Tokens
/// after a `--` terminator are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if terminated {
                return arg;
            }
            if arg == "--" {
                terminated = true;
                return arg;
            }
            if arg == "-img" {
                return OsString::from("--images");
            }
            let attached = arg
                .to_str()
                .and_then(|a| a.strip_prefix("-img="))
                .map(|value| OsString::from(format!("--images={value}")));
            attached.unwrap_or(arg)
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse_from(normalize_args(std::env::args_os()));

    let consultation = crate::consult::resolve(app.command, app.consult)?;
    crate::consult::run(consultation, app.global).await
}
