use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use jsonvet::engine::Draft;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an instance document against a schema, printing the
    /// defaulted copy.
    Validate(ValidateArgs),
    /// Check that schema documents are valid JSON Schema.
    Check(CheckArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Instance document path, or `-` for stdin.
    pub instance: PathBuf,
    /// Schema document path.
    #[arg(long, short = 's', value_name = "FILE")]
    pub schema: PathBuf,
    /// Pin the JSON Schema dialect instead of detecting it from `$schema`.
    #[arg(long, value_name = "DRAFT")]
    pub draft: Option<DraftArg>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema document paths.
    #[arg(required = true)]
    pub schemas: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DraftArg {
    Draft4,
    Draft6,
    Draft7,
    Draft201909,
    Draft202012,
}

impl From<DraftArg> for Draft {
    fn from(draft: DraftArg) -> Self {
        match draft {
            DraftArg::Draft4 => Draft::Draft4,
            DraftArg::Draft6 => Draft::Draft6,
            DraftArg::Draft7 => Draft::Draft7,
            DraftArg::Draft201909 => Draft::Draft201909,
            DraftArg::Draft202012 => Draft::Draft202012,
        }
    }
}
