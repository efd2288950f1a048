use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Purlin CLI - LRFD design check of cold-formed steel purlins with a full calculation trace."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the purlin described by a project file.
    Check(CheckArgs),
    /// Run the built-in worked example (C-100x50x20x3.2, 4 m span).
    Demo(OutputArgs),
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the project file (JSON).
    #[arg(value_name = "PATH")]
    pub project: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output selection shared by all subcommands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print the full result as JSON after the summary.
    #[arg(long)]
    pub json: bool,

    /// Print every calculation step (title, substitution, result).
    #[arg(long)]
    pub steps: bool,
}
