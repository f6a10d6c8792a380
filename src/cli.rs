use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// climxr labeled-array converter.
#[derive(Parser)]
#[command(
    name = "climxr",
    version,
    about = "Convert climate-model fields and states into labeled arrays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a state (or one entry) and write it as JSON.
    Convert(ConvertArgs),
    /// Print a short summary of the converted dimensions and coordinates.
    Describe(DescribeArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Path to the state TOML file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Convert only this entry instead of the whole state.
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Emit compact JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `describe` subcommand.
#[derive(clap::Args)]
pub struct DescribeArgs {
    /// Path to the state TOML file.
    #[arg(short, long)]
    pub input: PathBuf,
}
