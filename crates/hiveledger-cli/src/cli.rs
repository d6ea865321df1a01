use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hiveledger_core::CondenserClient;

/// Extract and export normalized Hive account histories.
#[derive(Debug, Parser)]
#[command(name = "hiveledger", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export an account's financial operation history as CSV.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Account name whose history to export.
    pub account: String,

    /// Inclusive start date, YYYY-MM-DD. The walk stops at older records.
    #[arg(long)]
    pub start_date: Option<String>,

    /// Inclusive end date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub end_date: Option<String>,

    /// Condenser API node endpoint.
    #[arg(long, default_value = CondenserClient::DEFAULT_ENDPOINT)]
    pub node: String,

    /// Write the CSV here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Interpret designator-less timestamps at the local offset instead of
    /// assuming UTC.
    #[arg(long)]
    pub local_timestamps: bool,

    /// Suppress per-page progress reporting on stderr.
    #[arg(long, short)]
    pub quiet: bool,
}
