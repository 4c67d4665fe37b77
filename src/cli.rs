//! CLI struct definitions for the vacatur command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use crate::core::calendar::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "vacatur",
    version = env!("CARGO_PKG_VERSION"),
    about = "Draft a motion to vacate an arbitration award under 9 U.S.C. § 10(a) and compute the filing deadline.",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    /// Path to a vacatur.toml file (defaults to ./vacatur.toml when present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    /// Emit debug logs on stderr.
    #[clap(long, short = 'v', global = true)]
    pub verbose: bool,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the version
    Version,
    /// Compute the last day to move to vacate
    Deadline(DeadlineCli),
    /// List the statutory grounds in the knowledge base
    Grounds(GroundsCli),
    /// Assemble a draft motion
    Draft(DraftCli),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum DraftFormat {
    Docx,
    Markdown,
    Json,
}

#[derive(clap::Args, Debug)]
pub(crate) struct DeadlineCli {
    /// Date the award was issued (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub award_date: NaiveDate,
    /// Override the configured filing window, in calendar months (at least 1).
    #[clap(long, value_parser = clap::value_parser!(i32).range(1..))]
    pub months: Option<i32>,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub(crate) struct GroundsCli {
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub(crate) struct DraftCli {
    /// Date the award was issued (YYYY-MM-DD); cited in the introduction.
    #[clap(long, value_parser = parse_date)]
    pub award_date: NaiveDate,
    /// Ground to argue, in order (repeatable and/or comma-separated). Accepts
    /// codes like `10a2` or citations like `10(a)(2)`.
    #[clap(long = "ground", short = 'g', value_delimiter = ',')]
    pub grounds: Vec<String>,
    /// Output file. Defaults to the configured draft path for docx, stdout otherwise.
    #[clap(long, short)]
    pub out: Option<PathBuf>,
    /// Output format.
    #[clap(long, value_enum, default_value_t = DraftFormat::Docx)]
    pub format: DraftFormat,
    /// Date printed on the draft (YYYY-MM-DD). Defaults to today.
    #[clap(long, value_parser = parse_date)]
    pub generated_on: Option<NaiveDate>,
    /// Produce a draft even when no grounds are selected.
    #[clap(long)]
    pub allow_empty: bool,
}
