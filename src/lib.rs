//! Vacatur: drafting support for motions to vacate arbitration awards.
//!
//! Federal Arbitration Act § 10(a) lists four grounds on which a district
//! court may vacate an award. This crate turns an award date and an ordered
//! selection of those grounds into a structured draft motion, and computes
//! the three-month filing deadline.
//!
//! # Architecture
//!
//! - [`core::calendar`]: calendar-month arithmetic (`shift_months`)
//! - [`core::catalog`]: the embedded, read-only grounds knowledge base
//! - [`core::assembler`]: selection + date → [`core::document::AssembledDocument`]
//! - [`core::docx`] / [`core::markdown`]: sinks for an assembled draft
//!
//! The assembler never reads the wall clock; the draft date comes from a
//! [`core::time::Clock`].
//!
//! # Examples
//!
//! ```bash
//! # Filing deadline for an award issued June 15, 2024
//! vacatur deadline --award-date 2024-06-15
//!
//! # Draft arguing evident partiality, then exceeded powers
//! vacatur draft --award-date 2024-06-15 --ground 10a2 --ground 10a4
//! ```

pub mod core;
mod cli;

use crate::cli::{Cli, Command, DeadlineCli, DraftCli, DraftFormat, GroundsCli, OutputFormat};
use crate::core::assembler::DocumentAssembler;
use crate::core::config::{self, DraftConfig};
use crate::core::error::VacaturError;
use crate::core::time::{Clock, FixedClock, SystemClock};
use crate::core::{calendar, catalog, docx, logging, markdown, preview, time};

use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::Path;

pub fn run() -> Result<(), VacaturError> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let current_dir = std::env::current_dir()?;
    let config = config::load_config(cli.config.as_deref(), &current_dir)?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };
    logging::init_subscriber(level)?;

    match cli.command {
        Command::Version => Ok(()),
        Command::Deadline(args) => run_deadline(&args, &config),
        Command::Grounds(args) => run_grounds(&args),
        Command::Draft(args) => run_draft(&args, &config),
    }
}

fn run_deadline(args: &DeadlineCli, config: &DraftConfig) -> Result<(), VacaturError> {
    let months = args.months.unwrap_or(config.filing.window_months);
    let deadline = calendar::shift_months(args.award_date, months);

    match args.format {
        OutputFormat::Text => {
            println!("Filing Deadline: {}", calendar::format_short(deadline));
        }
        OutputFormat::Json => {
            let envelope = time::command_envelope(
                "deadline",
                "ok",
                serde_json::json!({
                    "award_date": args.award_date.to_string(),
                    "months": months,
                    "filing_deadline": deadline.to_string(),
                    "display": calendar::format_short(deadline),
                }),
            );
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }
    Ok(())
}

fn run_grounds(args: &GroundsCli) -> Result<(), VacaturError> {
    let catalog = catalog::global()?;

    match args.format {
        OutputFormat::Text => {
            for ground in catalog.iter() {
                println!("{}  {}  {}", ground.code.bold(), ground.section, ground.title);
                println!("      {}", ground.case_cite.dimmed());
            }
        }
        OutputFormat::Json => {
            let envelope = time::command_envelope(
                "grounds",
                "ok",
                serde_json::json!({
                    "knowledge_base": catalog.fingerprint(),
                    "grounds": catalog.iter().collect::<Vec<_>>(),
                }),
            );
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }
    Ok(())
}

fn run_draft(args: &DraftCli, config: &DraftConfig) -> Result<(), VacaturError> {
    let catalog = catalog::global()?;
    let grounds = args
        .grounds
        .iter()
        .map(|g| catalog.resolve(g))
        .collect::<Result<Vec<_>, _>>()?;
    let codes: Vec<&str> = grounds.iter().map(|g| g.code.as_str()).collect();

    if codes.is_empty() && !args.allow_empty {
        return Err(VacaturError::ValidationError(
            "select at least one ground (e.g. --ground 10a2) or pass --allow-empty".to_string(),
        ));
    }

    let clock: Box<dyn Clock> = match args.generated_on {
        Some(day) => Box::new(FixedClock(day)),
        None => Box::new(SystemClock),
    };
    let doc = DocumentAssembler::new(catalog).assemble(
        codes.as_slice(),
        args.award_date,
        clock.as_ref(),
    )?;
    let deadline = calendar::shift_months(args.award_date, config.filing.window_months);

    match args.format {
        DraftFormat::Docx => {
            let path = args.out.clone().unwrap_or_else(|| config.output_path());
            docx::write_docx(&doc, &path)?;
            println!("{} Draft written to {}", "✓".green().bold(), path.display());
            println!("  Filing Deadline: {}", calendar::format_short(deadline));
            let lines = preview::preview_lines(&preview::draft_preview(&grounds));
            if lines.is_empty() {
                println!("  Arguments: none");
            } else {
                println!("  Arguments:");
                for line in lines {
                    println!("    {}", line);
                }
            }
        }
        DraftFormat::Markdown => {
            emit(args.out.as_deref(), &markdown::to_markdown(&doc))?;
        }
        DraftFormat::Json => {
            let envelope = time::command_envelope(
                "draft",
                "ok",
                serde_json::json!({
                    "award_date": args.award_date.to_string(),
                    "filing_deadline": deadline.to_string(),
                    "grounds": codes,
                    "preview": preview::draft_preview(&grounds),
                    "knowledge_base": catalog.fingerprint(),
                    "file_name": docx::DOCX_FILE_NAME,
                    "mime_type": docx::DOCX_MIME_TYPE,
                    "document": doc,
                }),
            );
            emit(args.out.as_deref(), &serde_json::to_string_pretty(&envelope)?)?;
        }
    }
    Ok(())
}

fn emit(out: Option<&Path>, body: &str) -> Result<(), VacaturError> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, body)?;
            tracing::info!(path = %path.display(), "wrote draft");
        }
        None => print!("{}", body),
    }
    Ok(())
}
