//! Command-line parsing for the DBD expert system.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the matching engine.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::MessageLocale;

pub mod session;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dbd", version, about = "Dengue (DBD) diagnostic expert system")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Knowledge-base JSON to load instead of the built-in rules.
    #[arg(long = "kb", value_name = "JSON", global = true, env = "DBD_KNOWLEDGE_BASE")]
    pub knowledge_base: Option<PathBuf>,

    /// Language of the fixed outcome messages.
    #[arg(long, value_enum, global = true, env = "DBD_LANG", default_value_t = MessageLocale::En)]
    pub lang: MessageLocale,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnose a set of observed symptom codes.
    Diagnose(DiagnoseArgs),
    /// List the registered symptoms in display order.
    Symptoms,
    /// List the registered rules.
    Rules,
    /// Validate the knowledge base (every rule code must be a known symptom).
    Check,
    /// Answer yes/no for each symptom, then see the diagnosis.
    Interactive,
    /// Write the active knowledge base to a JSON file.
    ExportKb(ExportArgs),
}

#[derive(Debug, Args, Clone)]
pub struct DiagnoseArgs {
    /// Observed symptom codes, e.g. `G01 G04`. Order and repeats do not matter.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Keep unregistered codes instead of rejecting them (they never match).
    #[arg(long)]
    pub allow_unknown: bool,

    /// Print a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Also list the numbers of the matching rules.
    #[arg(long)]
    pub show_matches: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    /// Destination JSON path.
    #[arg(value_name = "JSON")]
    pub path: PathBuf,
}
