//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - builds and validates the engine
//! - dispatches to a subcommand and prints its output

use std::io;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Command, DiagnoseArgs, ExportArgs, GlobalArgs};
use crate::domain::{EngineConfig, UnknownCodePolicy};
use crate::engine::DiagnosticEngine;
use crate::error::AppError;
use crate::report::DiagnosisReport;

pub mod pipeline;

/// Entry point for the `dbd` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` feeds the clap `env = ...` fallbacks, so it must load before parsing.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.global.verbose);

    match cli.command {
        Command::Diagnose(args) => handle_diagnose(&cli.global, args),
        Command::Symptoms => handle_symptoms(&cli.global),
        Command::Rules => handle_rules(&cli.global),
        Command::Check => handle_check(&cli.global),
        Command::Interactive => handle_interactive(&cli.global),
        Command::ExportKb(args) => handle_export(&cli.global, args),
    }
}

/// Logs go to stderr; `DBD_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "dbd_expert=debug"
    } else {
        "dbd_expert=info"
    };
    let filter = EnvFilter::try_from_env("DBD_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .try_init();
}

fn handle_diagnose(global: &GlobalArgs, args: DiagnoseArgs) -> Result<(), AppError> {
    let config = engine_config_from_args(global, Some(&args));
    let engine = pipeline::start_engine(&config)?;

    let diagnosis = engine.diagnose_with_policy(args.codes.iter().cloned(), config.unknown_codes)?;
    let report = DiagnosisReport::build(&engine, args.codes.iter().cloned(), &diagnosis, config.locale);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!(
            "{}",
            crate::report::format_diagnosis(&report, &diagnosis, config.locale, args.show_matches)
        );
    }
    Ok(())
}

fn handle_symptoms(global: &GlobalArgs) -> Result<(), AppError> {
    let engine = pipeline::start_engine(&engine_config_from_args(global, None))?;
    print!("{}", crate::report::format_symptoms(engine.symptoms()));
    Ok(())
}

fn handle_rules(global: &GlobalArgs) -> Result<(), AppError> {
    let engine = pipeline::start_engine(&engine_config_from_args(global, None))?;
    print!(
        "{}",
        crate::report::format_rules(engine.rules(), engine.symptoms())
    );
    Ok(())
}

fn handle_check(global: &GlobalArgs) -> Result<(), AppError> {
    // Load without validating so every problem is reported here, not at startup.
    let engine = pipeline::load_engine(&engine_config_from_args(global, None))?;
    engine.validate()?;
    println!("{}", check_summary(&engine));
    Ok(())
}

fn handle_interactive(global: &GlobalArgs) -> Result<(), AppError> {
    let config = engine_config_from_args(global, None);
    let engine = pipeline::start_engine(&config)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    crate::cli::session::run_interactive(&engine, config.locale, &mut input, &mut output)?;
    Ok(())
}

fn handle_export(global: &GlobalArgs, args: ExportArgs) -> Result<(), AppError> {
    let engine = pipeline::start_engine(&engine_config_from_args(global, None))?;
    crate::io::write_knowledge_base(&args.path, engine.knowledge_base())?;
    println!("Wrote {}", args.path.display());
    Ok(())
}

pub fn engine_config_from_args(global: &GlobalArgs, diagnose: Option<&DiagnoseArgs>) -> EngineConfig {
    let unknown_codes = match diagnose {
        Some(args) if args.allow_unknown => UnknownCodePolicy::Tolerate,
        _ => UnknownCodePolicy::Reject,
    };
    EngineConfig {
        knowledge_base: global.knowledge_base.clone(),
        locale: global.lang,
        unknown_codes,
    }
}

fn check_summary(engine: &DiagnosticEngine) -> String {
    format!(
        "Knowledge base OK: {} symptom(s), {} rule(s)",
        engine.symptoms().len(),
        engine.rules().len()
    )
}

/// Rewrite argv so `dbd` defaults to `dbd interactive`.
///
/// Rules:
/// - `dbd`                      -> `dbd interactive`
/// - `dbd --lang id ...`        -> `dbd interactive --lang id ...` (no subcommand given)
/// - `dbd --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("interactive".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let has_subcommand = argv.iter().skip(1).any(|a| {
        matches!(
            a.as_str(),
            "diagnose" | "symptoms" | "rules" | "check" | "interactive" | "export-kb"
        )
    });
    if has_subcommand {
        return argv;
    }

    // Only flags were given: treat them as flags of the interactive session.
    if arg1.starts_with('-') {
        argv.insert(1, "interactive".to_string());
    }
    argv
}
