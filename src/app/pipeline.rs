//! Shared startup logic used by every subcommand.
//!
//! knowledge base (seed or JSON) -> engine -> integrity check
//!
//! The subcommands then only decide what to ask the engine and how to print it.

use tracing::info;

use crate::domain::EngineConfig;
use crate::engine::DiagnosticEngine;
use crate::error::AppError;

/// Build the engine without validating it.
pub fn load_engine(config: &EngineConfig) -> Result<DiagnosticEngine, AppError> {
    let kb = match &config.knowledge_base {
        Some(path) => crate::io::read_knowledge_base(path)?,
        None => crate::knowledge::seeded(),
    };
    Ok(DiagnosticEngine::from(kb))
}

/// Build the engine and refuse to start on a broken knowledge base.
pub fn start_engine(config: &EngineConfig) -> Result<DiagnosticEngine, AppError> {
    let engine = load_engine(config)?;
    engine.validate()?;
    let source = match &config.knowledge_base {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    info!(
        symptoms = engine.symptoms().len(),
        rules = engine.rules().len(),
        source = %source,
        "engine ready"
    );
    Ok(engine)
}
