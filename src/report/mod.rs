//! Reporting: diagnosis reports and formatted terminal output.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::{Diagnosis, MessageLocale};
use crate::engine::DiagnosticEngine;
use crate::error::AppError;

pub mod format;

pub use format::*;

/// Machine-readable summary of one diagnosis (`dbd diagnose --json`).
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    /// Observed codes, sorted and deduplicated.
    pub observed: Vec<String>,
    pub outcome: &'static str,
    pub message: String,
    /// One-based rule numbers whose condition equals the observation.
    pub matched_rules: Vec<usize>,
    pub generated_at: DateTime<Local>,
}

impl DiagnosisReport {
    pub fn build<I, S>(
        engine: &DiagnosticEngine,
        observed: I,
        diagnosis: &Diagnosis,
        locale: MessageLocale,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let observed: std::collections::BTreeSet<String> =
            observed.into_iter().map(Into::into).collect();
        let matched_rules = engine
            .matching_rules(observed.iter().cloned())
            .into_iter()
            .map(|(idx, _)| idx + 1)
            .collect();

        Self {
            observed: observed.into_iter().collect(),
            outcome: diagnosis.kind(),
            message: diagnosis.message(locale).to_string(),
            matched_rules,
            generated_at: Local::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::config(format!("Failed to serialize diagnosis report: {e}")))
    }
}
