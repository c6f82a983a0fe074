//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - held in the in-memory registries
//! - loaded from / exported to knowledge-base JSON
//! - rendered in diagnosis reports

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single clinical observation, e.g. `G01`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub code: String,
    pub description: String,
}

impl Symptom {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A condition -> conclusion rule.
///
/// The condition is a set: it matches an observation only when both sets hold
/// exactly the same codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub condition: BTreeSet<String>,
    pub conclusion: String,
}

impl Rule {
    pub fn new<I, S>(condition: I, conclusion: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            condition: condition.into_iter().map(Into::into).collect(),
            conclusion: conclusion.into(),
        }
    }

    /// Exact set equality. Neither a subset nor a superset matches.
    pub fn matches(&self, observed: &BTreeSet<String>) -> bool {
        self.condition == *observed
    }
}

/// Language of the two fixed outcome messages.
///
/// Conclusions come from the knowledge base and are never translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    #[default]
    En,
    Id,
}

/// What to do with observed codes that are not in the symptom registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownCodePolicy {
    /// Fail the request with `EngineError::UnknownSymptomCode`.
    #[default]
    Reject,
    /// Keep the codes in the observed set. They can never match a validated rule,
    /// so such a request ends in insufficient evidence.
    Tolerate,
}

/// Outcome of a single `diagnose` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnosis {
    /// Exactly one rule matched.
    Conclusion(String),
    /// No rule matched.
    InsufficientEvidence,
    /// Two or more rules share a condition equal to the observation.
    Ambiguous { matches: usize },
}

impl Diagnosis {
    /// User-visible text for this outcome.
    pub fn message(&self, locale: MessageLocale) -> &str {
        match (self, locale) {
            (Diagnosis::Conclusion(text), _) => text,
            (Diagnosis::InsufficientEvidence, MessageLocale::En) => {
                "insufficient evidence for DBD diagnosis; consult a physician."
            }
            (Diagnosis::InsufficientEvidence, MessageLocale::Id) => {
                "Gejala tidak mencukupi untuk diagnosis DBD. Silakan konsultasi lebih lanjut ke dokter."
            }
            (Diagnosis::Ambiguous { .. }, MessageLocale::En) => {
                "multiple possible diagnoses; consult a physician for confirmation."
            }
            (Diagnosis::Ambiguous { .. }, MessageLocale::Id) => {
                "Terdapat lebih dari satu kemungkinan diagnosis. Silakan konsultasi lebih lanjut ke dokter untuk memastikan."
            }
        }
    }

    /// Stable machine-readable name (used in JSON reports).
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnosis::Conclusion(_) => "conclusion",
            Diagnosis::InsufficientEvidence => "insufficient_evidence",
            Diagnosis::Ambiguous { .. } => "ambiguous",
        }
    }
}

/// A run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, `.env` / environment, and defaults.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Knowledge-base JSON; `None` uses the built-in seed.
    pub knowledge_base: Option<PathBuf>,
    pub locale: MessageLocale,
    pub unknown_codes: UnknownCodePolicy,
}

/// Serialized knowledge base (`--kb` files and `dbd export-kb`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseFile {
    pub symptoms: Vec<Symptom>,
    pub rules: Vec<Rule>,
}
