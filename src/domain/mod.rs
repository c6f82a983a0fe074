//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - knowledge-base entities (`Symptom`, `Rule`, `KnowledgeBaseFile`)
//! - diagnostic outcomes (`Diagnosis`) and their message locales
//! - request policy knobs (`UnknownCodePolicy`)

pub mod types;

pub use types::*;
