//! `dbd-expert` library crate.
//!
//! The binary (`dbd`) is a thin wrapper around this library so that:
//!
//! - the matching engine is testable without spawning processes
//! - the engine can be embedded behind other front-ends (web form, REST, ...)
//!
//! Typical embedding:
//!
//! ```
//! use dbd_expert::engine::DiagnosticEngine;
//! use dbd_expert::domain::{Diagnosis, MessageLocale};
//!
//! let engine = DiagnosticEngine::seeded();
//! let diagnosis = engine.diagnose(["G04", "G01"]);
//! assert_eq!(diagnosis, Diagnosis::Conclusion("Pasien mengalami Demam Berdarah".into()));
//! assert_eq!(diagnosis.message(MessageLocale::En), "Pasien mengalami Demam Berdarah");
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod io;
pub mod knowledge;
pub mod report;
