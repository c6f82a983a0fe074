//! Input/output helpers.
//!
//! - knowledge-base JSON read/write (`knowledge_base`)

pub mod knowledge_base;

pub use knowledge_base::*;
