//! Read/write knowledge-base JSON files.
//!
//! A knowledge-base file replaces the built-in seed at startup. The schema is
//! defined by `domain::KnowledgeBaseFile`:
//!
//! ```json
//! {
//!   "symptoms": [{ "code": "G01", "description": "..." }],
//!   "rules": [{ "condition": ["G01", "G02"], "conclusion": "..." }]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::domain::KnowledgeBaseFile;
use crate::error::AppError;
use crate::knowledge::KnowledgeBase;

/// Load a knowledge base from a JSON file.
pub fn read_knowledge_base(path: &Path) -> Result<KnowledgeBase, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!(
            "Failed to open knowledge base '{}': {e}",
            path.display()
        ))
    })?;
    let parsed: KnowledgeBaseFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::config(format!(
            "Invalid knowledge base JSON '{}': {e}",
            path.display()
        ))
    })?;

    info!(
        path = %path.display(),
        symptoms = parsed.symptoms.len(),
        rules = parsed.rules.len(),
        "loaded knowledge base"
    );
    Ok(parsed.into())
}

/// Write a knowledge base as pretty-printed JSON.
pub fn write_knowledge_base(path: &Path, kb: &KnowledgeBase) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!(
            "Failed to create knowledge base '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, &KnowledgeBaseFile::from(kb))
        .map_err(|e| AppError::config(format!("Failed to write knowledge base JSON: {e}")))?;

    Ok(())
}
