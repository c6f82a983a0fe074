//! Error types.
//!
//! Two layers:
//!
//! - `EngineError`: typed failures of the knowledge base and engine (unknown
//!   codes, dangling rule references). Diagnostic outcomes are *not* errors.
//! - `AppError`: what the binary reports, carrying a process exit code.

use thiserror::Error;

/// Exit code for configuration, I/O and knowledge-base file problems.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for invalid input or a knowledge base that fails validation.
pub const EXIT_INVALID: u8 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown symptom code(s): {}", .codes.join(", "))]
    UnknownSymptomCode { codes: Vec<String> },
    #[error("Rule #{rule} references unregistered symptom code '{code}'")]
    DanglingRuleCode { rule: usize, code: String },
    #[error("Rule #{rule} has an empty condition")]
    EmptyCondition { rule: usize },
    #[error("Knowledge base failed validation:\n{}", format_problems(.0))]
    InvalidKnowledgeBase(Vec<EngineError>),
}

fn format_problems(problems: &[EngineError]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::new(EXIT_INVALID, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
