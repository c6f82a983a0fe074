//! Knowledge base: the symptom and rule registries plus the built-in seed.
//!
//! Both registries are filled once at startup and only read afterwards.

pub mod rules;
pub mod seed;
pub mod symptoms;

pub use rules::RuleRegistry;
pub use seed::seeded;
pub use symptoms::SymptomRegistry;

use crate::domain::KnowledgeBaseFile;

/// A symptom registry paired with the rules that reference it.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub symptoms: SymptomRegistry,
    pub rules: RuleRegistry,
}

impl From<KnowledgeBaseFile> for KnowledgeBase {
    fn from(file: KnowledgeBaseFile) -> Self {
        Self {
            symptoms: file.symptoms.into_iter().collect(),
            rules: file.rules.into_iter().collect(),
        }
    }
}

impl From<&KnowledgeBase> for KnowledgeBaseFile {
    fn from(kb: &KnowledgeBase) -> Self {
        Self {
            symptoms: kb.symptoms.all().cloned().collect(),
            rules: kb.rules.all().to_vec(),
        }
    }
}
