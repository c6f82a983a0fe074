//! Symptom registry: known codes and their descriptions.

use std::collections::HashMap;

use crate::domain::Symptom;

/// Insertion-ordered map of symptom code -> symptom.
///
/// Re-registering a code overwrites its description (last write wins) but keeps
/// the position of the first registration, so display order is stable.
#[derive(Debug, Clone, Default)]
pub struct SymptomRegistry {
    entries: Vec<Symptom>,
    index: HashMap<String, usize>,
}

impl SymptomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, code: impl Into<String>, description: impl Into<String>) {
        let symptom = Symptom::new(code, description);
        match self.index.get(&symptom.code) {
            Some(&pos) => self.entries[pos] = symptom,
            None => {
                self.index.insert(symptom.code.clone(), self.entries.len());
                self.entries.push(symptom);
            }
        }
    }

    /// Symptoms in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Symptom> {
        self.entries.iter()
    }

    pub fn get(&self, code: &str) -> Option<&Symptom> {
        self.index.get(code).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Symptom> for SymptomRegistry {
    fn from_iter<T: IntoIterator<Item = Symptom>>(iter: T) -> Self {
        let mut registry = Self::new();
        for s in iter {
            registry.register(s.code, s.description);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_registration_order() {
        let mut reg = SymptomRegistry::new();
        reg.register("G03", "c");
        reg.register("G01", "a");
        reg.register("G02", "b");
        let codes: Vec<&str> = reg.all().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["G03", "G01", "G02"]);
    }

    #[test]
    fn overwrite_is_last_write_wins_in_place() {
        let mut reg = SymptomRegistry::new();
        reg.register("G01", "old");
        reg.register("G02", "b");
        reg.register("G01", "new");

        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get("G01").map(|s| s.description.as_str()), Some("new"));
        let codes: Vec<&str> = reg.all().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["G01", "G02"]);
    }

    #[test]
    fn lookup_missing_code() {
        let reg = SymptomRegistry::new();
        assert!(reg.is_empty());
        assert!(!reg.contains("G01"));
        assert!(reg.get("G01").is_none());
    }
}
