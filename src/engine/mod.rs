//! Diagnostic engine.
//!
//! Matching is exact set equality between the observed codes and a rule's
//! condition. A subset or superset of a condition does not match it; there is no
//! scoring and no chaining.
//!
//! The engine owns an immutable knowledge base and is shared read-only; every
//! request brings its own observed set.

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{Diagnosis, Rule, UnknownCodePolicy};
use crate::error::EngineError;
use crate::knowledge::{KnowledgeBase, RuleRegistry, SymptomRegistry};

#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    kb: KnowledgeBase,
}

impl DiagnosticEngine {
    pub fn new(symptoms: SymptomRegistry, rules: RuleRegistry) -> Self {
        Self {
            kb: KnowledgeBase { symptoms, rules },
        }
    }

    /// Engine over the built-in knowledge base.
    pub fn seeded() -> Self {
        Self::from(crate::knowledge::seeded())
    }

    pub fn symptoms(&self) -> &SymptomRegistry {
        &self.kb.symptoms
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.kb.rules
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Decide the outcome for an observed symptom set.
    ///
    /// Code order and repeated codes do not matter. Codes are not checked
    /// against the symptom registry here; see `diagnose_with_policy`.
    pub fn diagnose<I, S>(&self, observed: I) -> Diagnosis
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let observed = to_set(observed);
        let matched = self.matches_for(&observed);

        let diagnosis = match matched.as_slice() {
            [] => Diagnosis::InsufficientEvidence,
            [(_, rule)] => Diagnosis::Conclusion(rule.conclusion.clone()),
            many => Diagnosis::Ambiguous {
                matches: many.len(),
            },
        };
        debug!(observed = ?observed, outcome = diagnosis.kind(), "diagnosed");
        diagnosis
    }

    /// Rules whose condition equals the observed set, as `(index, rule)` pairs
    /// in registration order. Indices are zero-based.
    pub fn matching_rules<I, S>(&self, observed: I) -> Vec<(usize, &Rule)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches_for(&to_set(observed))
    }

    /// Fail with every observed code that is not registered (sorted).
    pub fn check_observed<I, S>(&self, observed: I) -> Result<(), EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unknown: Vec<String> = to_set(observed)
            .into_iter()
            .filter(|code| !self.kb.symptoms.contains(code))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(EngineError::UnknownSymptomCode { codes: unknown })
        }
    }

    /// `diagnose`, preceded by an unknown-code check when the policy rejects them.
    ///
    /// Tolerated unknown codes stay in the observed set, so they never match.
    pub fn diagnose_with_policy<I, S>(
        &self,
        observed: I,
        policy: UnknownCodePolicy,
    ) -> Result<Diagnosis, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let observed = to_set(observed);
        if policy == UnknownCodePolicy::Reject {
            self.check_observed(observed.iter().cloned())?;
        }
        Ok(self.diagnose(observed))
    }

    /// Startup integrity check over the knowledge base.
    ///
    /// Every condition code must be a registered symptom and no condition may be
    /// empty. All problems are collected. Matching is unaffected either way.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut problems = Vec::new();

        for (idx, rule) in self.kb.rules.all().iter().enumerate() {
            let rule_no = idx + 1;
            if rule.condition.is_empty() {
                problems.push(EngineError::EmptyCondition { rule: rule_no });
            }
            for code in &rule.condition {
                if !self.kb.symptoms.contains(code) {
                    problems.push(EngineError::DanglingRuleCode {
                        rule: rule_no,
                        code: code.clone(),
                    });
                }
            }
        }

        if problems.is_empty() {
            debug!(
                symptoms = self.kb.symptoms.len(),
                rules = self.kb.rules.len(),
                "knowledge base valid"
            );
            Ok(())
        } else {
            Err(EngineError::InvalidKnowledgeBase(problems))
        }
    }

    fn matches_for(&self, observed: &BTreeSet<String>) -> Vec<(usize, &Rule)> {
        self.kb
            .rules
            .all()
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.matches(observed))
            .collect()
    }
}

impl From<KnowledgeBase> for DiagnosticEngine {
    fn from(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

fn to_set<I, S>(observed: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    observed.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MessageLocale;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    const INSUFFICIENT: &str = "insufficient evidence for DBD diagnosis; consult a physician.";
    const AMBIGUOUS: &str = "multiple possible diagnoses; consult a physician for confirmation.";

    fn message(engine: &DiagnosticEngine, observed: &[&str]) -> String {
        engine
            .diagnose(observed.iter().copied())
            .message(MessageLocale::En)
            .to_string()
    }

    #[test]
    fn seed_scenarios() {
        let engine = DiagnosticEngine::seeded();
        let cases: [(&[&str], &str); 7] = [
            (&["G01", "G02"], "Pasien mengalami Demam Berdarah ringan"),
            (&["G01", "G04"], "Pasien mengalami Demam Berdarah"),
            (&["G06", "G04"], "Pasien mengalami Demam Berdarah tingkat lanjut"),
            (&["G01", "G03", "G04"], "Pasien mengalami Demam Berdarah Dengue"),
            (&["G01"], INSUFFICIENT),
            (&["G01", "G02", "G04"], INSUFFICIENT),
            (&[], INSUFFICIENT),
        ];
        for (observed, expected) in cases {
            assert_eq!(message(&engine, observed), expected, "observed {observed:?}");
        }
    }

    #[test]
    fn every_seed_rule_is_reachable() {
        let engine = DiagnosticEngine::seeded();
        for rule in engine.rules().all() {
            let got = engine.diagnose(rule.condition.iter().cloned());
            assert_eq!(got, Diagnosis::Conclusion(rule.conclusion.clone()));
        }
    }

    #[test]
    fn superset_of_every_rule_is_insufficient() {
        let engine = DiagnosticEngine::seeded();
        for rule in engine.rules().all() {
            let extra = engine
                .symptoms()
                .all()
                .map(|s| s.code.clone())
                .find(|c| !rule.condition.contains(c))
                .unwrap();
            let mut observed: Vec<String> = rule.condition.iter().cloned().collect();
            observed.push(extra);
            assert_eq!(engine.diagnose(observed), Diagnosis::InsufficientEvidence);
        }
    }

    #[test]
    fn order_and_repetition_do_not_matter() {
        let engine = DiagnosticEngine::seeded();
        let mut rng = StdRng::seed_from_u64(7);
        for rule in engine.rules().all() {
            let mut codes: Vec<String> = rule.condition.iter().cloned().collect();
            let expected = engine.diagnose(codes.clone());
            for _ in 0..10 {
                codes.shuffle(&mut rng);
                assert_eq!(engine.diagnose(codes.clone()), expected);
            }
            codes.push(codes[0].clone());
            assert_eq!(engine.diagnose(codes), expected);
        }
    }

    #[test]
    fn duplicate_conditions_are_ambiguous() {
        let mut kb = crate::knowledge::seeded();
        kb.rules.register(["G02", "G01"], "Duplikat");
        let engine = DiagnosticEngine::from(kb);

        let got = engine.diagnose(["G01", "G02"]);
        assert_eq!(got, Diagnosis::Ambiguous { matches: 2 });
        assert_eq!(got.message(MessageLocale::En), AMBIGUOUS);

        let matched: Vec<usize> = engine
            .matching_rules(["G01", "G02"])
            .into_iter()
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(matched, [0, 7]);

        // Other rules are unaffected.
        assert_eq!(
            message(&engine, &["G01", "G04"]),
            "Pasien mengalami Demam Berdarah"
        );
    }

    #[test]
    fn empty_registries_never_match() {
        let engine = DiagnosticEngine::new(SymptomRegistry::new(), RuleRegistry::new());
        assert_eq!(engine.diagnose(Vec::<String>::new()), Diagnosis::InsufficientEvidence);
        assert_eq!(engine.diagnose(["G01"]), Diagnosis::InsufficientEvidence);
    }

    #[test]
    fn check_observed_reports_all_unknown_codes_sorted() {
        let engine = DiagnosticEngine::seeded();
        assert!(engine.check_observed(["G01", "G10"]).is_ok());

        let err = engine.check_observed(["G99", "G01", "A1"]).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownSymptomCode {
                codes: vec!["A1".to_string(), "G99".to_string()]
            }
        );
    }

    #[test]
    fn policy_controls_unknown_codes() {
        let engine = DiagnosticEngine::seeded();

        let rejected = engine.diagnose_with_policy(["G01", "G02", "X"], UnknownCodePolicy::Reject);
        assert!(matches!(rejected, Err(EngineError::UnknownSymptomCode { .. })));

        let tolerated = engine
            .diagnose_with_policy(["G01", "G02", "X"], UnknownCodePolicy::Tolerate)
            .unwrap();
        assert_eq!(tolerated, Diagnosis::InsufficientEvidence);

        let ok = engine
            .diagnose_with_policy(["G02", "G01"], UnknownCodePolicy::Reject)
            .unwrap();
        assert_eq!(
            ok,
            Diagnosis::Conclusion("Pasien mengalami Demam Berdarah ringan".to_string())
        );
    }

    #[test]
    fn validate_accepts_seed() {
        assert!(DiagnosticEngine::seeded().validate().is_ok());
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut kb = crate::knowledge::seeded();
        kb.rules.register(["G01", "G77"], "a");
        kb.rules.register(Vec::<String>::new(), "b");
        let engine = DiagnosticEngine::from(kb);

        match engine.validate() {
            Err(EngineError::InvalidKnowledgeBase(problems)) => {
                assert_eq!(
                    problems,
                    vec![
                        EngineError::DanglingRuleCode {
                            rule: 8,
                            code: "G77".to_string()
                        },
                        EngineError::EmptyCondition { rule: 9 },
                    ]
                );
            }
            other => panic!("unexpected: {other:?}"),
        }

        // Validation does not alter matching.
        assert_eq!(
            engine.diagnose(["G77", "G01"]),
            Diagnosis::Conclusion("a".to_string())
        );
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiagnosticEngine>();
    }
}
