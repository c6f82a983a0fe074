//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized

use crate::domain::{Diagnosis, MessageLocale, Rule};
use crate::knowledge::{RuleRegistry, SymptomRegistry};

use super::DiagnosisReport;

/// One line per symptom, in registration order.
pub fn format_symptoms(symptoms: &SymptomRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Symptoms ({}):\n", symptoms.len()));
    for s in symptoms.all() {
        out.push_str(&format!("  {:<5} {}\n", s.code, s));
    }
    out
}

/// Rule table with conditions rendered against the symptom descriptions.
pub fn format_rules(rules: &RuleRegistry, symptoms: &SymptomRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rules ({}):\n", rules.len()));
    for (idx, rule) in rules.all().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}) {{{}}} => {}\n",
            idx + 1,
            condition_codes(rule),
            rule.conclusion
        ));
        for code in &rule.condition {
            let description = symptoms
                .get(code)
                .map(|s| s.description.as_str())
                .unwrap_or("(unregistered)");
            out.push_str(&format!("       {code}: {description}\n"));
        }
    }
    out
}

/// Human-readable diagnosis result.
///
/// With `show_matches`, the matching rule numbers are appended (useful when the
/// outcome is ambiguous).
pub fn format_diagnosis(
    report: &DiagnosisReport,
    diagnosis: &Diagnosis,
    locale: MessageLocale,
    show_matches: bool,
) -> String {
    let mut out = String::new();
    out.push_str("=== Hasil Diagnosis ===\n");
    if report.observed.is_empty() {
        out.push_str("Observed: (none)\n");
    } else {
        out.push_str(&format!("Observed: {}\n", report.observed.join(", ")));
    }
    out.push_str(&format!("{}\n", diagnosis.message(locale)));

    if show_matches && !report.matched_rules.is_empty() {
        let numbers: Vec<String> = report
            .matched_rules
            .iter()
            .map(|n| format!("#{n}"))
            .collect();
        out.push_str(&format!("Matched rules: {}\n", numbers.join(", ")));
    }
    out
}

fn condition_codes(rule: &Rule) -> String {
    rule.condition
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiagnosticEngine;

    #[test]
    fn symptoms_listed_in_order() {
        let engine = DiagnosticEngine::seeded();
        let text = format_symptoms(engine.symptoms());
        assert!(text.starts_with("Symptoms (10):\n"));
        let g01 = text.find("G01").unwrap();
        let g10 = text.find("G10").unwrap();
        assert!(g01 < g10);
        assert!(text.contains("  G07   Nyeri kepala\n"));
    }

    #[test]
    fn rules_show_conditions_and_descriptions() {
        let engine = DiagnosticEngine::seeded();
        let text = format_rules(engine.rules(), engine.symptoms());
        assert!(text.contains("  7) {G05, G10} => Pasien mengalami komplikasi DBD berat (perdarahan dalam)\n"));
        assert!(text.contains("       G10: Tinja berwarna hitam\n"));
    }

    #[test]
    fn unregistered_condition_code_is_marked() {
        let mut rules = RuleRegistry::new();
        rules.register(["Z1"], "z");
        let text = format_rules(&rules, &SymptomRegistry::new());
        assert!(text.contains("Z1: (unregistered)"));
    }

    #[test]
    fn diagnosis_with_matches() {
        let mut kb = crate::knowledge::seeded();
        kb.rules.register(["G01", "G02"], "dup");
        let engine = DiagnosticEngine::from(kb);

        let diagnosis = engine.diagnose(["G02", "G01"]);
        let report = DiagnosisReport::build(&engine, ["G02", "G01"], &diagnosis, MessageLocale::En);
        let text = format_diagnosis(&report, &diagnosis, MessageLocale::En, true);

        assert!(text.contains("Observed: G01, G02\n"));
        assert!(text.contains("multiple possible diagnoses; consult a physician for confirmation.\n"));
        assert!(text.contains("Matched rules: #1, #8\n"));
    }

    #[test]
    fn diagnosis_without_observations() {
        let engine = DiagnosticEngine::seeded();
        let diagnosis = engine.diagnose(Vec::<String>::new());
        let report = DiagnosisReport::build(&engine, Vec::<String>::new(), &diagnosis, MessageLocale::Id);
        let text = format_diagnosis(&report, &diagnosis, MessageLocale::Id, false);

        assert!(text.contains("Observed: (none)\n"));
        assert!(text.contains("Gejala tidak mencukupi untuk diagnosis DBD."));
    }
}
