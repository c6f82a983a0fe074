//! Built-in dengue (DBD) knowledge base.

use super::{KnowledgeBase, RuleRegistry, SymptomRegistry};

const SYMPTOMS: [(&str, &str); 10] = [
    ("G01", "Demam berlangsung kurang dari 7 hari"),
    ("G02", "Demam hari keempat tubuh terasa lemas"),
    ("G03", "Di lingkungan sekitar ada yang terjangkit DBD"),
    ("G04", "Bintik merah pada tubuh"),
    ("G05", "Pendarahan spontan dalam tubuh (gusi/air seni kemerahan)"),
    ("G06", "Mual muntah"),
    ("G07", "Nyeri kepala"),
    ("G08", "Nyeri sendi"),
    ("G09", "Nyeri ulu hati atau perut bagian atas"),
    ("G10", "Tinja berwarna hitam"),
];

const RULES: [(&[&str], &str); 7] = [
    (&["G01", "G02"], "Pasien mengalami Demam Berdarah ringan"),
    (&["G01", "G04"], "Pasien mengalami Demam Berdarah"),
    (&["G06", "G04"], "Pasien mengalami Demam Berdarah tingkat lanjut"),
    (&["G01", "G03", "G04"], "Pasien mengalami Demam Berdarah Dengue"),
    (&["G02", "G07", "G08"], "Pasien mengalami DBD ringan atau demam biasa"),
    (&["G06", "G09"], "Pasien mengalami DBD berat atau gangguan pencernaan lainnya"),
    (&["G10", "G05"], "Pasien mengalami komplikasi DBD berat (perdarahan dalam)"),
];

/// The 10 symptoms and 7 rules shipped with the tool.
pub fn seeded() -> KnowledgeBase {
    let mut symptoms = SymptomRegistry::new();
    for (code, description) in SYMPTOMS {
        symptoms.register(code, description);
    }

    let mut rules = RuleRegistry::new();
    for (condition, conclusion) in RULES {
        rules.register(condition.iter().copied(), conclusion);
    }

    KnowledgeBase { symptoms, rules }
}
