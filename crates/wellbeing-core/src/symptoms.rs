//! The canonical symptom catalogue.
//!
//! Order matters: the daily score walks this list front to back, and the
//! journal forms render symptoms in the same order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Highest intensity a patient can report for one symptom.
pub const MAX_INTENSITY: u8 = 6;

pub const SYMPTOM_COUNT: usize = 22;

/// Highest possible daily score: every symptom at maximum intensity.
pub const MAX_SCORE: u32 = SYMPTOM_COUNT as u32 * MAX_INTENSITY as u32;

/// Body system a symptom belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    General,
    Respiratory,
    Cardiovascular,
    Neurological,
    Musculoskeletal,
    Sensory,
    Digestive,
    Mood,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomDef {
    pub key: &'static str,
    pub name: &'static str,
    pub category: SymptomCategory,
}

const fn def(key: &'static str, name: &'static str, category: SymptomCategory) -> SymptomDef {
    SymptomDef {
        key,
        name,
        category,
    }
}

pub static SYMPTOMS: [SymptomDef; SYMPTOM_COUNT] = [
    def("fatigue", "Fatigue", SymptomCategory::General),
    def("post_exertional_malaise", "Post-exertional malaise", SymptomCategory::General),
    def("fever", "Fever", SymptomCategory::General),
    def("shortness_of_breath", "Shortness of breath", SymptomCategory::Respiratory),
    def("cough", "Cough", SymptomCategory::Respiratory),
    def("chest_pain", "Chest pain", SymptomCategory::Cardiovascular),
    def("palpitations", "Palpitations", SymptomCategory::Cardiovascular),
    def("headache", "Headache", SymptomCategory::Neurological),
    def("brain_fog", "Brain fog", SymptomCategory::Neurological),
    def("memory_problems", "Memory problems", SymptomCategory::Neurological),
    def("dizziness", "Dizziness", SymptomCategory::Neurological),
    def("tingling", "Tingling or numbness", SymptomCategory::Neurological),
    def("sleep_disturbance", "Sleep disturbance", SymptomCategory::Neurological),
    def("muscle_pain", "Muscle pain", SymptomCategory::Musculoskeletal),
    def("joint_pain", "Joint pain", SymptomCategory::Musculoskeletal),
    def("loss_of_smell", "Loss of smell", SymptomCategory::Sensory),
    def("loss_of_taste", "Loss of taste", SymptomCategory::Sensory),
    def("nausea", "Nausea", SymptomCategory::Digestive),
    def("abdominal_pain", "Abdominal pain", SymptomCategory::Digestive),
    def("diarrhea", "Diarrhea", SymptomCategory::Digestive),
    def("anxiety", "Anxiety", SymptomCategory::Mood),
    def("low_mood", "Low mood", SymptomCategory::Mood),
];

/// Look up a symptom definition by its canonical key.
pub fn symptom(key: &str) -> Option<&'static SymptomDef> {
    SYMPTOMS.iter().find(|s| s.key == key)
}

pub fn is_canonical(key: &str) -> bool {
    symptom(key).is_some()
}

/// All symptoms of one category, in catalogue order.
pub fn in_category(category: SymptomCategory) -> impl Iterator<Item = &'static SymptomDef> {
    SYMPTOMS.iter().filter(move |s| s.category == category)
}
