use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::symptoms::MAX_INTENSITY;

/// One symptom reported on one day.
///
/// `id` is expected to be one of the canonical keys in
/// [`crate::symptoms::SYMPTOMS`]; anything else is carried through but never
/// scored. `intensity` is kept as reported so upstream mistakes stay visible
/// to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomObservation {
    pub id: String,
    pub intensity: i32,
}

impl SymptomObservation {
    pub fn new(id: impl Into<String>, intensity: i32) -> Self {
        Self {
            id: id.into(),
            intensity,
        }
    }

    /// Intensity forced into `0..=MAX_INTENSITY`.
    pub fn clamped_intensity(&self) -> u8 {
        self.intensity.clamp(0, i32::from(MAX_INTENSITY)) as u8
    }

    pub fn is_in_range(&self) -> bool {
        (0..=i32::from(MAX_INTENSITY)).contains(&self.intensity)
    }
}
