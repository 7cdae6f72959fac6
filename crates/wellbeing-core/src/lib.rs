//! wellbeing-core
//!
//! Shared vocabulary of the symptom journal: the canonical symptom
//! catalogue, daily records, patient journals and record validation.
//! No scoring logic lives here.

pub mod error;
pub mod models;
pub mod symptoms;
pub mod validation;
