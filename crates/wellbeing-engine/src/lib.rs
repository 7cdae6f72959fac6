//! wellbeing-engine
//!
//! Turns a patient's daily symptom journal into a recovery percentage and a
//! trajectory status. Pure computation: no I/O, no shared state. Every
//! function here is total and deterministic, so callers may memoize results
//! keyed on (journal snapshot, evaluation date).
//!
//! Pipeline, leaf first:
//! [`score`] → [`series`] → [`reference`] + [`trend`] → [`recovery`] →
//! [`status`], with [`history`] replaying the same pipeline once per
//! journal date. [`engine::WellbeingEngine`] wires it together.

pub mod engine;
pub mod error;
pub mod history;
pub mod params;
pub mod recovery;
pub mod reference;
pub mod score;
pub mod series;
pub mod status;
pub mod trend;

pub use engine::{Assessment, WellbeingEngine, WellbeingResult};
pub use params::EngineParams;
pub use status::WellbeingStatus;
