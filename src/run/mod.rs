//! Whole-run orchestration.
//!
//! - [`Orchestrator`] — Plays N hands over one session
//! - [`RunReport`] — Statistics, abandonments, and how the run ended
//! - [`Cancel`] — Cooperative stop between hands
pub mod cancel;
pub use cancel::*;

pub mod orchestrator;
pub use orchestrator::*;

pub mod report;
pub use report::*;
