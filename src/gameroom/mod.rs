//! Per-hand control loop.
//!
//! - [`HandDriver`] — Asks the agent, validates, and relays through the transport
//! - [`Phase`] — Hand lifecycle states
//! - [`Conclusion`] — Completed outcome or abandonment
//! - [`Abandonment`] — A hand excluded from evaluation, and why
pub mod abandonment;
pub use abandonment::*;

pub mod driver;
pub use driver::*;

pub mod phase;
pub use phase::*;
