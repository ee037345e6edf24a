//! Decision-making agents.
//!
//! - [`Agent`] — The contract every strategy implements
//! - [`Shover`] — All-in whenever betting is legal, otherwise call
//! - [`Caller`] — Check when legal, otherwise call
//! - [`Roster`] — Name-based selection of the agents above
pub mod agent;
pub use agent::*;

pub mod caller;
pub use caller::*;

pub mod roster;
pub use roster::*;

pub mod shover;
pub use shover::*;
