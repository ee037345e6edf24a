pub mod action;
pub use action::*;

pub mod legal;
pub use legal::*;

pub mod outcome;
pub use outcome::*;

pub mod state;
pub use state::*;
