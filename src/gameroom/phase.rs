use super::abandonment::Abandonment;
use crate::gameplay::*;

/// Lifecycle of one hand.
///
/// `AwaitingHand -> InProgress -> {Completed, Abandoned}`; the last two are
/// terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    AwaitingHand,
    InProgress(HandState),
    Completed(HandOutcome),
    Abandoned(Abandonment),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Completed(_) | Phase::Abandoned(_))
    }
}

/// Terminal result of driving one hand.
#[derive(Debug, Clone, PartialEq)]
pub enum Conclusion {
    Completed(HandOutcome),
    Abandoned(Abandonment),
}
