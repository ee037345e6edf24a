use crate::gameplay::*;

/// What the server says after creating a hand or accepting an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The hand continues and the agent must act again.
    Pending(HandState),
    /// The hand just concluded.
    Concluded(HandOutcome),
}

impl Reply {
    pub fn hand(&self) -> &HandId {
        match self {
            Self::Pending(state) => state.hand(),
            Self::Concluded(outcome) => outcome.hand(),
        }
    }
}
