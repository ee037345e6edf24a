use crate::gameplay::*;
use crate::transport::SessionError;

/// Why a hand produced no outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    /// The agent chose an action outside the legal set. Never sent.
    Agent { action: Action, legal: Legal },
    /// The transport failed in a way that costs only this hand.
    Transport(SessionError),
    /// The hand exceeded the decision limit.
    Runaway(usize),
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Reason::Agent { action, legal } => {
                write!(f, "agent chose {} outside legal set [{}]", action, legal)
            }
            Reason::Transport(e) => write!(f, "{}", e),
            Reason::Runaway(n) => write!(f, "no conclusion after {} decisions", n),
        }
    }
}

/// A hand that ended without a server-confirmed conclusion.
/// Excluded from evaluation and counted separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Abandonment {
    pub hand: Option<HandId>,
    pub reason: Reason,
}

impl Abandonment {
    pub fn is_agent_fault(&self) -> bool {
        matches!(self.reason, Reason::Agent { .. })
    }
}

impl std::fmt::Display for Abandonment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.hand {
            Some(hand) => write!(f, "hand {} abandoned: {}", hand, self.reason),
            None => write!(f, "hand abandoned before deal: {}", self.reason),
        }
    }
}
