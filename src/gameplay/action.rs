use crate::Chips;

/// An agent decision at one decision point.
///
/// Bet and raise amounts are raise-to totals: the chips the agent will have
/// committed on the current street once the action is applied. A bet opens
/// the betting on a street; a raise answers an outstanding bet.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
}

impl Action {
    /// Raise-to total of bets and raises.
    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Action::Bet(amount) | Action::Raise(amount) => Some(amount),
            _ => None,
        }
    }
    /// Single-letter code used on the wire.
    /// Bets and raises share a code; the amount tells them apart.
    pub fn code(&self) -> &'static str {
        match self {
            Action::Fold => "f",
            Action::Check => "k",
            Action::Call => "c",
            Action::Bet(_) => "b",
            Action::Raise(_) => "b",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call => write!(f, "CALL"),
            Action::Bet(amount) => write!(f, "BET   {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Action::Fold.to_string(), "FOLD");
        assert_eq!(Action::Bet(600).to_string(), "BET   600");
        assert_eq!(Action::Raise(1800).to_string(), "RAISE 1800");
    }

    #[test]
    fn wire_codes() {
        assert_eq!(Action::Check.code(), "k");
        assert_eq!(Action::Bet(1).code(), Action::Raise(2).code());
        assert_eq!(Action::Raise(300).amount(), Some(300));
        assert_eq!(Action::Call.amount(), None);
    }
}
