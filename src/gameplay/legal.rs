use super::action::Action;
use crate::Chips;

/// Inclusive raise-to range for a bet or raise.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Bounds {
    min: Chips,
    max: Chips,
}

impl Bounds {
    pub fn new(min: Chips, max: Chips) -> Result<Self, String> {
        if min < 0 || min > max {
            Err(format!("invalid raise range [{}, {}]", min, max))
        } else {
            Ok(Self { min, max })
        }
    }
    pub fn min(&self) -> Chips {
        self.min
    }
    pub fn max(&self) -> Chips {
        self.max
    }
    pub fn contains(&self, amount: Chips) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

/// One kind of action available at a decision point.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Choice {
    Fold,
    Check,
    Call,
    Bet(Bounds),
    Raise(Bounds),
}

impl Choice {
    pub fn is_betting(&self) -> bool {
        matches!(self, Choice::Bet(_) | Choice::Raise(_))
    }
    /// Whether this choice admits the concrete action.
    pub fn admits(&self, action: &Action) -> bool {
        match (self, action) {
            (Choice::Fold, Action::Fold) => true,
            (Choice::Check, Action::Check) => true,
            (Choice::Call, Action::Call) => true,
            (Choice::Bet(bounds), Action::Bet(amount)) => bounds.contains(*amount),
            (Choice::Raise(bounds), Action::Raise(amount)) => bounds.contains(*amount),
            _ => false,
        }
    }
}

/// The legal action set at a decision point.
/// Empty exactly when it is not the agent's turn.
#[derive(Debug, Default, Clone, Eq, Hash, PartialEq)]
pub struct Legal(Vec<Choice>);

impl Legal {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }
    pub fn permits(&self, action: &Action) -> bool {
        self.0.iter().any(|c| c.admits(action))
    }
    pub fn can_check(&self) -> bool {
        self.0.contains(&Choice::Check)
    }
    pub fn can_call(&self) -> bool {
        self.0.contains(&Choice::Call)
    }
    /// Bet or raise range, whichever is offered.
    pub fn betting(&self) -> Option<Choice> {
        self.0.iter().copied().find(Choice::is_betting)
    }
}

impl From<Vec<Choice>> for Legal {
    fn from(choices: Vec<Choice>) -> Self {
        let mut unique = Vec::with_capacity(choices.len());
        for choice in choices {
            if !unique.contains(&choice) {
                unique.push(choice);
            }
        }
        Self(unique)
    }
}

impl std::fmt::Display for Legal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self
            .0
            .iter()
            .map(|c| match c {
                Choice::Fold => "fold".to_string(),
                Choice::Check => "check".to_string(),
                Choice::Call => "call".to_string(),
                Choice::Bet(b) => format!("bet [{}-{}]", b.min(), b.max()),
                Choice::Raise(b) => format!("raise [{}-{}]", b.min(), b.max()),
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", labels)
    }
}
