use super::state::HandId;
use crate::Utility;
use crate::cards::Hole;

/// Result of one completed hand, as scored by the server.
///
/// `net` is the raw chip result for the agent; `adjustment` is the server's
/// additive variance-reduction correction. Their sum is what gets evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct HandOutcome {
    hand: HandId,
    net: Utility,
    adjustment: Utility,
    showdown: bool,
    revealed: Option<Hole>,
    decisions: usize,
}

impl HandOutcome {
    pub fn new(hand: HandId, net: Utility, adjustment: Utility) -> Self {
        Self {
            hand,
            net,
            adjustment,
            showdown: false,
            revealed: None,
            decisions: 0,
        }
    }
    pub fn with_showdown(mut self, showdown: bool) -> Self {
        self.showdown = showdown;
        self
    }
    pub fn with_revealed(mut self, revealed: Option<Hole>) -> Self {
        self.revealed = revealed;
        self
    }
    pub fn with_decisions(mut self, decisions: usize) -> Self {
        self.decisions = decisions;
        self
    }
}

impl HandOutcome {
    pub fn hand(&self) -> &HandId {
        &self.hand
    }
    /// Raw chips won (positive) or lost (negative).
    pub fn net(&self) -> Utility {
        self.net
    }
    pub fn adjustment(&self) -> Utility {
        self.adjustment
    }
    /// The variance-reduced value fed to evaluation.
    pub fn adjusted(&self) -> Utility {
        self.net + self.adjustment
    }
    pub fn showdown(&self) -> bool {
        self.showdown
    }
    /// Opponent's hole cards, when the server revealed them.
    pub fn revealed(&self) -> Option<Hole> {
        self.revealed
    }
    pub fn decisions(&self) -> usize {
        self.decisions
    }
}

impl std::fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "hand {} net {:+.2} adj {:+.2} ({})",
            self.hand,
            self.net,
            self.adjustment,
            if self.showdown { "showdown" } else { "no showdown" }
        )
    }
}
