use super::action::Action;
use super::legal::Legal;
use crate::Chips;
use crate::N;
use crate::Position;
use crate::cards::*;

/// Opaque server-issued hand identifier.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandId(String);

impl From<String> for HandId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
impl From<&str> for HandId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
impl AsRef<str> for HandId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl std::fmt::Display for HandId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in the betting history.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Play {
    pub seat: Position,
    pub action: Action,
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{}: {}", self.seat, self.action)
    }
}

/// Everything the agent can see at one decision point of a hand.
///
/// Constructed from server responses (which are the source of truth) and
/// validated on the way in: chip counts are non-negative, and while the hand
/// is live the legal set is non-empty. The legal set is taken exactly as the
/// server offers it; chip fields the server omits read as zero and never
/// narrow it.
///
/// [`HandState::apply`] predicts the agent's own action locally so the
/// transport can sanity-check what the server sends back. A prediction never
/// replaces a server-confirmed state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandState {
    hand: HandId,
    seat: Position,
    hole: Option<Hole>,
    board: Board,
    pot: Chips,
    stacks: [Chips; N],
    bets: [Chips; N],
    history: Vec<Play>,
    legal: Legal,
    over: bool,
}

impl HandState {
    /// A fresh preflop state for `hand` with the agent in `seat`.
    pub fn new(hand: HandId, seat: Position) -> Self {
        Self {
            hand,
            seat: seat % N,
            hole: None,
            board: Board::empty(),
            pot: 0,
            stacks: [0; N],
            bets: [0; N],
            history: Vec::new(),
            legal: Legal::empty(),
            over: false,
        }
    }
    pub fn with_hole(mut self, hole: Hole) -> Self {
        self.hole = Some(hole);
        self
    }
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }
    pub fn with_pot(mut self, pot: Chips) -> Self {
        self.pot = pot;
        self
    }
    pub fn with_stacks(mut self, stacks: [Chips; N]) -> Self {
        self.stacks = stacks;
        self
    }
    pub fn with_bets(mut self, bets: [Chips; N]) -> Self {
        self.bets = bets;
        self
    }
    pub fn with_history(mut self, history: Vec<Play>) -> Self {
        self.history = history;
        self
    }
    pub fn with_legal(mut self, legal: Legal) -> Self {
        self.legal = legal;
        self
    }
    /// Checks invariants. A finished hand offers nothing.
    pub fn validated(mut self) -> Result<Self, String> {
        if self.pot < 0 {
            return Err(format!("negative pot {}", self.pot));
        }
        if let Some(s) = self.stacks.iter().find(|s| **s < 0) {
            return Err(format!("negative stack {}", s));
        }
        if let Some(b) = self.bets.iter().find(|b| **b < 0) {
            return Err(format!("negative bet {}", b));
        }
        if self.over {
            self.legal = Legal::empty();
            return Ok(self);
        }
        if self.legal.is_empty() {
            return Err(format!("hand {} is live but offers no legal action", self.hand));
        }
        Ok(self)
    }
}

impl HandState {
    pub fn hand(&self) -> &HandId {
        &self.hand
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn opponent(&self) -> Position {
        (self.seat + 1) % N
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn stacks(&self) -> [Chips; N] {
        self.stacks
    }
    /// The agent's remaining stack.
    pub fn stack(&self) -> Chips {
        self.stacks[self.seat]
    }
    /// The agent's commitment on the current street.
    pub fn bet(&self) -> Chips {
        self.bets[self.seat]
    }
    pub fn bets(&self) -> [Chips; N] {
        self.bets
    }
    pub fn history(&self) -> &[Play] {
        &self.history
    }
    pub fn legal(&self) -> &Legal {
        &self.legal
    }
    /// Chips needed to match the opponent, limited by the agent's stack.
    pub fn to_call(&self) -> Chips {
        (self.bets[self.opponent()] - self.bet())
            .max(0)
            .min(self.stack())
    }
    /// Server-terminal: showdown reached or someone folded.
    pub fn is_over(&self) -> bool {
        self.over
    }
    /// Whether the agent is expected to act.
    pub fn is_turn(&self) -> bool {
        !self.over && !self.legal.is_empty()
    }
    /// Number of decisions the agent has made this hand.
    pub fn decisions(&self) -> usize {
        self.history.iter().filter(|p| p.seat == self.seat).count()
    }
    /// Whether the agent may take `action` right now.
    pub fn is_legal(&self, action: &Action) -> bool {
        self.is_turn() && self.legal.permits(action)
    }
    /// Locally predicted state after the agent takes `action`.
    ///
    /// Chip movements are clamped to the agent's stack, so the prediction
    /// never goes negative. The predicted legal set is empty: the next
    /// decision point only comes from the server.
    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        let seat = self.seat;
        let chips = match action {
            Action::Fold | Action::Check => 0,
            Action::Call => self.to_call(),
            Action::Bet(amount) | Action::Raise(amount) => {
                (amount - self.bet()).clamp(0, self.stack())
            }
        };
        next.stacks[seat] -= chips;
        next.bets[seat] += chips;
        next.pot += chips;
        next.history.push(Play { seat, action });
        next.legal = Legal::empty();
        next.over = matches!(action, Action::Fold);
        next
    }
    /// Whether a server-confirmed state contradicts a local prediction.
    /// Servers that report history must extend the predicted history.
    pub fn diverges_from(&self, predicted: &Self) -> bool {
        self.hand != predicted.hand
            || (!self.history.is_empty() && !self.history.starts_with(&predicted.history))
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "hand {} P{} {} [{}] {} pot {} stacks {:?} | {}",
            self.hand,
            self.seat,
            self.hole.map(|h| h.to_string()).unwrap_or_else(|| "????".into()),
            self.board,
            self.street(),
            self.pot,
            self.stacks,
            self.legal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;

    /// Agent in the small blind facing the big blind, 200bb deep at 100 chips/bb.
    fn preflop() -> HandState {
        HandState::new(HandId::from("h1"), 0)
            .with_pot(150)
            .with_stacks([19950, 19900])
            .with_bets([50, 100])
            .with_legal(Legal::from(vec![
                Choice::Fold,
                Choice::Call,
                Choice::Raise(Bounds::new(200, 20000).unwrap()),
            ]))
            .validated()
            .unwrap()
    }

    #[test]
    fn to_call_and_legality() {
        let state = preflop();
        assert_eq!(state.to_call(), 50);
        assert!(state.is_turn());
        assert!(state.is_legal(&Action::Call));
        assert!(state.is_legal(&Action::Raise(20000)));
        assert!(!state.is_legal(&Action::Check));
        assert!(!state.is_legal(&Action::Bet(200)));
        assert!(!state.is_legal(&Action::Raise(20001)));
    }

    #[test]
    fn apply_call() {
        let next = preflop().apply(Action::Call);
        assert_eq!(next.pot(), 200);
        assert_eq!(next.stack(), 19900);
        assert_eq!(next.bet(), 100);
        assert_eq!(next.history(), &[Play { seat: 0, action: Action::Call }]);
        assert!(!next.is_turn());
        assert!(!next.is_over());
    }

    #[test]
    fn apply_shove_empties_stack() {
        let next = preflop().apply(Action::Raise(20000));
        assert_eq!(next.stack(), 0);
        assert_eq!(next.pot(), 150 + 19950);
        assert!(next.legal().is_empty());
    }

    #[test]
    fn apply_fold_is_terminal() {
        let next = preflop().apply(Action::Fold);
        assert!(next.is_over());
        assert!(!next.is_turn());
        assert_eq!(next.board().len(), 0);
        assert!(!next.is_legal(&Action::Check));
    }

    #[test]
    fn server_legal_set_is_kept() {
        let state = HandState::new(HandId::from("h2"), 0)
            .with_legal(Legal::from(vec![
                Choice::Call,
                Choice::Raise(Bounds::new(200, 20000).unwrap()),
            ]))
            .validated()
            .unwrap();
        assert!(state.legal().betting().is_some());
        assert!(state.is_legal(&Action::Raise(20000)));
        assert!(state.is_legal(&Action::Call));
    }

    #[test]
    fn shove_leaves_no_betting() {
        let next = preflop().apply(Action::Raise(20000));
        assert_eq!(next.stack(), 0);
        assert!(next.legal().betting().is_none());
        assert!(!next.is_legal(&Action::Raise(20000)));
    }

    /// Decision points covering the shapes the server sends.
    fn decision_points() -> Vec<HandState> {
        let raise = |min, max| Choice::Raise(Bounds::new(min, max).unwrap());
        let bet = |min, max| Choice::Bet(Bounds::new(min, max).unwrap());
        let state = |seat, pot, stacks, bets, choices| {
            HandState::new(HandId::from("h"), seat)
                .with_pot(pot)
                .with_stacks(stacks)
                .with_bets(bets)
                .with_legal(Legal::from(choices))
                .validated()
                .unwrap()
        };
        vec![
            preflop(),
            // facing a 3bet
            state(
                1,
                700,
                [19400, 19900],
                [600, 100],
                vec![Choice::Fold, Choice::Call, raise(1100, 20000)],
            ),
            // short stack facing a raise it cannot cover
            state(0, 700, [300, 19400], [100, 600], vec![Choice::Fold, Choice::Call]),
            // short stack that may still shove
            state(
                0,
                300,
                [900, 19800],
                [100, 200],
                vec![Choice::Fold, Choice::Call, raise(300, 1000)],
            ),
            // facing an all-in
            state(1, 20100, [0, 19900], [20000, 100], vec![Choice::Fold, Choice::Call]),
            // postflop, first to act
            state(1, 400, [19800, 19800], [0, 0], vec![Choice::Check, bet(100, 19800)]),
            // chip fields omitted by the server
            HandState::new(HandId::from("h"), 0)
                .with_legal(Legal::from(vec![Choice::Call, raise(200, 20000)]))
                .validated()
                .unwrap(),
        ]
    }

    /// Every action kind at and just beyond each offered bound.
    fn candidates(state: &HandState) -> Vec<Action> {
        let mut amounts = vec![0, 1, state.stack(), state.stack() + state.bet()];
        for choice in state.legal().choices() {
            if let Choice::Bet(b) | Choice::Raise(b) = choice {
                amounts.extend([b.min() - 1, b.min(), b.max(), b.max() + 1]);
            }
        }
        let mut actions = vec![Action::Fold, Action::Check, Action::Call];
        for amount in amounts {
            actions.push(Action::Bet(amount));
            actions.push(Action::Raise(amount));
        }
        actions
    }

    #[test]
    fn legality_matches_offered_set() {
        for state in decision_points() {
            for action in candidates(&state) {
                let offered = state.legal().choices().iter().any(|c| c.admits(&action));
                assert_eq!(state.is_legal(&action), offered, "{} in {}", action, state);
            }
        }
    }

    #[test]
    fn legal_actions_keep_chips_non_negative() {
        for state in decision_points() {
            let total = state.pot() + state.stacks().iter().sum::<Chips>();
            for action in candidates(&state).into_iter().filter(|a| state.is_legal(a)) {
                let next = state.apply(action);
                assert!(next.pot() >= 0, "{} in {}", action, state);
                assert!(next.stacks().iter().all(|s| *s >= 0), "{} in {}", action, state);
                assert!(next.bets().iter().all(|b| *b >= 0), "{} in {}", action, state);
                assert_eq!(next.pot() + next.stacks().iter().sum::<Chips>(), total);
                assert!(candidates(&next).iter().all(|a| !next.is_legal(a)));
            }
        }
    }

    #[test]
    fn rejects_invalid_states() {
        let hand = HandId::from("bad");
        assert!(HandState::new(hand.clone(), 0).with_pot(-1).validated().is_err());
        assert!(
            HandState::new(hand.clone(), 0)
                .with_stacks([-5, 10])
                .validated()
                .is_err()
        );
        assert!(
            HandState::new(hand.clone(), 0)
                .with_stacks([10, 10])
                .validated()
                .is_err()
        );
        assert!(HandState::new(hand, 0).apply(Action::Fold).validated().is_ok());
    }

    #[test]
    fn divergence() {
        let state = preflop();
        let predicted = state.apply(Action::Call);
        let confirmed = predicted
            .clone()
            .with_history(vec![
                Play { seat: 0, action: Action::Call },
                Play { seat: 1, action: Action::Check },
            ]);
        assert!(!confirmed.diverges_from(&predicted));
        let contradicted = predicted
            .clone()
            .with_history(vec![Play { seat: 0, action: Action::Fold }]);
        assert!(contradicted.diverges_from(&predicted));
        let silent = predicted.clone().with_history(vec![]);
        assert!(!silent.diverges_from(&predicted));
    }
}
