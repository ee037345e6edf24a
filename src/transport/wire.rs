//! JSON shapes exchanged with the benchmarking service.
use super::error::SessionError;
use super::reply::Reply;
use crate::Chips;
use crate::N;
use crate::Position;
use crate::Utility;
use crate::cards::*;
use crate::gameplay::*;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /hands`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest<'a> {
    pub game_name: &'a str,
}

/// Body of `POST /hands/{id}/act`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActRequest {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Chips>,
}

impl From<Action> for ActRequest {
    fn from(action: Action) -> Self {
        Self {
            action: action.code(),
            amount: action.amount(),
        }
    }
}

/// Hand identifiers arrive as numbers or strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

impl From<WireId> for HandId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => HandId::from(n.to_string()),
            WireId::Text(s) => HandId::from(s),
        }
    }
}

/// Response to create, act, and fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct HandResponse {
    pub hand_id: WireId,
    pub game_state: GameState,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub is_hand_over: bool,
    pub legal_actions: Vec<String>,
    pub raise_range: Option<RaiseRange>,
    pub seat: Position,
    pub hole_cards: Vec<String>,
    pub board: Vec<String>,
    pub pot: f64,
    pub stacks: Vec<f64>,
    pub bets: Vec<f64>,
    pub history: Vec<WirePlay>,
    pub result: Option<WireResult>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RaiseRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WirePlay {
    pub seat: Position,
    pub action: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireResult {
    pub winnings: Utility,
    pub adjustment: Utility,
    pub showdown: bool,
    pub opponent_cards: Vec<String>,
}

fn chips(x: f64) -> Chips {
    x.round() as Chips
}

fn protocol(msg: impl std::fmt::Display) -> SessionError {
    SessionError::Protocol(msg.to_string())
}

fn cards(raw: &[String]) -> Result<Vec<Card>, SessionError> {
    raw.iter()
        .map(|c| Card::try_from(c.as_str()).map_err(protocol))
        .collect()
}

fn hole(raw: &[String]) -> Result<Option<Hole>, SessionError> {
    match raw.is_empty() {
        true => Ok(None),
        false => Hole::try_from(cards(raw)?.as_slice()).map(Some).map_err(protocol),
    }
}

fn seats(raw: &[f64], what: &str) -> Result<[Chips; N], SessionError> {
    match raw.len() {
        0 => Ok([0; N]),
        n if n == N => {
            let mut out = [0; N];
            for (slot, x) in out.iter_mut().zip(raw) {
                *slot = chips(*x);
            }
            Ok(out)
        }
        n => Err(protocol(format!("expected {} {}, got {}", N, what, n))),
    }
}

impl WirePlay {
    /// Unknown codes (blinds, dealer events) yield `None`.
    fn decode(&self) -> Option<Play> {
        let amount = self.amount.map(chips);
        let action = match self.action.to_lowercase().as_str() {
            "f" | "fold" => Action::Fold,
            "k" | "x" | "check" => Action::Check,
            "c" | "call" => Action::Call,
            "b" | "bet" => Action::Bet(amount?),
            "r" | "raise" => Action::Raise(amount?),
            _ => return None,
        };
        Some(Play {
            seat: self.seat % N,
            action,
        })
    }
}

impl GameState {
    /// A call on offer means there is a bet to answer, so `b` is a raise.
    /// Chip fields are optional on the wire and play no part in this.
    fn facing(&self) -> bool {
        self.legal_actions
            .iter()
            .any(|code| matches!(code.to_lowercase().as_str(), "c" | "call"))
    }
    fn legal(&self) -> Result<Legal, SessionError> {
        let facing = self.facing();
        let mut choices = Vec::with_capacity(self.legal_actions.len());
        for code in self.legal_actions.iter() {
            let choice = match code.to_lowercase().as_str() {
                "f" | "fold" => Choice::Fold,
                "k" | "x" | "check" => Choice::Check,
                "c" | "call" => Choice::Call,
                "b" | "r" | "bet" | "raise" => {
                    let range = self
                        .raise_range
                        .ok_or_else(|| protocol("betting offered without raise_range"))?;
                    let bounds = Bounds::new(chips(range.min), chips(range.max)).map_err(protocol)?;
                    match facing {
                        true => Choice::Raise(bounds),
                        false => Choice::Bet(bounds),
                    }
                }
                other => return Err(protocol(format!("unknown legal action {:?}", other))),
            };
            choices.push(choice);
        }
        Ok(Legal::from(choices))
    }
}

impl TryFrom<HandResponse> for Reply {
    type Error = SessionError;
    fn try_from(response: HandResponse) -> Result<Self, Self::Error> {
        let hand = HandId::from(response.hand_id);
        let game = response.game_state;
        let seat = game.seat % N;
        let history = game
            .history
            .iter()
            .filter_map(WirePlay::decode)
            .collect::<Vec<_>>();
        if game.is_hand_over {
            let result = game
                .result
                .as_ref()
                .ok_or_else(|| protocol(format!("hand {} over without result", hand)))?;
            let decisions = history.iter().filter(|p| p.seat == seat).count();
            let outcome = HandOutcome::new(hand, result.winnings, result.adjustment)
                .with_showdown(result.showdown)
                .with_revealed(hole(&result.opponent_cards)?)
                .with_decisions(decisions);
            return Ok(Reply::Concluded(outcome));
        }
        let mut state = HandState::new(hand, seat)
            .with_board(Board::try_from(cards(&game.board)?).map_err(protocol)?)
            .with_pot(chips(game.pot))
            .with_stacks(seats(&game.stacks, "stacks")?)
            .with_bets(seats(&game.bets, "bets")?)
            .with_history(history)
            .with_legal(game.legal()?);
        if let Some(hole) = hole(&game.hole_cards)? {
            state = state.with_hole(hole);
        }
        state.validated().map(Reply::Pending).map_err(protocol)
    }
}
