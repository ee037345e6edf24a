use super::agent::Agent;
use crate::gameplay::*;

/// Moves all-in whenever betting is legal, otherwise calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Shover;

impl Shover {
    pub fn choose(state: &HandState) -> Action {
        let legal = state.legal();
        match legal.betting() {
            Some(Choice::Bet(bounds)) => Action::Bet(bounds.max()),
            Some(Choice::Raise(bounds)) => Action::Raise(bounds.max()),
            _ if legal.can_call() => Action::Call,
            _ if legal.can_check() => Action::Check,
            _ => Action::Fold,
        }
    }
}

#[async_trait::async_trait]
impl Agent for Shover {
    fn name(&self) -> &str {
        "allin"
    }
    async fn decide(&mut self, state: &HandState) -> Action {
        Self::choose(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(choices: Vec<Choice>) -> HandState {
        HandState::new(HandId::from("h"), 0)
            .with_pot(150)
            .with_stacks([19950, 19900])
            .with_bets([50, 100])
            .with_legal(Legal::from(choices))
            .validated()
            .unwrap()
    }

    #[test]
    fn raises_to_max() {
        let s = state(vec![
            Choice::Fold,
            Choice::Call,
            Choice::Raise(Bounds::new(200, 20000).unwrap()),
        ]);
        assert_eq!(Shover::choose(&s), Action::Raise(20000));
        assert!(s.is_legal(&Shover::choose(&s)));
    }

    #[test]
    fn bets_to_max() {
        let s = state(vec![Choice::Check, Choice::Bet(Bounds::new(100, 20000).unwrap())]);
        assert_eq!(Shover::choose(&s), Action::Bet(20000));
    }

    #[test]
    fn calls_without_betting() {
        let s = state(vec![Choice::Fold, Choice::Call]);
        assert_eq!(Shover::choose(&s), Action::Call);
    }

    #[test]
    fn checks_when_nothing_else() {
        let s = state(vec![Choice::Check]);
        assert_eq!(Shover::choose(&s), Action::Check);
    }
}
