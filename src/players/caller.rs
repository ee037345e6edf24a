use super::agent::Agent;
use crate::gameplay::*;

/// Checks when it can, otherwise calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct Caller;

impl Caller {
    pub fn choose(state: &HandState) -> Action {
        let legal = state.legal();
        if legal.can_check() {
            Action::Check
        } else if legal.can_call() {
            Action::Call
        } else {
            Action::Fold
        }
    }
}

#[async_trait::async_trait]
impl Agent for Caller {
    fn name(&self) -> &str {
        "checkcall"
    }
    async fn decide(&mut self, state: &HandState) -> Action {
        Self::choose(state)
    }
}
