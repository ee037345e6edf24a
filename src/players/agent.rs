use crate::gameplay::*;

/// Trait for decision-making strategies under evaluation.
///
/// `decide` is called once per decision point with the server-confirmed
/// state and must return a member of `state.legal()`. The hand driver checks
/// this before anything goes on the wire; an illegal choice abandons the
/// hand rather than being corrected.
///
/// The async signature leaves room for agents that consult a model server
/// or spawn blocking search, without holding up the runtime.
#[async_trait::async_trait]
pub trait Agent: Send {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;
    /// Choose an action at the current decision point.
    async fn decide(&mut self, state: &HandState) -> Action;
    /// Receive the scored result of a completed hand.
    /// Not required for decision-making.
    async fn observe(&mut self, _outcome: &HandOutcome) {}
}
