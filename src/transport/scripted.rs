use super::error::SessionError;
use super::remote::Remote;
use super::reply::Reply;
use super::session::Credentials;
use crate::gameplay::*;
use std::collections::VecDeque;

/// A call received by a [`Scripted`] remote.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Connect,
    Create,
    Act(HandId, Action),
    Fetch(HandId),
    Close,
}

/// Deterministic remote that replays canned responses in order.
///
/// Each RPC pops from its own queue. An exhausted queue answers with a
/// protocol error so a mis-sized script fails loudly instead of retrying.
/// Every call is recorded for later inspection.
#[derive(Debug, Default)]
pub struct Scripted {
    refusal: Option<SessionError>,
    creates: VecDeque<Result<Reply, SessionError>>,
    acts: VecDeque<Result<Reply, SessionError>>,
    fetches: VecDeque<Result<Reply, SessionError>>,
    calls: Vec<Call>,
}

impl Scripted {
    /// Fail `connect` with `error`.
    pub fn refuse(mut self, error: SessionError) -> Self {
        self.refusal = Some(error);
        self
    }
    pub fn create(mut self, reply: Result<Reply, SessionError>) -> Self {
        self.creates.push_back(reply);
        self
    }
    pub fn act(mut self, reply: Result<Reply, SessionError>) -> Self {
        self.acts.push_back(reply);
        self
    }
    pub fn fetch(mut self, reply: Result<Reply, SessionError>) -> Self {
        self.fetches.push_back(reply);
        self
    }
    pub fn calls(&self) -> Vec<Call> {
        self.calls.clone()
    }
    /// Number of `create` calls received.
    pub fn hands_requested(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Create).count()
    }
    fn pop(
        queue: &mut VecDeque<Result<Reply, SessionError>>,
        what: &str,
    ) -> Result<Reply, SessionError> {
        queue
            .pop_front()
            .unwrap_or_else(|| Err(SessionError::Protocol(format!("script exhausted at {}", what))))
    }
}

#[async_trait::async_trait]
impl Remote for Scripted {
    async fn connect(&mut self, _: &Credentials) -> Result<(), SessionError> {
        self.calls.push(Call::Connect);
        match self.refusal.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
    async fn create(&mut self) -> Result<Reply, SessionError> {
        self.calls.push(Call::Create);
        Self::pop(&mut self.creates, "create")
    }
    async fn act(&mut self, hand: &HandId, action: Action) -> Result<Reply, SessionError> {
        self.calls.push(Call::Act(hand.clone(), action));
        Self::pop(&mut self.acts, "act")
    }
    async fn fetch(&mut self, hand: &HandId) -> Result<Reply, SessionError> {
        self.calls.push(Call::Fetch(hand.clone()));
        Self::pop(&mut self.fetches, "fetch")
    }
    async fn close(&mut self) {
        self.calls.push(Call::Close);
    }
}
