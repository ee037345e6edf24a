use super::error::SessionError;
use super::reply::Reply;
use super::session::Credentials;
use crate::gameplay::*;

/// Raw RPC surface of the benchmarking service.
///
/// Implementations make exactly one attempt per call and classify failures
/// into [`SessionError`]. Retrying, session bookkeeping, and idempotency
/// checks live in [`super::Transport`], which wraps any `Remote`.
#[async_trait::async_trait]
pub trait Remote: Send {
    /// Establish an authenticated channel.
    async fn connect(&mut self, credentials: &Credentials) -> Result<(), SessionError>;
    /// Deal a new hand.
    async fn create(&mut self) -> Result<Reply, SessionError>;
    /// Submit the agent's action for the current decision point of `hand`.
    async fn act(&mut self, hand: &HandId, action: Action) -> Result<Reply, SessionError>;
    /// Read back the current server state of `hand` without changing it.
    async fn fetch(&mut self, hand: &HandId) -> Result<Reply, SessionError>;
    /// Release the channel.
    async fn close(&mut self);
}

/// Lend a remote to a transport and keep it for inspection afterwards.
#[async_trait::async_trait]
impl<R: Remote + ?Sized> Remote for &mut R {
    async fn connect(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        (**self).connect(credentials).await
    }
    async fn create(&mut self) -> Result<Reply, SessionError> {
        (**self).create().await
    }
    async fn act(&mut self, hand: &HandId, action: Action) -> Result<Reply, SessionError> {
        (**self).act(hand, action).await
    }
    async fn fetch(&mut self, hand: &HandId) -> Result<Reply, SessionError> {
        (**self).fetch(hand).await
    }
    async fn close(&mut self) {
        (**self).close().await
    }
}
