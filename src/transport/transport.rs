use super::backoff::Backoff;
use super::error::SessionError;
use super::remote::Remote;
use super::reply::Reply;
use super::session::*;
use crate::gameplay::*;

/// Session transport: owns the one channel to the service for a run.
///
/// Wraps a [`Remote`] with bounded retries. Requesting a hand is always safe
/// to retry. A failed action submission is only retried after a fresh fetch
/// shows the server still sits at the same decision point; if the fetch
/// shows the action landed, the fetched state is adopted instead.
pub struct Transport<R: Remote> {
    remote: R,
    backoff: Backoff,
    session: Session,
}

impl<R: Remote> Transport<R> {
    /// Authenticate and open a session.
    pub async fn connect(
        mut remote: R,
        credentials: Credentials,
        backoff: Backoff,
    ) -> Result<Self, SessionError> {
        let mut attempt = 0;
        loop {
            match remote.connect(&credentials).await {
                Ok(()) => break,
                Err(e) if e.is_transient() && attempt + 1 < backoff.attempts() => {
                    log::debug!("connect attempt {} failed: {}", attempt + 1, e);
                    backoff.pause(attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
        log::info!("session open");
        Ok(Self {
            remote,
            backoff,
            session: Session::new(credentials),
        })
    }
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn remote(&self) -> &R {
        &self.remote
    }
    /// Deal a new hand, retrying transient failures.
    pub async fn request_hand(&mut self) -> Result<Reply, SessionError> {
        self.session.ensure_open()?;
        if let Some(stale) = self.session.clear() {
            log::warn!("[hand {}] discarded unfinished hand", stale.hand());
        }
        let mut attempt = 0;
        loop {
            match self.remote.create().await {
                Ok(reply) => return Ok(self.accept(reply)),
                Err(e) if e.is_transient() && attempt + 1 < self.backoff.attempts() => {
                    log::debug!("create attempt {} failed: {}", attempt + 1, e);
                    self.backoff.pause(attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(self.reject(e)),
            }
        }
    }
    /// Submit the agent's action for the hand in flight.
    pub async fn submit_action(&mut self, action: Action) -> Result<Reply, SessionError> {
        self.session.ensure_open()?;
        let current = self
            .session
            .current()
            .cloned()
            .ok_or_else(|| SessionError::Protocol("no hand in flight".into()))?;
        let predicted = current.apply(action);
        let hand = current.hand().clone();
        let mut attempt = 0;
        loop {
            match self.remote.act(&hand, action).await {
                Ok(reply) => return Ok(self.reconcile(&predicted, reply)),
                Err(e) if e.is_transient() && attempt + 1 < self.backoff.attempts() => {
                    log::debug!("[hand {}] act attempt {} failed: {}", hand, attempt + 1, e);
                    match self.remote.fetch(&hand).await {
                        Ok(Reply::Pending(ref fetched)) if *fetched == current => {
                            log::debug!("[hand {}] action not applied, retrying", hand);
                            self.backoff.pause(attempt).await;
                            attempt += 1;
                        }
                        Ok(fetched) => {
                            log::debug!("[hand {}] action already applied", hand);
                            return Ok(self.reconcile(&predicted, fetched));
                        }
                        Err(f) if f.is_fatal() => return Err(self.reject(f)),
                        Err(f) => {
                            log::debug!("[hand {}] cannot confirm action: {}", hand, f);
                            return Err(self.reject(e));
                        }
                    }
                }
                Err(e) => return Err(self.reject(e)),
            }
        }
    }
    /// Forget the hand in flight without telling the server.
    pub fn abandon(&mut self) -> Option<HandState> {
        self.session.clear()
    }
    /// Release the channel. Idempotent.
    pub async fn close(&mut self) {
        if self.session.liveness() != Liveness::Closed {
            self.remote.close().await;
            self.session.close();
            log::info!("session closed after {} responses", self.session.served());
        }
    }
}

impl<R: Remote> Transport<R> {
    /// Record a server reply; the server's state always wins.
    fn accept(&mut self, reply: Reply) -> Reply {
        match reply {
            Reply::Pending(ref state) => self.session.serve(Some(state.clone())),
            Reply::Concluded(_) => self.session.serve(None),
        }
        reply
    }
    fn reconcile(&mut self, predicted: &HandState, reply: Reply) -> Reply {
        if let Reply::Pending(ref confirmed) = reply {
            if confirmed.diverges_from(predicted) {
                log::warn!(
                    "[hand {}] server state disagrees with local prediction; using server state",
                    confirmed.hand()
                );
            }
        }
        self.accept(reply)
    }
    /// Classify a failure against session history. A rejected key on a
    /// session that already served responses means the session lapsed.
    fn reject(&mut self, e: SessionError) -> SessionError {
        let e = match e {
            SessionError::Auth(msg) if self.session.served() > 0 => {
                SessionError::SessionExpired(msg)
            }
            e => e,
        };
        if e.is_fatal() {
            self.session.expire();
        }
        e
    }
}
