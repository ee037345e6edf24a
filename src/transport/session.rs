use super::error::SessionError;
use crate::gameplay::HandState;

/// Opaque API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    /// Rejects blank keys up front; everything else is the server's call.
    pub fn new(key: impl Into<String>) -> Result<Self, SessionError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            Err(SessionError::Auth("empty api key".into()))
        } else {
            Ok(Self(key))
        }
    }
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("Credentials").field(&"***").finish()
    }
}

/// Connection state of a session.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Liveness {
    Open,
    Expired,
    Closed,
}

/// One authenticated session: credentials, liveness, and the hand in flight.
/// Owned by [`super::Transport`]; nothing else mutates it.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    liveness: Liveness,
    served: usize,
    current: Option<HandState>,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            liveness: Liveness::Open,
            served: 0,
            current: None,
        }
    }
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
    pub fn liveness(&self) -> Liveness {
        self.liveness
    }
    /// Successful server responses received so far.
    pub fn served(&self) -> usize {
        self.served
    }
    /// Server-confirmed state of the hand in flight.
    pub fn current(&self) -> Option<&HandState> {
        self.current.as_ref()
    }
    /// Fails unless the session can still carry requests.
    pub fn ensure_open(&self) -> Result<(), SessionError> {
        match self.liveness {
            Liveness::Open => Ok(()),
            Liveness::Expired => Err(SessionError::SessionExpired("session lapsed".into())),
            Liveness::Closed => Err(SessionError::Protocol("session closed".into())),
        }
    }
    pub(crate) fn serve(&mut self, current: Option<HandState>) {
        self.served += 1;
        self.current = current;
    }
    pub(crate) fn clear(&mut self) -> Option<HandState> {
        self.current.take()
    }
    pub(crate) fn expire(&mut self) {
        self.liveness = Liveness::Expired;
        self.current = None;
    }
    pub(crate) fn close(&mut self) {
        self.liveness = Liveness::Closed;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_auth_error() {
        assert!(matches!(Credentials::new("   "), Err(SessionError::Auth(_))));
        assert_eq!(Credentials::new(" k3y ").unwrap().secret(), "k3y");
    }

    #[test]
    fn key_is_redacted() {
        let creds = Credentials::new("super-secret").unwrap();
        assert!(!format!("{:?}", creds).contains("super-secret"));
    }

    #[test]
    fn liveness_gates_requests() {
        let mut session = Session::new(Credentials::new("k").unwrap());
        assert!(session.ensure_open().is_ok());
        session.expire();
        assert!(matches!(
            session.ensure_open(),
            Err(SessionError::SessionExpired(_))
        ));
        session.close();
        assert!(matches!(session.ensure_open(), Err(SessionError::Protocol(_))));
    }
}
