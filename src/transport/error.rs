/// Failures surfaced by the session transport.
///
/// `Auth` and `SessionExpired` end the run. `Unavailable` is retried inside
/// the transport and only escapes once attempts are exhausted, at which
/// point it costs the current hand. `IllegalAction` and `Protocol` also cost
/// the current hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("session expired: {0}")]
    SessionExpired(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
    #[error("illegal action: {0}")]
    IllegalAction(String),
    #[error("protocol violation: {0}")]
    Protocol(String),
}

impl SessionError {
    /// Errors that end the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::SessionExpired(_))
    }
    /// Errors worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(SessionError::Auth("bad key".into()).is_fatal());
        assert!(SessionError::SessionExpired("gone".into()).is_fatal());
        assert!(!SessionError::Unavailable("503".into()).is_fatal());
        assert!(SessionError::Unavailable("503".into()).is_transient());
        assert!(!SessionError::IllegalAction("k".into()).is_transient());
        assert!(!SessionError::Protocol("junk".into()).is_fatal());
    }
}
