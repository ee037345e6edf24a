//! Session transport to the remote benchmarking service.
//!
//! - [`Remote`] — One-shot RPCs: connect, create, act, fetch, close
//! - [`HttpRemote`] — `Remote` over the researcher HTTP API
//! - [`Scripted`] — `Remote` replaying canned replies, for tests
//! - [`Transport`] — Session ownership, retries, and idempotency checks
mod backoff;
mod error;
mod http;
mod remote;
mod reply;
mod scripted;
mod session;
mod transport;

pub mod wire;

pub use backoff::*;
pub use error::*;
pub use http::*;
pub use remote::*;
pub use reply::*;
pub use scripted::*;
pub use session::*;
pub use transport::*;
