use super::error::SessionError;
use super::remote::Remote;
use super::reply::Reply;
use super::session::Credentials;
use super::wire::*;
use crate::API_KEY_HEADER;
use crate::API_URL;
use crate::GAME_NAME;
use crate::REQUEST_TIMEOUT;
use crate::gameplay::*;
use reqwest::StatusCode;
use std::time::Duration;

/// Where and what to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub game: String,
    pub timeout: Duration,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: API_URL.to_string(),
            game: GAME_NAME.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// [`Remote`] over the researcher HTTP API.
///
/// The API key travels as a header on every request; `connect` builds the
/// client that carries it. There is no separate login round trip, so a bad
/// key is first reported by the service on the first hand request.
pub struct HttpRemote {
    endpoint: Endpoint,
    client: Option<reqwest::Client>,
}

impl HttpRemote {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            client: None,
        }
    }
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.url.trim_end_matches('/'), path)
    }
    fn client(&self) -> Result<&reqwest::Client, SessionError> {
        self.client
            .as_ref()
            .ok_or_else(|| SessionError::Protocol("remote not connected".into()))
    }
    /// Maps an HTTP failure status onto the session error taxonomy.
    /// Credential failures are reported as `Auth`; the transport decides
    /// whether that means a bad key or a lapsed session.
    pub fn classify(status: StatusCode, body: &str) -> SessionError {
        let msg = format!("{} {}", status.as_u16(), body.trim());
        match status.as_u16() {
            401 | 403 => SessionError::Auth(msg),
            410 | 419 | 440 => SessionError::SessionExpired(msg),
            400 | 409 | 422 => SessionError::IllegalAction(msg),
            408 | 429 | 500 | 502 | 503 | 504 => SessionError::Unavailable(msg),
            _ => SessionError::Protocol(msg),
        }
    }
    fn failure(e: reqwest::Error) -> SessionError {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            SessionError::Unavailable(e.to_string())
        } else {
            SessionError::Protocol(e.to_string())
        }
    }
    async fn decode(response: reqwest::Response) -> Result<Reply, SessionError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify(status, &body));
        }
        let body = response
            .json::<HandResponse>()
            .await
            .map_err(|e| SessionError::Protocol(format!("undecodable response: {}", e)))?;
        Reply::try_from(body)
    }
}

#[async_trait::async_trait]
impl Remote for HttpRemote {
    async fn connect(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let key = reqwest::header::HeaderValue::from_str(credentials.secret())
            .map_err(|_| SessionError::Auth("api key is not a valid header value".into()))?;
        headers.insert(API_KEY_HEADER, key);
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.endpoint.timeout)
            .build()
            .map_err(|e| SessionError::Unavailable(e.to_string()))?;
        self.client = Some(client);
        log::debug!("client ready for {}", self.endpoint.url);
        Ok(())
    }
    async fn create(&mut self) -> Result<Reply, SessionError> {
        let body = CreateRequest {
            game_name: &self.endpoint.game,
        };
        let response = self
            .client()?
            .post(self.url("/hands"))
            .json(&body)
            .send()
            .await
            .map_err(Self::failure)?;
        Self::decode(response).await
    }
    async fn act(&mut self, hand: &HandId, action: Action) -> Result<Reply, SessionError> {
        log::debug!("[hand {}] {}", hand, action);
        let response = self
            .client()?
            .post(self.url(&format!("/hands/{}/act", hand)))
            .json(&ActRequest::from(action))
            .send()
            .await
            .map_err(Self::failure)?;
        Self::decode(response).await
    }
    async fn fetch(&mut self, hand: &HandId) -> Result<Reply, SessionError> {
        let response = self
            .client()?
            .get(self.url(&format!("/hands/{}", hand)))
            .send()
            .await
            .map_err(Self::failure)?;
        Self::decode(response).await
    }
    async fn close(&mut self) {
        self.client = None;
    }
}
