use crate::API_URL;
use crate::CONFIDENCE;
use crate::GAME_NAME;
use crate::HANDS;
use crate::Probability;
use crate::RETRY_ATTEMPTS;
use crate::players::Roster;
use crate::transport::*;
use clap::Parser;
use std::time::Duration;

/// Benchmark a poker agent against the remote opponent.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// API key for the benchmarking service
    #[arg(long, env = "RESEARCHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Agent to benchmark
    #[arg(long, short = 'a', default_value_t = Roster::AllIn)]
    pub agent: Roster,

    /// Number of hands to play
    #[arg(long, short = 'n', default_value_t = HANDS)]
    pub hands: usize,

    /// Game variant requested for every hand
    #[arg(long, default_value = GAME_NAME)]
    pub game: String,

    /// Base URL of the benchmarking service
    #[arg(long, env = "RESEARCHER_API_URL", default_value = API_URL)]
    pub url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 180)]
    pub timeout: u64,

    /// Attempts per request before giving up on a hand
    #[arg(long, default_value_t = RETRY_ATTEMPTS)]
    pub retries: usize,

    /// Base backoff delay in seconds
    #[arg(long, default_value_t = 2.0, value_parser = seconds)]
    pub retry_base: f64,

    /// Maximum backoff delay in seconds
    #[arg(long, default_value_t = 15.0, value_parser = seconds)]
    pub retry_max: f64,

    /// Two-sided confidence level of the reported interval
    #[arg(long, default_value_t = CONFIDENCE, value_parser = level)]
    pub confidence: Probability,
}

impl Config {
    pub fn backoff(&self) -> Backoff {
        Backoff::new(
            self.retries,
            Duration::from_secs_f64(self.retry_base),
            Duration::from_secs_f64(self.retry_max),
        )
    }
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            url: self.url.clone(),
            game: self.game.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
    pub fn credentials(&self) -> Result<Credentials, SessionError> {
        Credentials::new(self.api_key.as_str())
    }
}

fn seconds(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() && x >= 0.0 => Ok(x),
        _ => Err(format!("{} is not a non-negative number of seconds", s)),
    }
}

fn level(s: &str) -> Result<Probability, String> {
    match s.parse::<Probability>() {
        Ok(p) if p > 0.0 && p < 1.0 => Ok(p),
        _ => Err(format!("{} is not a confidence level in (0, 1)", s)),
    }
}
