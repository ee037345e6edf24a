//! Client for benchmarking heads-up No-Limit Hold'em agents against a remote
//! opponent, scored with a server-side variance-reduced estimator.
//!
//! ## Modules
//!
//! - [`cards`] — Card, board, and hole card primitives
//! - [`gameplay`] — Per-decision hand state, actions, and legality
//! - [`players`] — The [`players::Agent`] contract and reference agents
//! - [`transport`] — Authenticated session with retrying remote calls
//! - [`gameroom`] — Per-hand driver state machine
//! - [`evaluation`] — Running statistics over completed hands
//! - [`run`] — Plays N hands and produces the final report
//! - [`config`] — Command-line configuration
pub mod cards;
pub mod config;
pub mod evaluation;
pub mod gameplay;
pub mod gameroom;
pub mod players;
pub mod run;
pub mod transport;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, pot sizes, and bet amounts in chips.
pub type Chips = i64;
/// Seat index around the table (heads-up: 0 or 1).
pub type Position = usize;
/// Winnings, adjustments, and statistics over them.
pub type Utility = f64;
/// Confidence levels and other probabilities.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Game variant requested when creating hands.
pub const GAME_NAME: &str = "HUNL 200BB";
/// Default number of hands per run.
pub const HANDS: usize = 1000;
/// Decisions after which a hand is deemed runaway and abandoned.
pub const MAX_DECISIONS: usize = 256;

// ============================================================================
// REMOTE SERVICE
// ============================================================================
/// Researcher API base URL.
pub const API_URL: &str = "https://researcher.gtowizard.com";
/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";
/// Per-request timeout.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(180);

// ============================================================================
// RETRY POLICY
// Exponential backoff with jitter: sleep ~ U(1s, min(base * 2^i, max)).
// ============================================================================
/// Attempts per remote call before surfacing an unavailable error.
pub const RETRY_ATTEMPTS: usize = 3;
/// Backoff base delay.
pub const RETRY_BASE_DELAY: std::time::Duration = std::time::Duration::from_secs(2);
/// Backoff ceiling.
pub const RETRY_MAX_DELAY: std::time::Duration = std::time::Duration::from_secs(15);
/// Backoff floor, before jitter.
pub const RETRY_MIN_DELAY: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// EVALUATION
// ============================================================================
/// Two-sided confidence level of the reported interval.
pub const CONFIDENCE: Probability = 0.95;
/// Hands between progress log messages.
pub const PROGRESS_LOG_INTERVAL: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
