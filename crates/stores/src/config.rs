//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CARTWHEEL_CHECKOUT_LATENCY_MS` - Simulated checkout delay (default: 400)
//! - `CARTWHEEL_SAVE_LATENCY_MS` - Simulated profile-save delay (default: 300)
//! - `CARTWHEEL_STATE_PATH` - File-backed storage path (default: `.cartwheel/state.json`)

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Simulated latency for the async store operations.
///
/// Checkout and profile save are async purely to model a future network
/// call: each waits for a base delay plus a random jitter before applying
/// its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    base: Duration,
    jitter: Duration,
}

impl SimulatedLatency {
    /// No delay at all. The natural choice for tests.
    pub const ZERO: Self = Self {
        base: Duration::ZERO,
        jitter: Duration::ZERO,
    };

    /// A fixed delay with no jitter.
    #[must_use]
    pub const fn fixed(base: Duration) -> Self {
        Self {
            base,
            jitter: Duration::ZERO,
        }
    }

    /// A base delay with up to `jitter` of additional random wait.
    #[must_use]
    pub const fn jittered(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Sleep for the configured delay.
    pub async fn wait(self) {
        let mut delay = self.base;
        if !self.jitter.is_zero() {
            let extra_ms = rand::rng().random_range(0..=self.jitter.as_millis());
            delay += Duration::from_millis(u64::try_from(extra_ms).unwrap_or(u64::MAX));
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Storefront state-layer configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Simulated checkout delay.
    pub checkout_latency: SimulatedLatency,
    /// Simulated profile-save delay.
    pub save_latency: SimulatedLatency,
    /// Path for file-backed key-value storage.
    pub state_path: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a latency variable is present but not a
    /// valid millisecond count.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let checkout_ms = get_millis_or_default("CARTWHEEL_CHECKOUT_LATENCY_MS", 400)?;
        let save_ms = get_millis_or_default("CARTWHEEL_SAVE_LATENCY_MS", 300)?;
        let state_path =
            PathBuf::from(get_env_or_default("CARTWHEEL_STATE_PATH", ".cartwheel/state.json"));

        Ok(Self {
            checkout_latency: SimulatedLatency::jittered(
                Duration::from_millis(checkout_ms),
                Duration::from_millis(checkout_ms / 2),
            ),
            save_latency: SimulatedLatency::jittered(
                Duration::from_millis(save_ms),
                Duration::from_millis(save_ms / 2),
            ),
            state_path,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            checkout_latency: SimulatedLatency::fixed(Duration::from_millis(400)),
            save_latency: SimulatedLatency::fixed(Duration::from_millis(300)),
            state_path: PathBuf::from(".cartwheel/state.json"),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a millisecond count from the environment, with a default.
fn get_millis_or_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
