//! Persisted theme flag commands.
//!
//! The flag lives in the file-backed store at `CARTWHEEL_STATE_PATH`, so it
//! survives between invocations the way browser storage survives sessions.

use std::sync::Arc;

use tracing::info;

use cartwheel_core::ColorScheme;
use cartwheel_stores::storage::StorageError;
use cartwheel_stores::{FileStore, StoreConfig, ThemeStore};

/// Errors that can occur in theme commands.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] cartwheel_stores::config::ConfigError),

    /// The storage file could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The requested scheme name is not recognized.
    #[error("Invalid scheme: {0}. Valid schemes: light, dark")]
    InvalidScheme(String),
}

fn open_store() -> Result<ThemeStore, ThemeError> {
    let config = StoreConfig::from_env()?;
    let storage = Arc::new(FileStore::open(config.state_path)?);
    // No OS preference to consult from a terminal; light is the fallback.
    Ok(ThemeStore::new(storage, None))
}

/// Print the current scheme.
///
/// # Errors
///
/// Returns an error if configuration or storage fails to load.
pub fn get() -> Result<(), ThemeError> {
    let theme = open_store()?;
    info!("theme: {}", theme.scheme());
    Ok(())
}

/// Set the scheme by name.
///
/// # Errors
///
/// Returns an error if the name is not `light` or `dark`, or if storage
/// fails to load.
pub fn set(scheme: &str) -> Result<(), ThemeError> {
    let parsed: ColorScheme = scheme
        .parse()
        .map_err(|_| ThemeError::InvalidScheme(scheme.to_owned()))?;

    let theme = open_store()?;
    theme.set(parsed);
    info!("theme set to {parsed}");
    Ok(())
}

/// Flip the scheme.
///
/// # Errors
///
/// Returns an error if configuration or storage fails to load.
pub fn toggle() -> Result<(), ThemeError> {
    let theme = open_store()?;
    let next = theme.toggle();
    info!("theme toggled to {next}");
    Ok(())
}
