//! Dark/light theme store with durable persistence.
//!
//! The flag is read from storage once at construction and written back on
//! every change. When storage has no value, the OS-level scheme preference
//! (supplied by the embedder) decides; light is the final fallback.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use cartwheel_core::ColorScheme;

use crate::storage::KeyValueStore;

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Color palette derived from the active scheme.
///
/// Consumed by the view layer; the state layer only selects which palette
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

/// Light-scheme palette.
pub const LIGHT_PALETTE: Palette = Palette {
    background: "#ffffff",
    surface: "#f4f4f5",
    text: "#18181b",
    accent: "#4f46e5",
};

/// Dark-scheme palette.
pub const DARK_PALETTE: Palette = Palette {
    background: "#18181b",
    surface: "#27272a",
    text: "#fafafa",
    accent: "#818cf8",
};

/// The palette for a scheme.
#[must_use]
pub const fn palette_for(scheme: ColorScheme) -> Palette {
    match scheme {
        ColorScheme::Light => LIGHT_PALETTE,
        ColorScheme::Dark => DARK_PALETTE,
    }
}

/// Theme store.
///
/// Cheaply cloneable handle over shared state.
#[derive(Clone)]
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStore>,
    scheme: Arc<Mutex<ColorScheme>>,
}

impl ThemeStore {
    /// Create a store, resolving the initial scheme.
    ///
    /// Resolution order: the stored `"true"`/`"false"` flag wins; otherwise
    /// the OS-level preference; otherwise light. Construction never writes
    /// to storage - only changes do.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, system_preference: Option<ColorScheme>) -> Self {
        let scheme = match storage.get(DARK_MODE_KEY).as_deref() {
            Some("true") => ColorScheme::Dark,
            Some("false") => ColorScheme::Light,
            Some(other) => {
                warn!(value = other, "unrecognized stored theme flag, falling back");
                system_preference.unwrap_or_default()
            }
            None => system_preference.unwrap_or_default(),
        };
        debug!(%scheme, "theme initialized");

        Self {
            storage,
            scheme: Arc::new(Mutex::new(scheme)),
        }
    }

    /// Flip the scheme, persisting the new value. Returns the new scheme.
    pub fn toggle(&self) -> ColorScheme {
        let next = self.scheme.lock().toggled();
        self.set(next);
        next
    }

    /// Set the scheme, persisting the value.
    pub fn set(&self, scheme: ColorScheme) {
        *self.scheme.lock() = scheme;
        self.storage
            .set(DARK_MODE_KEY, if scheme.is_dark() { "true" } else { "false" });
    }

    /// The current scheme.
    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.lock()
    }

    /// Whether the dark scheme is active.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    /// The palette for the current scheme.
    #[must_use]
    pub fn palette(&self) -> Palette {
        palette_for(self.scheme())
    }
}
