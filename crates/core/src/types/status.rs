//! Status enums for the storefront state layer.

use serde::{Deserialize, Serialize};

/// Cart checkout lifecycle.
///
/// `Shopping -> Placing -> Placed -> Shopping`. The final transition back to
/// `Shopping` is caller-invoked once the confirmation UI is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// Items can be added, updated, and removed.
    #[default]
    Shopping,
    /// A checkout is in flight; re-invocation is a no-op.
    Placing,
    /// The order was confirmed and the cart cleared.
    Placed,
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Light or dark color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Whether this is the dark scheme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid color scheme: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_phase_default() {
        assert_eq!(CheckoutPhase::default(), CheckoutPhase::Shopping);
    }

    #[test]
    fn test_toast_kind_serde_names() {
        assert_eq!(serde_json::to_string(&ToastKind::Success).unwrap(), "\"success\"");
        assert_eq!(serde_json::to_string(&ToastKind::Warning).unwrap(), "\"warning\"");
        let parsed: ToastKind = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, ToastKind::Error);
    }

    #[test]
    fn test_color_scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
    }

    #[test]
    fn test_color_scheme_from_str() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!("light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert!("blue".parse::<ColorScheme>().is_err());
    }
}
