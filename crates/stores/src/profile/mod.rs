//! User profile store with draft/committed editing.
//!
//! Two copies of the profile coexist: the committed copy (last saved) and a
//! draft that absorbs live edits. Cancel discards the draft; save commits
//! it. Field validation is advisory and lives in [`validation`] - the store
//! itself accepts any write.

pub mod validation;

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::SimulatedLatency;

pub use validation::{FieldError, validate_field, validate_profile};

/// The editable fields of a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Address,
    City,
    State,
    Zip,
    Country,
    Phone,
    AvatarUrl,
}

impl ProfileField {
    /// All fields, in form order.
    pub const ALL: [Self; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Address,
        Self::City,
        Self::State,
        Self::Zip,
        Self::Country,
        Self::Phone,
        Self::AvatarUrl,
    ];
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Country => "country",
            Self::Phone => "phone",
            Self::AvatarUrl => "avatar_url",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            "country" => Ok(Self::Country),
            "phone" => Ok(Self::Phone),
            "avatar_url" => Ok(Self::AvatarUrl),
            _ => Err(format!("invalid profile field: {s}")),
        }
    }
}

/// A user profile record. All fields are plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// Read a field by name.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Address => &self.address,
            ProfileField::City => &self.city,
            ProfileField::State => &self.state,
            ProfileField::Zip => &self.zip,
            ProfileField::Country => &self.country,
            ProfileField::Phone => &self.phone,
            ProfileField::AvatarUrl => &self.avatar_url,
        }
    }

    /// Write a field by name.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Address => self.address = value,
            ProfileField::City => self.city = value,
            ProfileField::State => self.state = value,
            ProfileField::Zip => self.zip = value,
            ProfileField::Country => self.country = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::AvatarUrl => self.avatar_url = value,
        }
    }

    /// First and last name joined with a single space.
    ///
    /// An empty part is dropped so the result never carries stray spaces.
    #[must_use]
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        parts.join(" ")
    }

    /// Non-empty address parts joined with ", ", in the order
    /// address, city, state, zip, country.
    #[must_use]
    pub fn formatted_address(&self) -> String {
        let parts: Vec<&str> = [
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip.trim(),
            self.country.trim(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
        parts.join(", ")
    }
}

/// User profile store.
///
/// Cheaply cloneable handle over shared state.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<Mutex<ProfileInner>>,
    latency: SimulatedLatency,
}

struct ProfileInner {
    committed: UserProfile,
    draft: UserProfile,
    editing: bool,
    saving: bool,
}

impl ProfileStore {
    /// Create a store with both copies set to the given profile.
    #[must_use]
    pub fn new(initial: UserProfile, latency: SimulatedLatency) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ProfileInner {
                draft: initial.clone(),
                committed: initial,
                editing: false,
                saving: false,
            })),
            latency,
        }
    }

    /// Write a value into the draft profile. Always succeeds; validation is
    /// the form layer's concern.
    pub fn update_field(&self, field: ProfileField, value: impl Into<String>) {
        self.inner.lock().draft.set(field, value);
    }

    /// Begin editing: the draft becomes a fresh copy of the committed
    /// profile.
    pub fn start_editing(&self) {
        let mut inner = self.inner.lock();
        inner.draft = inner.committed.clone();
        inner.editing = true;
    }

    /// Commit the draft.
    ///
    /// A save already in flight blocks new saves: the call is a no-op
    /// returning `false`. Otherwise the draft as of this call is committed
    /// after the simulated latency and the store leaves editing mode.
    #[instrument(skip(self))]
    pub async fn save_profile(&self) -> bool {
        let snapshot = {
            let mut inner = self.inner.lock();
            if inner.saving {
                debug!("save already in flight, ignoring");
                return false;
            }
            inner.saving = true;
            inner.draft.clone()
        };

        self.latency.wait().await;

        let mut inner = self.inner.lock();
        inner.committed = snapshot;
        inner.editing = false;
        inner.saving = false;
        info!("profile saved");
        true
    }

    /// Discard draft changes, reverting to the committed profile.
    pub fn cancel_editing(&self) {
        let mut inner = self.inner.lock();
        inner.draft = inner.committed.clone();
        inner.editing = false;
    }

    /// Replace both copies with the application default profile.
    ///
    /// Dev/test tooling only; normal UI flow never calls this.
    pub fn reset_profile(&self) {
        let mut inner = self.inner.lock();
        inner.committed = UserProfile::default();
        inner.draft = UserProfile::default();
        inner.editing = false;
    }

    /// Snapshot of the committed (last saved) profile.
    #[must_use]
    pub fn committed(&self) -> UserProfile {
        self.inner.lock().committed.clone()
    }

    /// Snapshot of the draft (live-edited) profile.
    #[must_use]
    pub fn draft(&self) -> UserProfile {
        self.inner.lock().draft.clone()
    }

    /// Whether the store is in editing mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.inner.lock().editing
    }

    /// Whether a save is in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.inner.lock().saving
    }
}
