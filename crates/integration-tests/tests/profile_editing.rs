//! Integration tests for profile editing, saving, and validation.

use std::time::Duration;

use cartwheel_integration_tests::{instant_profile, sample_profile};
use cartwheel_stores::config::SimulatedLatency;
use cartwheel_stores::profile::{validate_profile, validation::validate_field};
use cartwheel_stores::{ProfileField, ProfileStore};

// =============================================================================
// Edit / Save / Cancel
// =============================================================================

#[test]
fn test_cancel_discards_draft_edits() {
    let profile = instant_profile();

    profile.start_editing();
    profile.update_field(ProfileField::FirstName, "X");
    profile.cancel_editing();

    // Committed untouched, draft reverted to the pre-edit committed value
    assert_eq!(profile.committed(), sample_profile());
    assert_eq!(profile.draft(), sample_profile());
    assert!(!profile.is_editing());
}

#[tokio::test]
async fn test_save_commits_edited_fields_only() {
    let profile = instant_profile();

    profile.start_editing();
    profile.update_field(ProfileField::City, "London");
    profile.update_field(ProfileField::Country, "UK");
    assert!(profile.save_profile().await);

    let committed = profile.committed();
    assert_eq!(committed.city, "London");
    assert_eq!(committed.country, "UK");
    // Everything else keeps its prior committed value
    assert_eq!(committed.first_name, "Ada");
    assert_eq!(committed.email, "ada@example.com");
    assert_eq!(committed.zip, "62704");
}

#[tokio::test(start_paused = true)]
async fn test_save_in_flight_blocks_second_save() {
    let profile = ProfileStore::new(
        sample_profile(),
        SimulatedLatency::fixed(Duration::from_millis(150)),
    );

    profile.start_editing();
    profile.update_field(ProfileField::State, "NY");

    let clone = profile.clone();
    let (first, second) = tokio::join!(profile.save_profile(), clone.save_profile());

    assert!(first);
    assert!(!second);
    assert_eq!(profile.committed().state, "NY");
    assert!(!profile.is_saving());
    assert!(!profile.is_editing());
}

#[tokio::test]
async fn test_form_flow_validate_then_save() {
    // The form layer gate: all fields valid before save is invoked
    let profile = instant_profile();
    profile.start_editing();
    profile.update_field(ProfileField::Phone, "2125550199");

    assert!(validate_profile(&profile.draft()).is_empty());
    assert!(profile.save_profile().await);
    assert_eq!(profile.committed().phone, "2125550199");
}

#[test]
fn test_invalid_draft_still_writes() {
    // Validation is advisory: the store accepts any value
    let profile = instant_profile();
    profile.start_editing();
    profile.update_field(ProfileField::Email, "not-an-email");

    assert_eq!(profile.draft().email, "not-an-email");
    assert!(validate_field(ProfileField::Email, &profile.draft().email).is_err());
}

// =============================================================================
// Derived Values
// =============================================================================

#[test]
fn test_derived_values_on_live_draft() {
    let profile = instant_profile();
    profile.start_editing();
    profile.update_field(ProfileField::LastName, "");
    profile.update_field(ProfileField::Address, "");
    profile.update_field(ProfileField::State, "");
    profile.update_field(ProfileField::Zip, "");

    let draft = profile.draft();
    assert_eq!(draft.full_name(), "Ada");
    assert_eq!(draft.formatted_address(), "Springfield, USA");
}
