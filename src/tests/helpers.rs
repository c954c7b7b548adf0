//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::{Credentials, PetFriendsConfig, TestAccount};

/// A complete, valid configuration pointing at `base_url`.
pub fn create_test_config(base_url: &str) -> PetFriendsConfig {
    PetFriendsConfig::new(
        base_url,
        TestAccount {
            valid: Credentials::new("tester@example.com", "s3cret-pass"),
            invalid_email: "nobody@example.com".to_string(),
            invalid_password: "wrong-pass".to_string(),
        },
    )
}

/// Clear every variable read by `PetFriendsConfig::from_env`.
pub fn clear_petfriends_env() {
    for name in [
        "PETFRIENDS_BASE_URL",
        "PETFRIENDS_EMAIL",
        "PETFRIENDS_PASSWORD",
        "PETFRIENDS_INVALID_EMAIL",
        "PETFRIENDS_INVALID_PASSWORD",
    ] {
        std::env::remove_var(name);
    }
}
