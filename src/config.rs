use crate::error::{PetFriendsError, PetFriendsResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Public PetFriends deployment.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

const DEFAULT_INVALID_EMAIL: &str = "invalid_email@example.com";
const DEFAULT_INVALID_PASSWORD: &str = "invalid_password";

/// Email/password pair for the key endpoint
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The registered account plus the deliberately wrong values used by the
/// negative authentication scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAccount {
    pub valid: Credentials,
    pub invalid_email: String,
    pub invalid_password: String,
}

impl Default for TestAccount {
    fn default() -> Self {
        Self {
            valid: Credentials::default(),
            invalid_email: DEFAULT_INVALID_EMAIL.to_string(),
            invalid_password: DEFAULT_INVALID_PASSWORD.to_string(),
        }
    }
}

impl TestAccount {
    /// Unknown email, correct password.
    pub fn with_invalid_email(&self) -> Credentials {
        Credentials::new(&self.invalid_email, &self.valid.password)
    }

    /// Correct email, wrong password.
    pub fn with_invalid_password(&self) -> Credentials {
        Credentials::new(&self.valid.email, &self.invalid_password)
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetFriendsConfig {
    /// Scheme and host, without a trailing `/api`
    pub base_url: String,
    pub account: TestAccount,
}

impl Default for PetFriendsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account: TestAccount::default(),
        }
    }
}

impl PetFriendsConfig {
    pub fn new(base_url: impl Into<String>, account: TestAccount) -> Self {
        Self {
            base_url: base_url.into(),
            account,
        }
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if:
    /// - The base URL is empty or not http(s)
    /// - The valid email or password is empty
    pub fn validate(&self) -> PetFriendsResult<()> {
        if self.base_url.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends base URL is required",
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PetFriendsError::configuration_error(format!(
                "PetFriends base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.account.valid.email.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends account email is required",
            ));
        }
        if self.account.valid.password.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends account password is required",
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables
    /// This is the ONLY method that should access environment variables
    ///
    /// | Variable | Required | Default |
    /// |----------|----------|---------|
    /// | `PETFRIENDS_BASE_URL` | no | [`DEFAULT_BASE_URL`] |
    /// | `PETFRIENDS_EMAIL` | yes | |
    /// | `PETFRIENDS_PASSWORD` | yes | |
    /// | `PETFRIENDS_INVALID_EMAIL` | no | `invalid_email@example.com` |
    /// | `PETFRIENDS_INVALID_PASSWORD` | no | `invalid_password` |
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if a required variable
    /// is missing or validation fails.
    pub fn from_env() -> PetFriendsResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("PETFRIENDS_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        config.account.valid.email = std::env::var("PETFRIENDS_EMAIL").map_err(|_| {
            PetFriendsError::configuration_error("PETFRIENDS_EMAIL is not set")
        })?;
        config.account.valid.password = std::env::var("PETFRIENDS_PASSWORD").map_err(|_| {
            PetFriendsError::configuration_error("PETFRIENDS_PASSWORD is not set")
        })?;

        if let Ok(invalid_email) = std::env::var("PETFRIENDS_INVALID_EMAIL") {
            config.account.invalid_email = invalid_email;
        }
        if let Ok(invalid_password) = std::env::var("PETFRIENDS_INVALID_PASSWORD") {
            config.account.invalid_password = invalid_password;
        }

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            email = %config.account.valid.email,
            "PetFriends configuration loaded and validated"
        );

        Ok(config)
    }
}
