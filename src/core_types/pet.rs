//! Pet catalog domain types
//!
//! Mirrors the JSON shapes the PetFriends service returns. Every field is
//! defaulted so partial records (the service omits `pet_photo` on some
//! endpoints) still decode.

use serde::{Deserialize, Serialize};

/// Opaque token returned by the key endpoint and sent as the `auth_key` header.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Scope of the pet list.
///
/// The service accepts exactly these two values. The list call takes any
/// `AsRef<str>` so callers can still send something else and observe the
/// service's rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PetFilter {
    /// Every pet in the catalog (`""`).
    #[default]
    All,
    /// Pets owned by the authenticated user (`"my_pets"`).
    MyPets,
}

impl PetFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl AsRef<str> for PetFilter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pet record as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    /// Free text on the service side, e.g. `"6"`.
    pub age: String,
    /// Data URL of the photo, empty when none was uploaded.
    pub pet_photo: String,
    pub user_id: Option<String>,
    pub created_at: Option<String>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }
}

/// Body of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    /// The most recently created pet. The service lists in creation order.
    pub fn last(&self) -> Option<&Pet> {
        self.pets.last()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
