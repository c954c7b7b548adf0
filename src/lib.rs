//! # pet-friends
//!
//! Typed async client for the PetFriends pet-catalog REST API, plus the
//! end-to-end scenario suite that exercises it.
//!
//! ## Key Features
//!
//! - **Raw outcomes**: every call returns the HTTP status and the body (JSON
//!   when it parses, text otherwise) without interpreting either
//! - **Full pet lifecycle**: key, list, create with or without photo, photo
//!   upload, update, delete
//! - **Configuration from environment**: base URL and test account via
//!   `PETFRIENDS_*` variables
//!
//! ## Example
//!
//! ```rust,no_run
//! use pet_friends::{PetFilter, PetFriendsClient, PetFriendsConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PetFriendsConfig::from_env()?;
//! let client = PetFriendsClient::from_config(&config)?;
//!
//! let account = &config.account.valid;
//! let auth = client.get_api_key(&account.email, &account.password).await?;
//! let api_key = auth.api_key()?;
//!
//! let listed = client.get_list_of_pets(&api_key, PetFilter::MyPets).await?;
//! println!("{} -> {}", listed.status, listed.body);
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod client;
pub mod config;
pub mod error;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use client::PetFriendsClient;
pub use config::{Credentials, PetFriendsConfig, TestAccount};
pub use core_types::{ApiKey, ApiResponse, Pet, PetFilter, PetList, ResponseBody};
pub use error::{PetFriendsError, PetFriendsResult};
