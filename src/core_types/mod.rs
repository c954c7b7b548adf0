//! Core types for the PetFriends client
//!
//! ## Organization
//! - `pet` - Catalog records, API key and list filter
//! - `response` - Status + body pair returned by every call

pub mod pet;
pub mod response;

pub use pet::{ApiKey, Pet, PetFilter, PetList};
pub use response::{ApiResponse, ResponseBody};
