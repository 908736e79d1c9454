//! Domain layer containing business entities and storage contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers;
//! concrete repositories live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
