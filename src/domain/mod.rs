//! Domain layer containing the proxy's data types and repository seam.
//!
//! # Architecture
//!
//! - [`entities`] - Payload, query and reply types
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Presence validation lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
