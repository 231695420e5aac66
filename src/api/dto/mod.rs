//! Data Transfer Objects for API requests and responses.
//!
//! User bodies themselves are opaque JSON and have no DTO; see
//! [`crate::domain::entities::UserPayload`] for the allow-list applied to them.

pub mod health;
pub mod users;
