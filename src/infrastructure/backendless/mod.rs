//! Backendless data API integration.
//!
//! [`BackendlessUserRepository`] turns [`crate::domain::entities::UserQuery`]
//! and [`crate::domain::entities::UserPayload`] into REST calls against the
//! configured table endpoint and normalizes failures into
//! [`crate::error::AppError`].

mod repository;

pub use repository::{API_KEY_HEADER, APPLICATION_ID_HEADER, BackendlessUserRepository};
