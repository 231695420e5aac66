//! Application layer services.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Users CRUD and lookups forwarded to Backendless

pub mod services;
