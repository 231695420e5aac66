//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`backendless`] - HTTP client for the Backendless data API

pub mod backendless;
