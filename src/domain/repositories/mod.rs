//! Repository trait definitions for the domain layer.
//!
//! The proxy has a single data-access seam: [`UserRepository`], implemented
//! over HTTP in `crate::infrastructure::backendless`. Mock implementations
//! are generated via `mockall` for service tests.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
