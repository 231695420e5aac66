//! # Users Proxy
//!
//! A thin REST proxy exposing CRUD endpoints for a Backendless "Users" table,
//! built with Axum and reqwest.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Payload, query and reply types plus the repository trait
//! - **Application Layer** ([`application`]) - Allow-list filtering and presence checks
//! - **Infrastructure Layer** ([`infrastructure`]) - Backendless REST client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! Every inbound Users request produces exactly one outbound request. The
//! proxy keeps no state between requests.
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKENDLESS_BASE_URL="https://myapp.backendless.app/api/data/UsersDB"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{UpstreamReply, UserPayload, UserQuery};
    pub use crate::error::{AppError, BackendError};
    pub use crate::infrastructure::backendless::BackendlessUserRepository;
    pub use crate::state::AppState;
}
