//! Core domain types for the Users proxy.
//!
//! The proxy owns no records: these types describe what is forwarded to the
//! data service and what comes back.
//!
//! # Entity Types
//!
//! - [`UserPayload`] - Allow-listed body for create and update
//! - [`UserQuery`] - Pagination, filter and sort parameters for listing
//! - [`UpstreamReply`] - A successful response from the data service

pub mod query;
pub mod reply;
pub mod user;

pub use query::{DEFAULT_PAGE_SIZE, UserQuery, exact_match_clause};
pub use reply::UpstreamReply;
pub use user::{REQUIRED_ON_CREATE, USER_FIELDS, UserPayload};
