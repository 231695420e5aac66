//! HTTP request handlers for API endpoints.

pub mod health;
pub mod users;

pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, find_by_email_handler, find_by_username_handler,
    get_user_handler, list_users_handler, update_user_handler,
};
