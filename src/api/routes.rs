//! Users route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, find_by_email_handler, find_by_username_handler,
    get_user_handler, list_users_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Users CRUD routes.
///
/// # Endpoints
///
/// - `GET    /users`                       - List (pageSize, offset, where, sortBy)
/// - `POST   /users`                       - Create
/// - `GET    /users/{id}`                  - Fetch one
/// - `PUT    /users/{id}`                  - Update
/// - `PATCH  /users/{id}`                  - Update (same handler as PUT)
/// - `DELETE /users/{id}`                  - Delete
/// - `GET    /users/by-email/{email}`      - Exact-match lookup
/// - `GET    /users/by-username/{username}` - Exact-match lookup
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/users/by-email/{email}", get(find_by_email_handler))
        .route("/users/by-username/{username}", get(find_by_username_handler))
}
