//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All user resource routes.
///
/// # Endpoints
///
/// - `GET    /users`      - List all users
/// - `POST   /users`      - Create a user
/// - `GET    /users/{id}` - Fetch a single user
/// - `DELETE /users/{id}` - Remove a user
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler).delete(delete_user_handler),
        )
}
