//! Handlers for user endpoints (list, create, get, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::users::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// Returns the full collection in insertion order. An empty store yields an
/// empty array, not an error.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com"   // any extra fields are stored verbatim
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record, including the identifier assigned
/// by the store.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the payload carries an
/// `id` — identifiers are assigned by the store and immutable.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    if payload.attributes.contains_key("id") {
        return Err(AppError::bad_request(
            "id is assigned by the store",
            json!({ "field": "id" }),
        ));
    }

    let user = state.user_service.create_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Returns a single user by identifier.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has the given identifier.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Removes a user by identifier.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no user has the given identifier — deleting a
/// missing user is never a silent no-op.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
