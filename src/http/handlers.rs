//! Request handlers for the user API.
//!
//! | Method | Path         | Handler         |
//! |--------|--------------|-----------------|
//! | GET    | /users       | [`list_users`]  |
//! | GET    | /users/{id}  | [`get_user`]    |
//! | POST   | /user        | [`create_user`] |
//! | PUT    | /user/{id}   | [`update_user`] |
//! | DELETE | /user/{id}   | [`delete_user`] |
//! | *      | *            | [`invalid_route`] |

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::http::request::{UserId, UserJson};
use crate::http::response::{ApiError, MessageBody, USER_ADDED, USER_REMOVED, USER_UPDATED};
use crate::http::server::AppState;
use crate::users::{validate_user, User};

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list_all())
}

pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.store.get_by_id(&id)?))
}

pub async fn create_user(
    State(state): State<AppState>,
    UserJson(payload): UserJson,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let new_user = validate_user(&payload)?;
    let user = state.store.create(new_user).inspect_err(|e| {
        tracing::debug!(error = %e, "Create rejected");
    })?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(MessageBody::with_user(USER_ADDED, user))))
}

/// Validation runs before the id lookup, so a bad body on a missing id is a 400.
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    UserJson(payload): UserJson,
) -> Result<Json<MessageBody>, ApiError> {
    let new_user = validate_user(&payload)?;
    let user = state.store.update(&id, new_user)?;

    tracing::info!(user_id = %user.id, "User updated");
    Ok(Json(MessageBody::with_user(USER_UPDATED, user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<MessageBody>, ApiError> {
    state.store.delete(&id)?;

    tracing::info!(user_id = %id, "User removed");
    Ok(Json(MessageBody::bare(USER_REMOVED)))
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn invalid_route() -> ApiError {
    ApiError::InvalidRoute
}
