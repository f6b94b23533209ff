use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::ERR_INVALID_ID;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    /// Literal, case-sensitive name substring to filter on
    pub name: Option<String>,
}

/// Parse a path id, rejecting anything that is not an integer
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(ERR_INVALID_ID.to_string()))
}

/// List users, optionally filtered by a name substring
///
/// Without a filter the whole table is returned in storage order. A filter
/// that matches nothing returns an empty array, not an error.
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<User>>> {
    let store = state.store.clone();
    let substring = params.name.unwrap_or_default();

    let users =
        tokio::task::spawn_blocking(move || store.list_by_name_contains(&substring)).await??;

    Ok(Json(users))
}

/// Fetch a single user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let store = state.store.clone();

    let user = tokio::task::spawn_blocking(move || store.get_by_id(id)).await??;

    Ok(Json(user))
}

/// Create a user
///
/// The record is stored with whatever id the caller supplied, including
/// none. The stored record is echoed back as confirmation.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<User>,
) -> Result<Json<User>> {
    let store = state.store.clone();

    let user = tokio::task::spawn_blocking(move || store.create(payload)).await??;

    tracing::info!("Created user (id: {:?})", user.id);

    Ok(Json(user))
}

/// Replace name, email and password of an existing user
///
/// The id in the path wins; an id in the body is ignored.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<User>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let store = state.store.clone();

    let user = tokio::task::spawn_blocking(move || store.update_by_id(id, payload)).await??;

    tracing::info!("Updated user {}", id);

    Ok(Json(user))
}

/// Delete a user by id, returning its prior value
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let store = state.store.clone();

    let user = tokio::task::spawn_blocking(move || store.delete_by_id(id)).await??;

    tracing::info!("Deleted user {}", id);

    Ok(Json(user))
}
