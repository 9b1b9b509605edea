//! Resource page and submission handlers
//!
//! Each handler looks the resource up by the `{resource}` path segment and
//! delegates to the matching [`Resource`](crate::resource::Resource)
//! operation. Errors render through [`AdminError`]'s `IntoResponse`.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::components::Page;
use crate::error::AdminError;
use crate::query::Record;
use crate::resource::{ActionResult, AdminRequest};
use crate::state::AdminState;

/// Index page
///
/// # Errors
///
/// Unknown resource, malformed search values, or a failing store.
pub async fn index(
    State(state): State<AdminState>,
    Path(resource): Path<String>,
    request: AdminRequest,
) -> Result<Json<Page>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.index(&state, &request).await?))
}

/// Creation page
///
/// # Errors
///
/// Unknown resource.
pub async fn create(
    State(state): State<AdminState>,
    Path(resource): Path<String>,
    request: AdminRequest,
) -> Result<Json<Page>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.create(&state, &request).await?))
}

/// Update page
///
/// # Errors
///
/// Unknown resource, missing `id`, or no row with that id.
pub async fn edit(
    State(state): State<AdminState>,
    Path(resource): Path<String>,
    request: AdminRequest,
) -> Result<Json<Page>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.edit(&state, &request).await?))
}

/// Creation form submission
///
/// # Errors
///
/// Unknown resource, failed validation, or a failing store.
pub async fn store(
    State(state): State<AdminState>,
    Path(resource): Path<String>,
    request: AdminRequest,
    Json(data): Json<Record>,
) -> Result<Json<ActionResult>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.store(&state, &request, data).await?))
}

/// Update form submission
///
/// # Errors
///
/// Unknown resource, missing id, failed validation, or a failing store.
pub async fn save(
    State(state): State<AdminState>,
    Path(resource): Path<String>,
    request: AdminRequest,
    Json(data): Json<Record>,
) -> Result<Json<ActionResult>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.save(&state, &request, data).await?))
}

/// Named action
///
/// # Errors
///
/// Unknown resource or action, or whatever the action returns.
pub async fn action(
    State(state): State<AdminState>,
    Path((resource, uri_key)): Path<(String, String)>,
    request: AdminRequest,
) -> Result<Json<ActionResult>, AdminError> {
    let resource = state.lookup(&resource)?;
    Ok(Json(resource.action(&state, &request, &uri_key).await?))
}
