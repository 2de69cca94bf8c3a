//! User record endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::RecordRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{RecordForm, RecordId};
use crate::http::server::AppState;
use crate::models::Record;

/// POST /users - create a record from form fields
async fn create_user(
    State(state): State<Arc<AppState>>,
    RecordForm(input): RecordForm,
) -> Result<Json<Record>, ApiError> {
    let record = RecordRepo::new(&state.pool).create(input).await?;
    Ok(Json(record))
}

/// GET /users - list all records
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Record>>, ApiError> {
    let records = RecordRepo::new(&state.pool).list().await?;
    Ok(Json(records))
}

/// GET /users/{id} - get a single record
async fn get_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Record>, ApiError> {
    let record = RecordRepo::new(&state.pool).get(id).await?;
    Ok(Json(record))
}

/// PUT /users/{id} - replace name and age
async fn update_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    RecordForm(input): RecordForm,
) -> Result<Json<Record>, ApiError> {
    let record = RecordRepo::new(&state.pool).update(id, input).await?;
    Ok(Json(record))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<StatusCode, ApiError> {
    RecordRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
