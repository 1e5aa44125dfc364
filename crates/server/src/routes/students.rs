use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service::{NewStudentInput, StudentRecord};
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/students", tag = "students",
    request_body = crate::openapi::NewStudentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Missing required fields or undecodable body", body = crate::openapi::ErrorDoc),
        (status = 503, description = "Store unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<NewStudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentRecord>), JsonApiError> {
    let Json(input) = payload?;
    let record = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get, path = "/api/students", tag = "students",
    responses(
        (status = 200, description = "All students, possibly none", body = [crate::openapi::StudentDoc]),
        (status = 503, description = "Store unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<StudentRecord>>, JsonApiError> {
    Ok(Json(state.store.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Unknown or malformed id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentRecord>, JsonApiError> {
    Ok(Json(state.store.get_by_id(&id).await?))
}

#[utoipa::path(
    delete, path = "/api/students/{id}", tag = "students",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Unknown or malformed id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    let removed = state.store.delete_by_id(&id).await?;
    info!(id = %removed, "delete request served");
    Ok(Json(json!({ "message": "Student deleted successfully" })))
}

#[utoipa::path(
    get, path = "/api/students/name/{name}", tag = "students",
    params(("name" = String, Path, description = "Fragment of a first or last name, case-insensitive")),
    responses(
        (status = 200, description = "At least one match", body = [crate::openapi::StudentDoc]),
        (status = 404, description = "No matches", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn search_students(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StudentRecord>>, JsonApiError> {
    Ok(Json(state.store.search_by_name(&name).await?))
}
