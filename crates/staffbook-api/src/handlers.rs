//! Request handlers for the employee routes.
//!
//! Each handler is a thin translation between HTTP and the store. Every
//! failure is turned into an [`ApiError`] here, so nothing escapes a handler
//! unclassified.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use staffbook_core::{Employee, EmployeeId, EmployeeInput, validate_input};

use crate::error::{ApiError, FIELDS_REQUIRED_MESSAGE};
use crate::routes::AppState;

/// Result returned by every handler.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Text served at `/`.
pub const BANNER: &str = "Employee Management System API";

/// Body of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text.
    pub message: String,
}

/// An id that does not parse can never name a stored record.
fn parse_id(raw: &str) -> ApiResult<EmployeeId> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

/// `GET /`
pub async fn banner() -> &'static str {
    BANNER
}

/// `GET /employees`
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.store.find_all().await?;
    tracing::debug!(count = employees.len(), "listed employees");
    Ok(Json(employees))
}

/// `GET /employees/{id}`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let id = parse_id(&id)?;
    state
        .store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /employees`
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let Json(input) = payload?;
    if !input.is_complete() {
        return Err(ApiError::bad_request(FIELDS_REQUIRED_MESSAGE));
    }

    let fields = validate_input(&input)?;
    let employee = state.store.insert(fields).await?;
    tracing::info!(id = %employee.id, "created employee");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// `PUT /employees/{id}`
///
/// Always a full replace of the four business fields. The payload is
/// validated before the lookup.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(input) = payload?;
    let fields = validate_input(&input)?;
    let id = parse_id(&id)?;

    let employee = state
        .store
        .replace_by_id(id, fields)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(id = %employee.id, "updated employee");
    Ok(Json(employee))
}

/// `DELETE /employees/{id}`
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state
        .store
        .delete_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(%id, "deleted employee");
    Ok(Json(MessageResponse {
        message: "Employee deleted".to_string(),
    }))
}
