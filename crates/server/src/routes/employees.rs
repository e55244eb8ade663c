use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service::employee::{EmployeeDetails, EmployeeInput, EmployeeShort};
use service::errors::ServiceError;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{errors::JsonApiError, metrics, startup::ServerState};

pub const BASE_PATH: &str = "/api/v1/employees";

fn track(e: ServiceError) -> JsonApiError {
    if matches!(e, ServiceError::NotFound(_)) {
        metrics::EMPLOYEE_NOT_FOUND_TOTAL.inc();
    }
    JsonApiError::from(e)
}

/// Malformed or incomplete JSON bodies get the same 400 shape as failed validation.
fn body_or_400(payload: Result<Json<EmployeeInput>, JsonRejection>) -> Result<EmployeeInput, JsonApiError> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(rejection) => {
            warn!(status = %rejection.status(), "rejected employee body");
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(rejection.body_text())))
        }
    }
}

#[utoipa::path(
    get, path = "/api/v1/employees", tag = "employees",
    responses(
        (status = 200, description = "All employees, short form", body = [crate::openapi::EmployeeShortDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<EmployeeShort>>, JsonApiError> {
    let list = state.employees.list().await?;
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<EmployeeDetails>, JsonApiError> {
    state.employees.get(id).await.map(Json).map_err(track)
}

#[utoipa::path(
    get, path = "/api/v1/employees/short/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeShortDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_short(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<EmployeeShort>, JsonApiError> {
    state.employees.get_short(id).await.map(Json).map_err(track)
}

#[utoipa::path(
    post, path = "/api/v1/employees", tag = "employees",
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 201, description = "Created; Location points at the short form", body = crate::openapi::EmployeeShortDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Response, JsonApiError> {
    let input = body_or_400(payload)?;
    let created = state.employees.create(input).await.map_err(track)?;
    metrics::EMPLOYEES_CREATED_TOTAL.inc();
    info!(id = %created.id, "created employee");
    let location = format!("{}/short/{}", BASE_PATH, created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response())
}

#[utoipa::path(
    put, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = crate::openapi::EmployeeInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EmployeeDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<EmployeeDetails>, JsonApiError> {
    let input = body_or_400(payload)?;
    let updated = state.employees.update(id, input).await.map_err(track)?;
    metrics::EMPLOYEES_UPDATED_TOTAL.inc();
    info!(id = %id, "updated employee");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/employees/{id}", tag = "employees",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted, or nothing to delete")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<StatusCode, JsonApiError> {
    if state.employees.delete(id).await? {
        metrics::EMPLOYEES_DELETED_TOTAL.inc();
        info!(id = %id, "deleted employee");
    } else {
        warn!(id = %id, "delete for unknown employee ignored");
    }
    Ok(StatusCode::NO_CONTENT)
}
