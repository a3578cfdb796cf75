use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use common::{pagination::Pagination, types::Message};
use models::patient;
use service::patient_service;

use crate::errors::JsonApiError;
use crate::extract::{RecordId, ValidJson, ValidQuery};
use crate::routes::{route_both, ServerState};

const ENTITY: &str = "Patient";

pub fn router() -> Router<ServerState> {
    let r = route_both(Router::new(), "/patients", get(list).post(create));
    route_both(r, "/patients/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    post, path = "/patients/", tag = "patients",
    request_body = crate::openapi::NewPatientDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 409, description = "Phone number or email already used"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ValidJson(input): ValidJson<patient::NewPatient>) -> Result<Json<patient::Model>, JsonApiError> {
    let m = patient_service::create_patient(&state.db, input).await?;
    info!(id = m.patient_id, "created patient");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/patients/{id}", tag = "patients",
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(State(state): State<ServerState>, id: RecordId) -> Result<Json<patient::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(patient_service::get_patient(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/patients/", tag = "patients",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default 100)")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>, ValidQuery(page): ValidQuery<Pagination>) -> Result<Json<Vec<patient::Model>>, JsonApiError> {
    let rows = patient_service::list_patients(&state.db, page).await?;
    info!(count = rows.len(), "list patients");
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/patients/{id}", tag = "patients",
    params(("id" = i32, Path, description = "Patient ID")),
    request_body = crate::openapi::PatientChangesDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Phone number or email already used")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: RecordId,
    ValidJson(changes): ValidJson<patient::PatientChanges>,
) -> Result<Json<patient::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let m = patient_service::update_patient(&state.db, id, changes).await?;
    info!(id = m.patient_id, "updated patient");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/patients/{id}", tag = "patients",
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, id: RecordId) -> Result<Json<Message>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let msg = patient_service::delete_patient(&state.db, id).await?;
    info!(id, "deleted patient");
    Ok(Json(msg))
}
