use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use common::{pagination::Pagination, types::Message};
use models::doctor;
use service::doctor_service;

use crate::errors::JsonApiError;
use crate::extract::{RecordId, ValidJson, ValidQuery};
use crate::routes::{route_both, ServerState};

const ENTITY: &str = "Doctor";

pub fn router() -> Router<ServerState> {
    let r = route_both(Router::new(), "/doctors", get(list).post(create));
    route_both(r, "/doctors/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    post, path = "/doctors/", tag = "doctors",
    request_body = crate::openapi::NewDoctorDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 409, description = "Phone number or email already used"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ValidJson(input): ValidJson<doctor::NewDoctor>) -> Result<Json<doctor::Model>, JsonApiError> {
    let m = doctor_service::create_doctor(&state.db, input).await?;
    info!(id = m.doctor_id, "created doctor");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/doctors/{id}", tag = "doctors",
    params(("id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(State(state): State<ServerState>, id: RecordId) -> Result<Json<doctor::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(doctor_service::get_doctor(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/doctors/", tag = "doctors",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default 100)")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>, ValidQuery(page): ValidQuery<Pagination>) -> Result<Json<Vec<doctor::Model>>, JsonApiError> {
    let rows = doctor_service::list_doctors(&state.db, page).await?;
    info!(count = rows.len(), "list doctors");
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/doctors/{id}", tag = "doctors",
    params(("id" = i32, Path, description = "Doctor ID")),
    request_body = crate::openapi::DoctorChangesDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Phone number or email already used")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: RecordId,
    ValidJson(changes): ValidJson<doctor::DoctorChanges>,
) -> Result<Json<doctor::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let m = doctor_service::update_doctor(&state.db, id, changes).await?;
    info!(id = m.doctor_id, "updated doctor");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/doctors/{id}", tag = "doctors",
    params(("id" = i32, Path, description = "Doctor ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
/// Appointments with this doctor are kept with `DoctorID` set to null.
pub async fn delete(State(state): State<ServerState>, id: RecordId) -> Result<Json<Message>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let msg = doctor_service::delete_doctor(&state.db, id).await?;
    info!(id, "deleted doctor");
    Ok(Json(msg))
}
