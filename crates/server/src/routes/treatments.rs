use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use common::{pagination::Pagination, types::Message};
use models::treatment;
use service::treatment_service;

use crate::errors::JsonApiError;
use crate::extract::{RecordId, ValidJson, ValidQuery};
use crate::routes::{route_both, ServerState};

const ENTITY: &str = "Treatment";

pub fn router() -> Router<ServerState> {
    let r = route_both(Router::new(), "/treatments", get(list).post(create));
    route_both(r, "/treatments/:id", get(get_one).put(update).delete(delete))
}

#[utoipa::path(
    post, path = "/treatments/", tag = "treatments",
    request_body = crate::openapi::NewTreatmentDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ValidJson(input): ValidJson<treatment::NewTreatment>) -> Result<Json<treatment::Model>, JsonApiError> {
    let m = treatment_service::create_treatment(&state.db, input).await?;
    info!(id = m.treatment_id, "created treatment");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/treatments/{id}", tag = "treatments",
    params(("id" = i32, Path, description = "Treatment ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(State(state): State<ServerState>, id: RecordId) -> Result<Json<treatment::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(treatment_service::get_treatment(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/treatments/", tag = "treatments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default 100)")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>, ValidQuery(page): ValidQuery<Pagination>) -> Result<Json<Vec<treatment::Model>>, JsonApiError> {
    let rows = treatment_service::list_treatments(&state.db, page).await?;
    info!(count = rows.len(), "list treatments");
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/treatments/{id}", tag = "treatments",
    params(("id" = i32, Path, description = "Treatment ID")),
    request_body = crate::openapi::TreatmentChangesDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: RecordId,
    ValidJson(changes): ValidJson<treatment::TreatmentChanges>,
) -> Result<Json<treatment::Model>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let m = treatment_service::update_treatment(&state.db, id, changes).await?;
    info!(id = m.treatment_id, "updated treatment");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/treatments/{id}", tag = "treatments",
    params(("id" = i32, Path, description = "Treatment ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
/// Also removes the treatment from every appointment it was linked to.
pub async fn delete(State(state): State<ServerState>, id: RecordId) -> Result<Json<Message>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let msg = treatment_service::delete_treatment(&state.db, id).await?;
    info!(id, "deleted treatment");
    Ok(Json(msg))
}
