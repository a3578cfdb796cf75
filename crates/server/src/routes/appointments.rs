use axum::{extract::State, routing::get, Json, Router};
use serde_json::Number;
use tracing::info;

use common::{pagination::Pagination, types::Message};
use models::{appointment, treatment};
use service::appointment_service::{
    self, AppointmentTreatmentDetail, AppointmentWithTreatments, UpcomingAppointment,
};

use crate::errors::JsonApiError;
use crate::extract::{RecordId, ValidJson, ValidQuery};
use crate::routes::{route_both, ServerState};

const ENTITY: &str = "Appointment";

pub fn router() -> Router<ServerState> {
    let r = route_both(Router::new(), "/appointments", get(list).post(create));
    let r = route_both(r, "/appointments/upcoming", get(upcoming));
    let r = route_both(r, "/appointments/:id", get(get_one).put(update).delete(delete));
    let r = route_both(r, "/appointments/:id/treatments", get(list_treatments).post(link_treatments));
    route_both(r, "/appointments/:id/details", get(details))
}

#[utoipa::path(
    post, path = "/appointments/", tag = "appointments",
    request_body = crate::openapi::NewAppointmentDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 409, description = "Unknown PatientID or DoctorID"),
        (status = 422, description = "Validation Error")
    )
)]
pub async fn create(State(state): State<ServerState>, ValidJson(input): ValidJson<appointment::NewAppointment>) -> Result<Json<AppointmentWithTreatments>, JsonApiError> {
    let m = appointment_service::create_appointment(&state.db, input).await?;
    info!(id = m.appointment.appointment_id, patient_id = m.appointment.patient_id, "created appointment");
    Ok(Json(m))
}

#[utoipa::path(
    get, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_one(State(state): State<ServerState>, id: RecordId) -> Result<Json<AppointmentWithTreatments>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(appointment_service::get_appointment(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/appointments/", tag = "appointments",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows (default 100)")
    ),
    responses((status = 200, description = "List OK"))
)]
pub async fn list(State(state): State<ServerState>, ValidQuery(page): ValidQuery<Pagination>) -> Result<Json<Vec<AppointmentWithTreatments>>, JsonApiError> {
    let rows = appointment_service::list_appointments(&state.db, page).await?;
    info!(count = rows.len(), "list appointments");
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = crate::openapi::AppointmentChangesDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Unknown PatientID or DoctorID")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: RecordId,
    ValidJson(changes): ValidJson<appointment::AppointmentChanges>,
) -> Result<Json<AppointmentWithTreatments>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let m = appointment_service::update_appointment(&state.db, id, changes).await?;
    info!(id = m.appointment.appointment_id, "updated appointment");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/appointments/{id}", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, id: RecordId) -> Result<Json<Message>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let msg = appointment_service::delete_appointment(&state.db, id).await?;
    info!(id, "deleted appointment");
    Ok(Json(msg))
}

/// Integers from a link body. Ones too large for `i64` cannot name a treatment and are dropped.
fn integer_ids(raw: &[Number]) -> Result<Vec<i64>, JsonApiError> {
    let mut ids = Vec::with_capacity(raw.len());
    for n in raw {
        if let Some(id) = n.as_i64() {
            ids.push(id);
        } else if n.is_u64() {
            continue;
        } else {
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() >= 9.2e18 => continue,
                _ => return Err(JsonApiError::invalid(format!("treatment id `{n}` is not an integer"))),
            }
        }
    }
    Ok(ids)
}

#[utoipa::path(
    post, path = "/appointments/{id}/treatments/", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Linked; unknown treatment ids are ignored"),
        (status = 404, description = "Appointment Not Found"),
        (status = 422, description = "Body is not an array of integers")
    )
)]
pub async fn link_treatments(
    State(state): State<ServerState>,
    id: RecordId,
    ValidJson(treatment_ids): ValidJson<Vec<Number>>,
) -> Result<Json<Message>, JsonApiError> {
    let id = id.key(ENTITY)?;
    let treatment_ids = integer_ids(&treatment_ids)?;
    appointment_service::link_treatments(&state.db, id, &treatment_ids).await?;
    Ok(Json(Message::new("Treatments linked successfully")))
}

#[utoipa::path(
    get, path = "/appointments/{id}/treatments/", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Linked treatments"),
        (status = 404, description = "Appointment Not Found")
    )
)]
pub async fn list_treatments(State(state): State<ServerState>, id: RecordId) -> Result<Json<Vec<treatment::Model>>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(appointment_service::list_treatments_for_appointment(&state.db, id).await?))
}

#[utoipa::path(
    get, path = "/appointments/upcoming/", tag = "appointments",
    responses((status = 200, description = "Appointments from now on, earliest first"))
)]
pub async fn upcoming(State(state): State<ServerState>) -> Result<Json<Vec<UpcomingAppointment>>, JsonApiError> {
    let now = chrono::Utc::now().naive_utc();
    Ok(Json(appointment_service::upcoming_appointments(&state.db, now).await?))
}

#[utoipa::path(
    get, path = "/appointments/{id}/details/", tag = "appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "One row per linked treatment"),
        (status = 404, description = "Appointment Not Found")
    )
)]
pub async fn details(State(state): State<ServerState>, id: RecordId) -> Result<Json<Vec<AppointmentTreatmentDetail>>, JsonApiError> {
    let id = id.key(ENTITY)?;
    Ok(Json(appointment_service::treatment_details(&state.db, id).await?))
}
