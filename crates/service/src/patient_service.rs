use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::instrument;

use common::{pagination::Pagination, types::Message};
use models::{errors, patient, timestamp};
use crate::{errors::ServiceError, update::provided};

const ENTITY: &str = "Patient";

/// Create a patient.
#[instrument(skip_all)]
pub async fn create_patient(db: &DatabaseConnection, input: patient::NewPatient) -> Result<patient::Model, ServiceError> {
    Ok(patient::create(db, input).await?)
}

/// Get patient by id.
pub async fn get_patient(db: &DatabaseConnection, id: i32) -> Result<patient::Model, ServiceError> {
    patient::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

/// List patients in insertion order.
pub async fn list_patients(db: &DatabaseConnection, page: Pagination) -> Result<Vec<patient::Model>, ServiceError> {
    let rows = patient::Entity::find()
        .order_by_asc(patient::Column::PatientId)
        .offset(page.sql_offset())
        .limit(page.sql_limit())
        .all(db)
        .await?;
    Ok(rows)
}

/// Apply the provided fields and refresh `UpdatedAt`.
#[instrument(skip(db, changes))]
pub async fn update_patient(db: &DatabaseConnection, id: i32, changes: patient::PatientChanges) -> Result<patient::Model, ServiceError> {
    let mut am: patient::ActiveModel = get_patient(db, id).await?.into();
    if let Some(v) = provided(changes.full_name) {
        errors::max_len("FullName", &v, 100)?;
        am.full_name = Set(v);
    }
    if let Some(v) = provided(changes.date_of_birth) { am.date_of_birth = Set(v); }
    if let Some(v) = provided(changes.phone_number) {
        errors::max_len("PhoneNumber", &v, 15)?;
        am.phone_number = Set(v);
    }
    if let Some(v) = provided(changes.email) {
        errors::max_len("Email", &v, 100)?;
        am.email = Set(Some(v));
    }
    if let Some(v) = provided(changes.gender) {
        errors::max_len("Gender", &v, 20)?;
        am.gender = Set(v);
    }
    am.updated_at = Set(timestamp::now());
    Ok(am.update(db).await?)
}

/// Delete a patient; their appointments go with them.
pub async fn delete_patient(db: &DatabaseConnection, id: i32) -> Result<Message, ServiceError> {
    get_patient(db, id).await?;
    patient::Entity::delete_by_id(id).exec(db).await?;
    Ok(Message::new(format!("{ENTITY} deleted successfully")))
}
