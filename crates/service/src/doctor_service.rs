use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::instrument;

use common::{pagination::Pagination, types::Message};
use models::{doctor, errors, timestamp};
use crate::{errors::ServiceError, update::provided};

const ENTITY: &str = "Doctor";

/// Create a doctor.
#[instrument(skip_all)]
pub async fn create_doctor(db: &DatabaseConnection, input: doctor::NewDoctor) -> Result<doctor::Model, ServiceError> {
    Ok(doctor::create(db, input).await?)
}

/// Get doctor by id.
pub async fn get_doctor(db: &DatabaseConnection, id: i32) -> Result<doctor::Model, ServiceError> {
    doctor::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

pub async fn list_doctors(db: &DatabaseConnection, page: Pagination) -> Result<Vec<doctor::Model>, ServiceError> {
    let rows = doctor::Entity::find()
        .order_by_asc(doctor::Column::DoctorId)
        .offset(page.sql_offset())
        .limit(page.sql_limit())
        .all(db)
        .await?;
    Ok(rows)
}

#[instrument(skip(db, changes))]
pub async fn update_doctor(db: &DatabaseConnection, id: i32, changes: doctor::DoctorChanges) -> Result<doctor::Model, ServiceError> {
    let mut am: doctor::ActiveModel = get_doctor(db, id).await?.into();
    if let Some(v) = provided(changes.full_name) {
        errors::max_len("FullName", &v, 100)?;
        am.full_name = Set(v);
    }
    if let Some(v) = provided(changes.specialty) {
        errors::max_len("Specialty", &v, 100)?;
        am.specialty = Set(v);
    }
    if let Some(v) = provided(changes.phone_number) {
        errors::max_len("PhoneNumber", &v, 15)?;
        am.phone_number = Set(Some(v));
    }
    if let Some(v) = provided(changes.email) {
        errors::max_len("Email", &v, 100)?;
        am.email = Set(Some(v));
    }
    am.updated_at = Set(timestamp::now());
    Ok(am.update(db).await?)
}

/// Delete a doctor; their appointments stay with `DoctorID` cleared.
pub async fn delete_doctor(db: &DatabaseConnection, id: i32) -> Result<Message, ServiceError> {
    get_doctor(db, id).await?;
    doctor::Entity::delete_by_id(id).exec(db).await?;
    Ok(Message::new(format!("{ENTITY} deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_doctor, tick};

    #[tokio::test]
    async fn doctor_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let d = create_doctor(&db, new_doctor("Dr. Quinn")).await?;
        assert_eq!(d.created_at, d.updated_at);
        assert_eq!(get_doctor(&db, d.doctor_id).await?, d);

        tick().await;
        let updated = update_doctor(&db, d.doctor_id, doctor::DoctorChanges {
            specialty: Some("Cardiology".into()),
            full_name: Some(String::new()),
            ..Default::default()
        })
        .await?;
        assert_eq!(updated.specialty, "Cardiology");
        assert_eq!(updated.full_name, "Dr. Quinn");
        assert!(updated.updated_at > d.updated_at);

        delete_doctor(&db, d.doctor_id).await?;
        assert!(matches!(get_doctor(&db, d.doctor_id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_doctor(&db, d.doctor_id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn doctors_without_phone_do_not_collide() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_doctor(&db, new_doctor("Dr. A")).await?;
        create_doctor(&db, new_doctor("Dr. B")).await?;
        assert_eq!(list_doctors(&db, Pagination::default()).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut a = new_doctor("Dr. A");
        a.email = Some("shared@clinic.test".into());
        let mut b = new_doctor("Dr. B");
        b.email = Some("shared@clinic.test".into());
        create_doctor(&db, a).await?;
        assert!(matches!(create_doctor(&db, b).await, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
