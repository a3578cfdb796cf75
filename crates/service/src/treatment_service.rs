use sea_orm::{DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};

use common::{pagination::Pagination, types::Message};
use models::{errors, treatment};
use crate::{errors::ServiceError, update::provided};

const ENTITY: &str = "Treatment";

pub async fn create_treatment(db: &DatabaseConnection, input: treatment::NewTreatment) -> Result<treatment::Model, ServiceError> {
    Ok(treatment::create(db, input).await?)
}

pub async fn get_treatment(db: &DatabaseConnection, id: i32) -> Result<treatment::Model, ServiceError> {
    treatment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

pub async fn list_treatments(db: &DatabaseConnection, page: Pagination) -> Result<Vec<treatment::Model>, ServiceError> {
    let rows = treatment::Entity::find()
        .order_by_asc(treatment::Column::TreatmentId)
        .offset(page.sql_offset())
        .limit(page.sql_limit())
        .all(db)
        .await?;
    Ok(rows)
}

/// Treatments carry no timestamps; only the provided fields change.
pub async fn update_treatment(db: &DatabaseConnection, id: i32, changes: treatment::TreatmentChanges) -> Result<treatment::Model, ServiceError> {
    let found = get_treatment(db, id).await?;
    let mut am: treatment::ActiveModel = found.clone().into();
    if let Some(v) = provided(changes.name) {
        errors::max_len("Name", &v, 100)?;
        am.name = Set(v);
    }
    if let Some(v) = provided(changes.description) { am.description = Set(Some(v)); }
    if !am.is_changed() {
        return Ok(found);
    }
    Ok(am.update(db).await?)
}

/// Delete a treatment and its appointment links.
pub async fn delete_treatment(db: &DatabaseConnection, id: i32) -> Result<Message, ServiceError> {
    get_treatment(db, id).await?;
    treatment::Entity::delete_by_id(id).exec(db).await?;
    Ok(Message::new(format!("{ENTITY} deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, new_treatment};

    #[tokio::test]
    async fn treatment_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let t = create_treatment(&db, new_treatment("Root Canal")).await?;
        assert_eq!(get_treatment(&db, t.treatment_id).await?, t);

        let updated = update_treatment(&db, t.treatment_id, treatment::TreatmentChanges {
            name: None,
            description: Some("Endodontic therapy".into()),
        })
        .await?;
        assert_eq!(updated.name, "Root Canal");
        assert_eq!(updated.description.as_deref(), Some("Endodontic therapy"));

        let msg = delete_treatment(&db, t.treatment_id).await?;
        assert_eq!(msg.message, "Treatment deleted successfully");
        assert!(matches!(get_treatment(&db, t.treatment_id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_with_only_empty_values_is_a_no_op() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = create_treatment(&db, new_treatment("Scaling")).await?;

        let same = update_treatment(&db, t.treatment_id, treatment::TreatmentChanges {
            name: Some(String::new()),
            description: Some(String::new()),
        })
        .await?;
        assert_eq!(same, t);

        assert!(matches!(
            update_treatment(&db, 404, treatment::TreatmentChanges::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }
}
