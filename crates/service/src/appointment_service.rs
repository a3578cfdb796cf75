//! Appointment records, treatment linking, and the two read views built on them.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use common::{pagination::Pagination, types::Message};
use models::{appointment, appointment_treatment, doctor, errors, patient, timestamp, treatment};
use crate::{errors::ServiceError, update::provided};

const ENTITY: &str = "Appointment";

/// Appointment as returned by the API: the record plus its linked treatments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentWithTreatments {
    #[serde(flatten)]
    pub appointment: appointment::Model,
    pub treatments: Vec<treatment::Model>,
}

/// Row of the upcoming-appointments view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    #[serde(rename = "AppointmentID")]
    pub appointment_id: i32,
    #[serde(rename = "Patient")]
    pub patient: String,
    #[serde(rename = "Doctor")]
    pub doctor: Option<String>,
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: NaiveDateTime,
    #[serde(rename = "Reason")]
    pub reason: Option<String>,
}

/// One (appointment, treatment) pair with display names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentTreatmentDetail {
    #[serde(rename = "AppointmentID")]
    pub appointment_id: i32,
    #[serde(rename = "Patient")]
    pub patient: String,
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: NaiveDateTime,
}

async fn find_appointment<C: sea_orm::ConnectionTrait>(db: &C, id: i32) -> Result<appointment::Model, ServiceError> {
    appointment::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(ENTITY))
}

async fn with_treatments(db: &DatabaseConnection, appointment: appointment::Model) -> Result<AppointmentWithTreatments, ServiceError> {
    let treatments = appointment.find_related(treatment::Entity).all(db).await?;
    Ok(AppointmentWithTreatments { appointment, treatments })
}

#[instrument(skip_all, fields(patient_id = input.patient_id))]
pub async fn create_appointment(db: &DatabaseConnection, input: appointment::NewAppointment) -> Result<AppointmentWithTreatments, ServiceError> {
    let appointment = appointment::create(db, input).await?;
    Ok(AppointmentWithTreatments { appointment, treatments: vec![] })
}

pub async fn get_appointment(db: &DatabaseConnection, id: i32) -> Result<AppointmentWithTreatments, ServiceError> {
    let found = find_appointment(db, id).await?;
    with_treatments(db, found).await
}

/// List appointments in insertion order, each with its treatments.
pub async fn list_appointments(db: &DatabaseConnection, page: Pagination) -> Result<Vec<AppointmentWithTreatments>, ServiceError> {
    let rows = appointment::Entity::find()
        .order_by_asc(appointment::Column::AppointmentId)
        .offset(page.sql_offset())
        .limit(page.sql_limit())
        .all(db)
        .await?;
    let treatments = rows
        .load_many_to_many(treatment::Entity, appointment_treatment::Entity, db)
        .await?;
    Ok(rows
        .into_iter()
        .zip(treatments)
        .map(|(appointment, treatments)| AppointmentWithTreatments { appointment, treatments })
        .collect())
}

/// `DoctorID` of `0`/`null` is skipped like any other empty value, so an update cannot unassign a doctor.
#[instrument(skip(db, changes))]
pub async fn update_appointment(db: &DatabaseConnection, id: i32, changes: appointment::AppointmentChanges) -> Result<AppointmentWithTreatments, ServiceError> {
    let mut am: appointment::ActiveModel = find_appointment(db, id).await?.into();
    if let Some(v) = provided(changes.patient_id) { am.patient_id = Set(v); }
    if let Some(v) = provided(changes.doctor_id) { am.doctor_id = Set(Some(v)); }
    if let Some(v) = provided(changes.appointment_date) { am.appointment_date = Set(v); }
    if let Some(v) = provided(changes.reason) {
        errors::max_len("Reason", &v, 255)?;
        am.reason = Set(Some(v));
    }
    am.updated_at = Set(timestamp::now());
    let updated = am.update(db).await?;
    with_treatments(db, updated).await
}

pub async fn delete_appointment(db: &DatabaseConnection, id: i32) -> Result<Message, ServiceError> {
    find_appointment(db, id).await?;
    appointment::Entity::delete_by_id(id).exec(db).await?;
    Ok(Message::new(format!("{ENTITY} deleted successfully")))
}

/// Link existing treatments to an appointment inside one transaction.
///
/// Ids with no treatment row, including ones outside the key range, are dropped without error and
/// pairs that are already linked are left as they are. Returns the ids that exist.
#[instrument(skip(db))]
pub async fn link_treatments(db: &DatabaseConnection, appointment_id: i32, treatment_ids: &[i64]) -> Result<Vec<i32>, ServiceError> {
    let txn = db.begin().await?;
    find_appointment(&txn, appointment_id).await?;

    let candidates: Vec<i32> = treatment_ids.iter().filter_map(|&id| i32::try_from(id).ok()).collect();
    let valid: Vec<i32> = if candidates.is_empty() {
        vec![]
    } else {
        treatment::Entity::find()
            .select_only()
            .column(treatment::Column::TreatmentId)
            .filter(treatment::Column::TreatmentId.is_in(candidates))
            .order_by_asc(treatment::Column::TreatmentId)
            .into_tuple::<i32>()
            .all(&txn)
            .await?
    };

    if !valid.is_empty() {
        let rows = valid.iter().map(|&treatment_id| appointment_treatment::ActiveModel {
            appointment_id: Set(appointment_id),
            treatment_id: Set(treatment_id),
        });
        appointment_treatment::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([
                    appointment_treatment::Column::AppointmentId,
                    appointment_treatment::Column::TreatmentId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }
    txn.commit().await?;

    info!(requested = treatment_ids.len(), linked = valid.len(), "treatments linked");
    Ok(valid)
}

pub async fn list_treatments_for_appointment(db: &DatabaseConnection, appointment_id: i32) -> Result<Vec<treatment::Model>, ServiceError> {
    let found = find_appointment(db, appointment_id).await?;
    Ok(found.find_related(treatment::Entity).all(db).await?)
}

/// Appointments at or after `now`, earliest first, with patient and doctor names.
pub async fn upcoming_appointments(db: &DatabaseConnection, now: NaiveDateTime) -> Result<Vec<UpcomingAppointment>, ServiceError> {
    let rows = appointment::Entity::find()
        .filter(appointment::Column::AppointmentDate.gte(now))
        .find_also_related(patient::Entity)
        .order_by_asc(appointment::Column::AppointmentDate)
        .order_by_asc(appointment::Column::AppointmentId)
        .all(db)
        .await?;

    let doctor_ids: Vec<i32> = rows.iter().filter_map(|(a, _)| a.doctor_id).collect();
    let doctors: HashMap<i32, String> = if doctor_ids.is_empty() {
        HashMap::new()
    } else {
        doctor::Entity::find()
            .filter(doctor::Column::DoctorId.is_in(doctor_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|d| (d.doctor_id, d.full_name))
            .collect()
    };

    Ok(rows
        .into_iter()
        .map(|(a, p)| UpcomingAppointment {
            appointment_id: a.appointment_id,
            patient: p.map(|p| p.full_name).unwrap_or_default(),
            doctor: a.doctor_id.and_then(|id| doctors.get(&id).cloned()),
            appointment_date: a.appointment_date,
            reason: a.reason,
        })
        .collect())
}

/// One row per treatment linked to the appointment.
pub async fn treatment_details(db: &DatabaseConnection, appointment_id: i32) -> Result<Vec<AppointmentTreatmentDetail>, ServiceError> {
    let found = find_appointment(db, appointment_id).await?;
    let patient_name = found
        .find_related(patient::Entity)
        .one(db)
        .await?
        .map(|p| p.full_name)
        .unwrap_or_default();
    let treatments = found
        .find_related(treatment::Entity)
        .order_by_asc(treatment::Column::TreatmentId)
        .all(db)
        .await?;
    Ok(treatments
        .into_iter()
        .map(|t| AppointmentTreatmentDetail {
            appointment_id: found.appointment_id,
            patient: patient_name.clone(),
            treatment: t.name,
            appointment_date: found.appointment_date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use crate::test_support::{get_db, new_doctor, new_patient, new_treatment, tick};
    use crate::{doctor_service, patient_service, treatment_service};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2031, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    async fn booking(db: &DatabaseConnection) -> Result<(patient::Model, doctor::Model, AppointmentWithTreatments), anyhow::Error> {
        let p = patient_service::create_patient(db, new_patient("555-4000")).await?;
        let d = doctor_service::create_doctor(db, new_doctor("Dr. Strange")).await?;
        let a = create_appointment(db, appointment::NewAppointment {
            patient_id: p.patient_id,
            doctor_id: Some(d.doctor_id),
            appointment_date: at(10, 9),
            reason: Some("follow-up".into()),
        })
        .await?;
        Ok((p, d, a))
    }

    #[tokio::test]
    async fn appointment_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_p, _d, a) = booking(&db).await?;
        assert!(a.treatments.is_empty());
        assert_eq!(a.appointment.created_at, a.appointment.updated_at);

        let id = a.appointment.appointment_id;
        assert_eq!(get_appointment(&db, id).await?, a);

        tick().await;
        let updated = update_appointment(&db, id, appointment::AppointmentChanges {
            reason: Some("annual".into()),
            doctor_id: Some(0),
            patient_id: Some(0),
            appointment_date: None,
        })
        .await?;
        assert_eq!(updated.appointment.reason.as_deref(), Some("annual"));
        assert_eq!(updated.appointment.doctor_id, a.appointment.doctor_id);
        assert_eq!(updated.appointment.patient_id, a.appointment.patient_id);
        assert!(updated.appointment.updated_at > a.appointment.updated_at);

        delete_appointment(&db, id).await?;
        assert!(matches!(get_appointment(&db, id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn link_drops_unknown_treatment_ids() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_p, _d, a) = booking(&db).await?;
        let id = a.appointment.appointment_id;
        let t = treatment_service::create_treatment(&db, new_treatment("Cleaning")).await?;

        let linked = link_treatments(&db, id, &[i64::from(t.treatment_id), 999, 5_000_000_000, i64::MIN]).await?;
        assert_eq!(linked, vec![t.treatment_id]);

        let treatments = list_treatments_for_appointment(&db, id).await?;
        assert_eq!(treatments, vec![t.clone()]);
        assert_eq!(get_appointment(&db, id).await?.treatments, vec![t]);
        Ok(())
    }

    #[tokio::test]
    async fn relinking_is_a_no_op() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (_p, _d, a) = booking(&db).await?;
        let id = a.appointment.appointment_id;
        let t1 = treatment_service::create_treatment(&db, new_treatment("Cleaning")).await?;
        let t2 = treatment_service::create_treatment(&db, new_treatment("Whitening")).await?;

        link_treatments(&db, id, &[i64::from(t1.treatment_id)]).await?;
        link_treatments(&db, id, &[i64::from(t1.treatment_id), i64::from(t2.treatment_id)]).await?;
        link_treatments(&db, id, &[]).await?;

        assert_eq!(list_treatments_for_appointment(&db, id).await?.len(), 2);
        assert_eq!(appointment_treatment::Entity::find().all(&db).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn link_to_missing_appointment_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = treatment_service::create_treatment(&db, new_treatment("Cleaning")).await?;
        assert!(matches!(link_treatments(&db, 77, &[i64::from(t.treatment_id)]).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(list_treatments_for_appointment(&db, 77).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_loads_treatments_per_appointment() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (p, _d, first) = booking(&db).await?;
        let second = create_appointment(&db, appointment::NewAppointment {
            patient_id: p.patient_id,
            doctor_id: None,
            appointment_date: at(11, 9),
            reason: None,
        })
        .await?;
        let t = treatment_service::create_treatment(&db, new_treatment("X-Ray")).await?;
        link_treatments(&db, second.appointment.appointment_id, &[i64::from(t.treatment_id)]).await?;

        let all = list_appointments(&db, Pagination::default()).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].appointment.appointment_id, first.appointment.appointment_id);
        assert!(all[0].treatments.is_empty());
        assert_eq!(all[1].treatments, vec![t]);
        Ok(())
    }

    #[tokio::test]
    async fn patient_and_doctor_deletes_follow_foreign_keys() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (p, d, a) = booking(&db).await?;
        let id = a.appointment.appointment_id;

        doctor_service::delete_doctor(&db, d.doctor_id).await?;
        assert_eq!(get_appointment(&db, id).await?.appointment.doctor_id, None);

        patient_service::delete_patient(&db, p.patient_id).await?;
        assert!(matches!(get_appointment(&db, id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn upcoming_view_filters_past_and_names_people() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (p, d, a) = booking(&db).await?;
        let now = a.appointment.appointment_date - Duration::hours(1);
        create_appointment(&db, appointment::NewAppointment {
            patient_id: p.patient_id,
            doctor_id: None,
            appointment_date: now - Duration::days(3),
            reason: None,
        })
        .await?;
        let later = create_appointment(&db, appointment::NewAppointment {
            patient_id: p.patient_id,
            doctor_id: None,
            appointment_date: at(20, 8),
            reason: None,
        })
        .await?;

        let upcoming = upcoming_appointments(&db, now).await?;
        assert_eq!(
            upcoming.iter().map(|u| u.appointment_id).collect::<Vec<_>>(),
            vec![a.appointment.appointment_id, later.appointment.appointment_id]
        );
        assert_eq!(upcoming[0].patient, p.full_name);
        assert_eq!(upcoming[0].doctor.as_deref(), Some(d.full_name.as_str()));
        assert_eq!(upcoming[1].doctor, None);
        Ok(())
    }

    #[tokio::test]
    async fn treatment_details_one_row_per_link() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (p, _d, a) = booking(&db).await?;
        let id = a.appointment.appointment_id;
        let t1 = treatment_service::create_treatment(&db, new_treatment("Cleaning")).await?;
        let t2 = treatment_service::create_treatment(&db, new_treatment("Filling")).await?;
        link_treatments(&db, id, &[i64::from(t1.treatment_id), i64::from(t2.treatment_id)]).await?;

        let rows = treatment_details(&db, id).await?;
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.patient == p.full_name && r.appointment_id == id));
        assert_eq!(rows[0].treatment, "Cleaning");
        assert_eq!(rows[1].treatment, "Filling");
        assert!(matches!(treatment_details(&db, 1234).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
