use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use super::setup_test_db;
use crate::errors::ModelError;
use crate::{appointment, appointment_treatment, doctor, patient, treatment};

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(patient::Model, doctor::Model, appointment::Model)> {
    let p = patient::create(db, patient::NewPatient {
        full_name: "Grace Hopper".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 2).unwrap(),
        phone_number: "555-0200".into(),
        email: None,
        gender: "female".into(),
    })
    .await?;
    let d = doctor::create(db, doctor::NewDoctor {
        full_name: "Dr. House".into(),
        specialty: "Diagnostics".into(),
        phone_number: Some("555-0300".into()),
        email: None,
    })
    .await?;
    let a = appointment::create(db, appointment::NewAppointment {
        patient_id: p.patient_id,
        doctor_id: Some(d.doctor_id),
        appointment_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap().and_hms_opt(9, 30, 0).unwrap(),
        reason: Some("checkup".into()),
    })
    .await?;
    Ok((p, d, a))
}

#[tokio::test]
async fn deleting_patient_cascades_to_appointments() -> Result<()> {
    let db = setup_test_db().await?;
    let (p, _d, a) = seed(&db).await?;

    p.delete(&db).await?;
    assert!(appointment::Entity::find_by_id(a.appointment_id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn deleting_doctor_clears_doctor_id() -> Result<()> {
    let db = setup_test_db().await?;
    let (_p, d, a) = seed(&db).await?;

    d.delete(&db).await?;
    let kept = appointment::Entity::find_by_id(a.appointment_id).one(&db).await?.unwrap();
    assert_eq!(kept.doctor_id, None);
    Ok(())
}

#[tokio::test]
async fn junction_rows_follow_both_sides() -> Result<()> {
    let db = setup_test_db().await?;
    let (_p, _d, a) = seed(&db).await?;
    let t1 = treatment::create(&db, treatment::NewTreatment { name: "Cleaning".into(), description: None }).await?;
    let t2 = treatment::create(&db, treatment::NewTreatment { name: "Filling".into(), description: None }).await?;

    for t in [&t1, &t2] {
        appointment_treatment::ActiveModel {
            appointment_id: Set(a.appointment_id),
            treatment_id: Set(t.treatment_id),
        }
        .insert(&db)
        .await?;
    }
    let linked = a.find_related(treatment::Entity).all(&db).await?;
    assert_eq!(linked.len(), 2);

    t1.delete(&db).await?;
    assert_eq!(appointment_treatment::Entity::find().all(&db).await?.len(), 1);

    a.delete(&db).await?;
    assert!(appointment_treatment::Entity::find().all(&db).await?.is_empty());
    assert!(treatment::Entity::find_by_id(t2.treatment_id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn appointment_for_missing_patient_is_rejected_by_foreign_key() -> Result<()> {
    let db = setup_test_db().await?;

    let err = appointment::create(&db, appointment::NewAppointment {
        patient_id: 4242,
        doctor_id: None,
        appointment_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
        reason: None,
    })
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Constraint(_)), "unexpected: {err:?}");
    Ok(())
}
