#![cfg(test)]
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use models::db::{connect_with_config, migrate, DatabaseConfig};
use models::{doctor, patient, treatment};

/// Fresh in-memory database with the full schema; each test gets its own.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 1, ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}

pub fn new_patient(phone: &str) -> patient::NewPatient {
    patient::NewPatient {
        full_name: format!("Patient {phone}"),
        date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 14).unwrap(),
        phone_number: phone.to_string(),
        email: None,
        gender: "other".into(),
    }
}

pub fn new_doctor(name: &str) -> doctor::NewDoctor {
    doctor::NewDoctor { full_name: name.to_string(), specialty: "General Practice".into(), phone_number: None, email: None }
}

pub fn new_treatment(name: &str) -> treatment::NewTreatment {
    treatment::NewTreatment { name: name.to_string(), description: Some(format!("{name} procedure")) }
}

/// Make the next `now()` observably later than the last one.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
