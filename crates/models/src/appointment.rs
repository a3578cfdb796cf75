use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{appointment_treatment, doctor, errors, patient, timestamp, treatment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Appointments")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "AppointmentID")]
    #[serde(rename = "AppointmentID")]
    pub appointment_id: i32,
    #[sea_orm(column_name = "PatientID")]
    #[serde(rename = "PatientID")]
    pub patient_id: i32,
    #[sea_orm(column_name = "DoctorID")]
    #[serde(rename = "DoctorID")]
    pub doctor_id: Option<i32>,
    #[sea_orm(column_name = "AppointmentDate")]
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: DateTime,
    #[sea_orm(column_name = "Reason")]
    #[serde(rename = "Reason")]
    pub reason: Option<String>,
    #[sea_orm(column_name = "CreatedAt")]
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "UpdatedAt")]
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Patient, Doctor, AppointmentTreatment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Patient => Entity::belongs_to(patient::Entity).from(Column::PatientId).to(patient::Column::PatientId).into(),
            Relation::Doctor => Entity::belongs_to(doctor::Entity).from(Column::DoctorId).to(doctor::Column::DoctorId).into(),
            Relation::AppointmentTreatment => Entity::has_many(appointment_treatment::Entity).into(),
        }
    }
}

impl Related<patient::Entity> for Entity {
    fn to() -> RelationDef { Relation::Patient.def() }
}

impl Related<doctor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Doctor.def() }
}

impl Related<treatment::Entity> for Entity {
    fn to() -> RelationDef { appointment_treatment::Relation::Treatment.def() }
    fn via() -> Option<RelationDef> { Some(appointment_treatment::Relation::Appointment.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewAppointment {
    #[serde(rename = "PatientID")]
    pub patient_id: i32,
    #[serde(rename = "DoctorID", default)]
    pub doctor_id: Option<i32>,
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: DateTime,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AppointmentChanges {
    #[serde(rename = "PatientID", default)]
    pub patient_id: Option<i32>,
    #[serde(rename = "DoctorID", default)]
    pub doctor_id: Option<i32>,
    #[serde(rename = "AppointmentDate", default)]
    pub appointment_date: Option<DateTime>,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
}

pub fn validate(input: &NewAppointment) -> Result<(), errors::ModelError> {
    if let Some(reason) = &input.reason {
        errors::max_len("Reason", reason, 255)?;
    }
    Ok(())
}

/// Insert an appointment. A `PatientID`/`DoctorID` with no matching row surfaces as
/// [`errors::ModelError::Constraint`] from the foreign key.
pub async fn create<C: ConnectionTrait>(db: &C, input: NewAppointment) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let now = timestamp::now();
    let am = ActiveModel {
        patient_id: Set(input.patient_id),
        doctor_id: Set(input.doctor_id),
        appointment_date: Set(input.appointment_date),
        reason: Set(input.reason),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
