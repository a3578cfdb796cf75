use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{appointment, errors, timestamp};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Patients")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "PatientID")]
    #[serde(rename = "PatientID")]
    pub patient_id: i32,
    #[sea_orm(column_name = "FullName")]
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[sea_orm(column_name = "DateOfBirth")]
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: Date,
    #[sea_orm(column_name = "PhoneNumber", unique)]
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[sea_orm(column_name = "Email", unique)]
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[sea_orm(column_name = "Gender")]
    #[serde(rename = "Gender")]
    pub gender: String,
    #[sea_orm(column_name = "CreatedAt")]
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "UpdatedAt")]
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Appointment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::has_many(appointment::Entity).into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /patients/`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewPatient {
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: Date,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: String,
}

/// Body of `PUT /patients/{id}`; every field optional.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PatientChanges {
    #[serde(rename = "FullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "DateOfBirth", default)]
    pub date_of_birth: Option<Date>,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
}

pub fn validate(input: &NewPatient) -> Result<(), errors::ModelError> {
    errors::require("FullName", &input.full_name)?;
    errors::max_len("FullName", &input.full_name, 100)?;
    errors::require("PhoneNumber", &input.phone_number)?;
    errors::max_len("PhoneNumber", &input.phone_number, 15)?;
    errors::require("Gender", &input.gender)?;
    errors::max_len("Gender", &input.gender, 20)?;
    if let Some(email) = &input.email {
        errors::max_len("Email", email, 100)?;
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewPatient) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let now = timestamp::now();
    let am = ActiveModel {
        full_name: Set(input.full_name),
        date_of_birth: Set(input.date_of_birth),
        phone_number: Set(input.phone_number),
        email: Set(input.email),
        gender: Set(input.gender),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
