use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{appointment, errors, timestamp};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Doctors")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "DoctorID")]
    #[serde(rename = "DoctorID")]
    pub doctor_id: i32,
    #[sea_orm(column_name = "FullName")]
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[sea_orm(column_name = "Specialty")]
    #[serde(rename = "Specialty")]
    pub specialty: String,
    #[sea_orm(column_name = "PhoneNumber", unique)]
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[sea_orm(column_name = "Email", unique)]
    #[serde(rename = "Email")]
    pub email: Option<String>,
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

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewDoctor {
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Specialty")]
    pub specialty: String,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DoctorChanges {
    #[serde(rename = "FullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "Specialty", default)]
    pub specialty: Option<String>,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

pub fn validate(input: &NewDoctor) -> Result<(), errors::ModelError> {
    errors::require("FullName", &input.full_name)?;
    errors::max_len("FullName", &input.full_name, 100)?;
    errors::require("Specialty", &input.specialty)?;
    errors::max_len("Specialty", &input.specialty, 100)?;
    if let Some(phone) = &input.phone_number {
        errors::max_len("PhoneNumber", phone, 15)?;
    }
    if let Some(email) = &input.email {
        errors::max_len("Email", email, 100)?;
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewDoctor) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let now = timestamp::now();
    let am = ActiveModel {
        full_name: Set(input.full_name),
        specialty: Set(input.specialty),
        phone_number: Set(input.phone_number),
        email: Set(input.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
