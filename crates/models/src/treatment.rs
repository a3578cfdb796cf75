use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{appointment, appointment_treatment, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Treatments")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "TreatmentID")]
    #[serde(rename = "TreatmentID")]
    pub treatment_id: i32,
    #[sea_orm(column_name = "Name")]
    #[serde(rename = "Name")]
    pub name: String,
    #[sea_orm(column_name = "Description", column_type = "Text", nullable)]
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { AppointmentTreatment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AppointmentTreatment => Entity::has_many(appointment_treatment::Entity).into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { appointment_treatment::Relation::Appointment.def() }
    fn via() -> Option<RelationDef> { Some(appointment_treatment::Relation::Treatment.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewTreatment {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TreatmentChanges {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

pub fn validate(input: &NewTreatment) -> Result<(), errors::ModelError> {
    errors::require("Name", &input.name)?;
    errors::max_len("Name", &input.name, 100)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewTreatment) -> Result<Model, errors::ModelError> {
    validate(&input)?;
    let am = ActiveModel {
        name: Set(input.name),
        description: Set(input.description),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
