//! Junction rows linking appointments to treatments. No columns beyond the two keys.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{appointment, treatment};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Appointment_Treatments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "AppointmentID")]
    #[serde(rename = "AppointmentID")]
    pub appointment_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "TreatmentID")]
    #[serde(rename = "TreatmentID")]
    pub treatment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Appointment, Treatment }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Appointment => Entity::belongs_to(appointment::Entity)
                .from(Column::AppointmentId)
                .to(appointment::Column::AppointmentId)
                .into(),
            Relation::Treatment => Entity::belongs_to(treatment::Entity)
                .from(Column::TreatmentId)
                .to(treatment::Column::TreatmentId)
                .into(),
        }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointment.def() }
}

impl Related<treatment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Treatment.def() }
}

impl ActiveModelBehavior for ActiveModel {}
