//! Create `Appointment_Treatments` junction table.
//!
//! Composite primary key keeps each (appointment, treatment) pair unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentTreatments::Table)
                    .if_not_exists()
                    .col(integer(AppointmentTreatments::AppointmentId).not_null())
                    .col(integer(AppointmentTreatments::TreatmentId).not_null())
                    .primary_key(
                        Index::create()
                            .col(AppointmentTreatments::AppointmentId)
                            .col(AppointmentTreatments::TreatmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_treatment_appointment")
                            .from(AppointmentTreatments::Table, AppointmentTreatments::AppointmentId)
                            .to(Appointments::Table, Appointments::AppointmentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_treatment_treatment")
                            .from(AppointmentTreatments::Table, AppointmentTreatments::TreatmentId)
                            .to(Treatments::Table, Treatments::TreatmentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AppointmentTreatments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AppointmentTreatments {
    #[sea_orm(iden = "Appointment_Treatments")]
    Table,
    #[sea_orm(iden = "AppointmentID")]
    AppointmentId,
    #[sea_orm(iden = "TreatmentID")]
    TreatmentId,
}

#[derive(DeriveIden)]
enum Appointments {
    #[sea_orm(iden = "Appointments")]
    Table,
    #[sea_orm(iden = "AppointmentID")]
    AppointmentId,
}

#[derive(DeriveIden)]
enum Treatments {
    #[sea_orm(iden = "Treatments")]
    Table,
    #[sea_orm(iden = "TreatmentID")]
    TreatmentId,
}
