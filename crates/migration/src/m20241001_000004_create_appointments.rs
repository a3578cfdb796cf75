//! Create `Appointments` table with FKs to `Patients` and `Doctors`.
//!
//! Removing a patient removes their appointments; removing a doctor only clears `DoctorID`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(integer(Appointments::AppointmentId).primary_key().auto_increment())
                    .col(integer(Appointments::PatientId).not_null())
                    .col(ColumnDef::new(Appointments::DoctorId).integer().null())
                    .col(date_time(Appointments::AppointmentDate).not_null())
                    .col(ColumnDef::new(Appointments::Reason).string_len(255).null())
                    .col(timestamp_with_time_zone(Appointments::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointments::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient")
                            .from(Appointments::Table, Appointments::PatientId)
                            .to(Patients::Table, Patients::PatientId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_doctor")
                            .from(Appointments::Table, Appointments::DoctorId)
                            .to(Doctors::Table, Doctors::DoctorId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    #[sea_orm(iden = "Appointments")]
    Table,
    #[sea_orm(iden = "AppointmentID")]
    AppointmentId,
    #[sea_orm(iden = "PatientID")]
    PatientId,
    #[sea_orm(iden = "DoctorID")]
    DoctorId,
    #[sea_orm(iden = "AppointmentDate")]
    AppointmentDate,
    #[sea_orm(iden = "Reason")]
    Reason,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
    #[sea_orm(iden = "UpdatedAt")]
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Patients {
    #[sea_orm(iden = "Patients")]
    Table,
    #[sea_orm(iden = "PatientID")]
    PatientId,
}

#[derive(DeriveIden)]
enum Doctors {
    #[sea_orm(iden = "Doctors")]
    Table,
    #[sea_orm(iden = "DoctorID")]
    DoctorId,
}
