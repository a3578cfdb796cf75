use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Appointments: lookups by patient, by doctor, and upcoming-by-date
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_patient")
                    .table(Appointments::Table)
                    .col(Appointments::PatientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_doctor")
                    .table(Appointments::Table)
                    .col(Appointments::DoctorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_date")
                    .table(Appointments::Table)
                    .col(Appointments::AppointmentDate)
                    .to_owned(),
            )
            .await?;

        // Junction: reverse lookup from treatment side
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_treatment_treatment")
                    .table(AppointmentTreatments::Table)
                    .col(AppointmentTreatments::TreatmentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_appointment_treatment_treatment").table(AppointmentTreatments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_date").table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_doctor").table(Appointments::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_patient").table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    #[sea_orm(iden = "Appointments")]
    Table,
    #[sea_orm(iden = "PatientID")]
    PatientId,
    #[sea_orm(iden = "DoctorID")]
    DoctorId,
    #[sea_orm(iden = "AppointmentDate")]
    AppointmentDate,
}

#[derive(DeriveIden)]
enum AppointmentTreatments {
    #[sea_orm(iden = "Appointment_Treatments")]
    Table,
    #[sea_orm(iden = "TreatmentID")]
    TreatmentId,
}
