//! Create `Patients` table.
//!
//! Phone number is mandatory and unique; email is optional but unique when present.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(integer(Patients::PatientId).primary_key().auto_increment())
                    .col(string_len(Patients::FullName, 100).not_null())
                    .col(date(Patients::DateOfBirth).not_null())
                    .col(string_len(Patients::PhoneNumber, 15).unique_key().not_null())
                    .col(
                        ColumnDef::new(Patients::Email)
                            .string_len(100)
                            .unique_key()
                            .null(),
                    )
                    .col(string_len(Patients::Gender, 20).not_null())
                    .col(timestamp_with_time_zone(Patients::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Patients::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Patients::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Patients {
    #[sea_orm(iden = "Patients")]
    Table,
    #[sea_orm(iden = "PatientID")]
    PatientId,
    #[sea_orm(iden = "FullName")]
    FullName,
    #[sea_orm(iden = "DateOfBirth")]
    DateOfBirth,
    #[sea_orm(iden = "PhoneNumber")]
    PhoneNumber,
    #[sea_orm(iden = "Email")]
    Email,
    #[sea_orm(iden = "Gender")]
    Gender,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
    #[sea_orm(iden = "UpdatedAt")]
    UpdatedAt,
}
