//! Create `Doctors` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(integer(Doctors::DoctorId).primary_key().auto_increment())
                    .col(string_len(Doctors::FullName, 100).not_null())
                    .col(string_len(Doctors::Specialty, 100).not_null())
                    .col(
                        ColumnDef::new(Doctors::PhoneNumber)
                            .string_len(15)
                            .unique_key()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Doctors::Email)
                            .string_len(100)
                            .unique_key()
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Doctors::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Doctors::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Doctors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Doctors {
    #[sea_orm(iden = "Doctors")]
    Table,
    #[sea_orm(iden = "DoctorID")]
    DoctorId,
    #[sea_orm(iden = "FullName")]
    FullName,
    #[sea_orm(iden = "Specialty")]
    Specialty,
    #[sea_orm(iden = "PhoneNumber")]
    PhoneNumber,
    #[sea_orm(iden = "Email")]
    Email,
    #[sea_orm(iden = "CreatedAt")]
    CreatedAt,
    #[sea_orm(iden = "UpdatedAt")]
    UpdatedAt,
}
