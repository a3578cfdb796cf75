use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Treatments::Table)
                    .if_not_exists()
                    .col(integer(Treatments::TreatmentId).primary_key().auto_increment())
                    .col(string_len(Treatments::Name, 100).not_null())
                    .col(ColumnDef::new(Treatments::Description).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Treatments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Treatments {
    #[sea_orm(iden = "Treatments")]
    Table,
    #[sea_orm(iden = "TreatmentID")]
    TreatmentId,
    #[sea_orm(iden = "Name")]
    Name,
    #[sea_orm(iden = "Description")]
    Description,
}
