use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupAttributeType::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupAttributeType::Id))
                    .col(string(GroupAttributeType::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupAttributeType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupAttributeType {
    Table,
    Id,
    Name,
}
