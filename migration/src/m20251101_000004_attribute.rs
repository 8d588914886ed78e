use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_group_attribute::GroupAttribute;

static IDX_ATTRIBUTE_GROUP_ATTRIBUTE_ID: &str = "idx-attribute-group_attribute_id";
static FK_ATTRIBUTE_GROUP_ATTRIBUTE_ID: &str = "fk-attribute-group_attribute_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attribute::Table)
                    .if_not_exists()
                    .col(pk_auto(Attribute::Id))
                    .col(integer(Attribute::GroupAttributeId))
                    .col(string(Attribute::Name))
                    .col(integer(Attribute::DefaultQuantity))
                    .col(integer(Attribute::MaxQuantity))
                    .col(decimal_len(Attribute::PriceImpactAmount, 19, 4))
                    .col(boolean(Attribute::IsRequired))
                    .col(integer_null(Attribute::NegativeAttributeId))
                    .col(integer(Attribute::DisplayOrder))
                    .col(string_null(Attribute::StatusId))
                    .col(string_null(Attribute::UrlImage))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ATTRIBUTE_GROUP_ATTRIBUTE_ID)
                    .table(Attribute::Table)
                    .col(Attribute::GroupAttributeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ATTRIBUTE_GROUP_ATTRIBUTE_ID)
                    .from_tbl(Attribute::Table)
                    .from_col(Attribute::GroupAttributeId)
                    .to_tbl(GroupAttribute::Table)
                    .to_col(GroupAttribute::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ATTRIBUTE_GROUP_ATTRIBUTE_ID)
                    .table(Attribute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ATTRIBUTE_GROUP_ATTRIBUTE_ID)
                    .table(Attribute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attribute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Attribute {
    Table,
    Id,
    GroupAttributeId,
    Name,
    DefaultQuantity,
    MaxQuantity,
    PriceImpactAmount,
    IsRequired,
    NegativeAttributeId,
    DisplayOrder,
    StatusId,
    UrlImage,
}
