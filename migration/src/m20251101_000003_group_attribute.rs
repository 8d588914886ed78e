use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_group_attribute_type::GroupAttributeType, m20251101_000002_product::Product,
};

static IDX_GROUP_ATTRIBUTE_PRODUCT_ID: &str = "idx-group_attribute-product_id";
static FK_GROUP_ATTRIBUTE_PRODUCT_ID: &str = "fk-group_attribute-product_id";
static FK_GROUP_ATTRIBUTE_TYPE_ID: &str = "fk-group_attribute-group_attribute_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupAttribute::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupAttribute::Id))
                    .col(integer(GroupAttribute::ProductId))
                    .col(integer(GroupAttribute::GroupAttributeTypeId))
                    .col(string(GroupAttribute::Description))
                    .col(integer(GroupAttribute::Quantity))
                    .col(boolean(GroupAttribute::ShowPricePerProduct))
                    .col(boolean(GroupAttribute::IsShown))
                    .col(boolean(GroupAttribute::IsEditable))
                    .col(boolean(GroupAttribute::IsVerified))
                    .col(string_null(GroupAttribute::VerifyValue))
                    .col(integer(GroupAttribute::DisplayOrder))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_ATTRIBUTE_PRODUCT_ID)
                    .table(GroupAttribute::Table)
                    .col(GroupAttribute::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GROUP_ATTRIBUTE_PRODUCT_ID)
                    .from_tbl(GroupAttribute::Table)
                    .from_col(GroupAttribute::ProductId)
                    .to_tbl(Product::Table)
                    .to_col(Product::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GROUP_ATTRIBUTE_TYPE_ID)
                    .from_tbl(GroupAttribute::Table)
                    .from_col(GroupAttribute::GroupAttributeTypeId)
                    .to_tbl(GroupAttributeType::Table)
                    .to_col(GroupAttributeType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GROUP_ATTRIBUTE_TYPE_ID)
                    .table(GroupAttribute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GROUP_ATTRIBUTE_PRODUCT_ID)
                    .table(GroupAttribute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GROUP_ATTRIBUTE_PRODUCT_ID)
                    .table(GroupAttribute::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GroupAttribute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GroupAttribute {
    Table,
    Id,
    ProductId,
    GroupAttributeTypeId,
    Description,
    Quantity,
    ShowPricePerProduct,
    IsShown,
    IsEditable,
    IsVerified,
    VerifyValue,
    DisplayOrder,
}
