use sea_orm::entity::prelude::*;

/// Attribute group owned by a product.
///
/// The group's quantity information is embedded in the row rather than stored in
/// a table of its own: `quantity`, the display flags, and `verify_value`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_attribute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub group_attribute_type_id: i32,
    pub description: String,
    pub quantity: i32,
    pub show_price_per_product: bool,
    pub is_shown: bool,
    pub is_editable: bool,
    pub is_verified: bool,
    pub verify_value: Option<String>,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::group_attribute_type::Entity",
        from = "Column::GroupAttributeTypeId",
        to = "super::group_attribute_type::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    GroupAttributeType,
    #[sea_orm(has_many = "super::attribute::Entity")]
    Attribute,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::group_attribute_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupAttributeType.def()
    }
}

impl Related<super::attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
