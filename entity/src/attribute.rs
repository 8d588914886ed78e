use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attribute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_attribute_id: i32,
    pub name: String,
    pub default_quantity: i32,
    pub max_quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub price_impact_amount: Decimal,
    pub is_required: bool,
    /// Attribute that cannot be selected together with this one
    pub negative_attribute_id: Option<i32>,
    pub display_order: i32,
    pub status_id: Option<String>,
    pub url_image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group_attribute::Entity",
        from = "Column::GroupAttributeId",
        to = "super::group_attribute::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    GroupAttribute,
}

impl Related<super::group_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupAttribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
