use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_attribute_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_attribute::Entity")]
    GroupAttribute,
}

impl Related<super::group_attribute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupAttribute.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
