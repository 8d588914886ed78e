use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::product::{AttributeDto, GroupAttributeDto},
    server::model::db::{
        AttributeModel, GroupAttributeModel, GroupAttributeRecord, GroupAttributeTypeModel,
        ProductModel, ProductRecord,
    },
};

#[cfg(test)]
mod tests;

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a new instance of [`ProductRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a product row without any group attributes
    pub async fn create(&self, name: &str, price: Decimal) -> Result<ProductModel, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            price: ActiveValue::Set(price),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    /// Loads a product with its group attributes, their types and attributes
    pub async fn get_by_id(&self, product_id: i32) -> Result<Option<ProductRecord>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let group_attributes = entity::prelude::GroupAttribute::find()
            .filter(entity::group_attribute::Column::ProductId.eq(product_id))
            .order_by_asc(entity::group_attribute::Column::Id)
            .find_also_related(entity::prelude::GroupAttributeType)
            .all(self.db)
            .await?;

        let attributes = entity::prelude::Attribute::find()
            .inner_join(entity::prelude::GroupAttribute)
            .filter(entity::group_attribute::Column::ProductId.eq(product_id))
            .order_by_asc(entity::attribute::Column::Id)
            .all(self.db)
            .await?;

        Ok(assemble_records(vec![product], group_attributes, attributes)?.pop())
    }

    /// Loads every product ordered by ID, with the same shape as [`Self::get_by_id`]
    ///
    /// Each table is read in full with a single query, so the number of bound parameters
    /// does not grow with the size of the catalog.
    pub async fn get_all(&self) -> Result<Vec<ProductRecord>, DbErr> {
        let products = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        if products.is_empty() {
            return Ok(Vec::new());
        }

        let group_attributes = entity::prelude::GroupAttribute::find()
            .order_by_asc(entity::group_attribute::Column::Id)
            .find_also_related(entity::prelude::GroupAttributeType)
            .all(self.db)
            .await?;

        let attributes = entity::prelude::Attribute::find()
            .order_by_asc(entity::attribute::Column::Id)
            .all(self.db)
            .await?;

        assemble_records(products, group_attributes, attributes)
    }

    pub async fn exists(&self, product_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find_by_id(product_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites the name & price of an existing product
    ///
    /// Returns [`DbErr::RecordNotUpdated`] when no product with the ID exists, which is how a
    /// product deleted since it was read shows up.
    pub async fn update(
        &self,
        product_id: i32,
        name: &str,
        price: Decimal,
    ) -> Result<ProductModel, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::Unchanged(product_id),
            name: ActiveValue::Set(name.to_string()),
            price: ActiveValue::Set(price),
        };

        product.update(self.db).await
    }

    /// Deletes a product along with its group attributes and their attributes
    ///
    /// Returns OK regardless of the product existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, product_id: i32) -> Result<DeleteResult, DbErr> {
        self.delete_group_attributes(product_id).await?;

        entity::prelude::Product::delete_by_id(product_id)
            .exec(self.db)
            .await
    }

    /// Deletes every group attribute owned by a product, attributes first
    pub async fn delete_group_attributes(&self, product_id: i32) -> Result<(), DbErr> {
        let group_attribute_ids: Vec<i32> = entity::prelude::GroupAttribute::find()
            .filter(entity::group_attribute::Column::ProductId.eq(product_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|group| group.id)
            .collect();

        if group_attribute_ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Attribute::delete_many()
            .filter(entity::attribute::Column::GroupAttributeId.is_in(group_attribute_ids))
            .exec(self.db)
            .await?;

        entity::prelude::GroupAttribute::delete_many()
            .filter(entity::group_attribute::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_group_attribute_type(
        &self,
        group_attribute_type_id: i32,
    ) -> Result<Option<GroupAttributeTypeModel>, DbErr> {
        entity::prelude::GroupAttributeType::find_by_id(group_attribute_type_id)
            .one(self.db)
            .await
    }

    pub async fn create_group_attribute_type(
        &self,
        name: &str,
    ) -> Result<GroupAttributeTypeModel, DbErr> {
        let group_attribute_type = entity::group_attribute_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        group_attribute_type.insert(self.db).await
    }

    /// Inserts a group attribute with its quantity information, attributes are not inserted
    pub async fn create_group_attribute(
        &self,
        product_id: i32,
        group_attribute_type_id: i32,
        group_attribute: &GroupAttributeDto,
    ) -> Result<GroupAttributeModel, DbErr> {
        let quantity = &group_attribute.quantity_information;
        let group_attribute = entity::group_attribute::ActiveModel {
            product_id: ActiveValue::Set(product_id),
            group_attribute_type_id: ActiveValue::Set(group_attribute_type_id),
            description: ActiveValue::Set(group_attribute.description.clone()),
            quantity: ActiveValue::Set(quantity.group_attribute_quantity),
            show_price_per_product: ActiveValue::Set(quantity.show_price_per_product),
            is_shown: ActiveValue::Set(quantity.is_shown),
            is_editable: ActiveValue::Set(quantity.is_editable),
            is_verified: ActiveValue::Set(quantity.is_verified),
            verify_value: ActiveValue::Set(quantity.verify_value.clone()),
            display_order: ActiveValue::Set(group_attribute.order),
            ..Default::default()
        };

        group_attribute.insert(self.db).await
    }

    /// Inserts attributes for a group attribute, returned in insertion order
    pub async fn create_attributes(
        &self,
        group_attribute_id: i32,
        attributes: &[AttributeDto],
    ) -> Result<Vec<AttributeModel>, DbErr> {
        let mut created = Vec::with_capacity(attributes.len());

        for attribute in attributes {
            let attribute = entity::attribute::ActiveModel {
                group_attribute_id: ActiveValue::Set(group_attribute_id),
                name: ActiveValue::Set(attribute.name.clone()),
                default_quantity: ActiveValue::Set(attribute.default_quantity),
                max_quantity: ActiveValue::Set(attribute.max_quantity),
                price_impact_amount: ActiveValue::Set(attribute.price_impact_amount),
                is_required: ActiveValue::Set(attribute.is_required),
                negative_attribute_id: ActiveValue::Set(attribute.negative_attribute_id),
                display_order: ActiveValue::Set(attribute.order),
                status_id: ActiveValue::Set(attribute.status_id.clone()),
                url_image: ActiveValue::Set(attribute.url_image.clone()),
                ..Default::default()
            };

            created.push(attribute.insert(self.db).await?);
        }

        Ok(created)
    }

    /// Finds the first group attribute of a product in insertion order
    pub async fn get_first_group_attribute(
        &self,
        product_id: i32,
    ) -> Result<Option<GroupAttributeModel>, DbErr> {
        entity::prelude::GroupAttribute::find()
            .filter(entity::group_attribute::Column::ProductId.eq(product_id))
            .order_by_asc(entity::group_attribute::Column::Id)
            .one(self.db)
            .await
    }

    /// Sets the quantity of a group attribute
    pub async fn update_quantity(
        &self,
        group_attribute: GroupAttributeModel,
        quantity: i32,
    ) -> Result<GroupAttributeModel, DbErr> {
        let mut group_attribute_am = group_attribute.into_active_model();
        group_attribute_am.quantity = ActiveValue::Set(quantity);

        group_attribute_am.update(self.db).await
    }
}

/// Groups loaded rows into product records, preserving the order of `products`
///
/// Group attributes and attributes are expected in ID order. Rows belonging to products
/// that are not in `products` are ignored.
fn assemble_records(
    products: Vec<ProductModel>,
    group_attributes: Vec<(GroupAttributeModel, Option<GroupAttributeTypeModel>)>,
    attributes: Vec<AttributeModel>,
) -> Result<Vec<ProductRecord>, DbErr> {
    let mut attributes_by_group: HashMap<i32, Vec<AttributeModel>> = HashMap::new();
    for attribute in attributes {
        attributes_by_group
            .entry(attribute.group_attribute_id)
            .or_default()
            .push(attribute);
    }

    let mut groups_by_product: HashMap<i32, Vec<GroupAttributeRecord>> = HashMap::new();
    for (group_attribute, group_attribute_type) in group_attributes {
        // Enforced by the foreign key on group_attribute_type_id
        let group_attribute_type = group_attribute_type.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "group attribute type ID {} for group attribute ID {}",
                group_attribute.group_attribute_type_id, group_attribute.id
            ))
        })?;
        let attributes = attributes_by_group
            .remove(&group_attribute.id)
            .unwrap_or_default();

        groups_by_product
            .entry(group_attribute.product_id)
            .or_default()
            .push(GroupAttributeRecord {
                group_attribute,
                group_attribute_type,
                attributes,
            });
    }

    Ok(products
        .into_iter()
        .map(|product| ProductRecord {
            group_attributes: groups_by_product.remove(&product.id).unwrap_or_default(),
            product,
        })
        .collect())
}
