//! Product aggregate fixture utilities.
//!
//! Provides methods inserting products, group attribute types, group attributes and
//! attributes into the test database, plus factory functions for in-memory models.

pub mod factory;

use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AttributeModel, GroupAttributeModel, GroupAttributeTypeModel, ProductModel},
    TestContext,
};

impl TestContext {
    pub fn product(&self) -> ProductFixtures<'_> {
        ProductFixtures { setup: self }
    }
}

pub struct ProductFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ProductFixtures<'a> {
    /// Insert a product without group attributes.
    pub async fn insert_mock_product(
        &self,
        name: &str,
        price: Decimal,
    ) -> Result<ProductModel, TestError> {
        Ok(
            entity::prelude::Product::insert(entity::product::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                price: ActiveValue::Set(price),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_group_attribute_type(
        &self,
        name: &str,
    ) -> Result<GroupAttributeTypeModel, TestError> {
        Ok(entity::prelude::GroupAttributeType::insert(
            entity::group_attribute_type::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a group attribute with the given quantity, creating a type for it.
    pub async fn insert_mock_group_attribute(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> Result<GroupAttributeModel, TestError> {
        let group_attribute_type = self.insert_mock_group_attribute_type("Size").await?;

        Ok(entity::prelude::GroupAttribute::insert(
            entity::group_attribute::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                group_attribute_type_id: ActiveValue::Set(group_attribute_type.id),
                description: ActiveValue::Set("Available sizes".to_string()),
                quantity: ActiveValue::Set(quantity),
                show_price_per_product: ActiveValue::Set(false),
                is_shown: ActiveValue::Set(true),
                is_editable: ActiveValue::Set(true),
                is_verified: ActiveValue::Set(false),
                verify_value: ActiveValue::Set(None),
                display_order: ActiveValue::Set(0),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_attribute(
        &self,
        group_attribute_id: i32,
        name: &str,
    ) -> Result<AttributeModel, TestError> {
        Ok(
            entity::prelude::Attribute::insert(entity::attribute::ActiveModel {
                group_attribute_id: ActiveValue::Set(group_attribute_id),
                name: ActiveValue::Set(name.to_string()),
                default_quantity: ActiveValue::Set(1),
                max_quantity: ActiveValue::Set(10),
                price_impact_amount: ActiveValue::Set(Decimal::ZERO),
                is_required: ActiveValue::Set(false),
                negative_attribute_id: ActiveValue::Set(None),
                display_order: ActiveValue::Set(0),
                status_id: ActiveValue::Set(None),
                url_image: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a product with one group attribute per quantity provided, in order.
    pub async fn insert_mock_product_with_groups(
        &self,
        name: &str,
        price: Decimal,
        group_quantities: &[i32],
    ) -> Result<(ProductModel, Vec<GroupAttributeModel>), TestError> {
        let product = self.insert_mock_product(name, price).await?;

        let mut group_attributes = Vec::with_capacity(group_quantities.len());
        for quantity in group_quantities {
            group_attributes.push(self.insert_mock_group_attribute(product.id, *quantity).await?);
        }

        Ok((product, group_attributes))
    }

    /// Read the current quantity of a group attribute from the database.
    pub async fn get_quantity(&self, group_attribute_id: i32) -> Result<Option<i32>, TestError> {
        Ok(
            entity::prelude::GroupAttribute::find_by_id(group_attribute_id)
                .one(&self.setup.db)
                .await?
                .map(|group_attribute| group_attribute.quantity),
        )
    }
}
