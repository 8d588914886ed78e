//! Database model type aliases and aggregate records.
//!
//! The aliases point at the SeaORM models generated in the `entity` crate. The record types
//! group those models into the shape of a product aggregate as it is loaded from the store,
//! and convert into the API DTOs returned to clients.

use crate::model::product::{
    AttributeDto, GroupAttributeDto, GroupAttributeTypeDto, ProductDto, QuantityInformationDto,
};

/// Type alias for the product database model.
///
/// # Fields (from `entity::product::Model`)
/// - `id` - Primary key
/// - `name` - Product name, never blank
/// - `price` - Product price
pub type ProductModel = entity::product::Model;

/// Type alias for the group attribute database model.
///
/// Holds the group's quantity information inline (`quantity`, display flags, `verify_value`).
pub type GroupAttributeModel = entity::group_attribute::Model;

/// Type alias for the group attribute type database model.
pub type GroupAttributeTypeModel = entity::group_attribute_type::Model;

/// Type alias for the attribute database model.
pub type AttributeModel = entity::attribute::Model;

/// A group attribute with its type and attributes, attributes ordered by ID
#[derive(Clone, Debug)]
pub struct GroupAttributeRecord {
    pub group_attribute: GroupAttributeModel,
    pub group_attribute_type: GroupAttributeTypeModel,
    pub attributes: Vec<AttributeModel>,
}

/// A product with its group attributes ordered by ID
#[derive(Clone, Debug)]
pub struct ProductRecord {
    pub product: ProductModel,
    pub group_attributes: Vec<GroupAttributeRecord>,
}

impl From<ProductRecord> for ProductDto {
    fn from(record: ProductRecord) -> Self {
        Self {
            product_id: record.product.id,
            name: record.product.name,
            price: record.product.price,
            group_attributes: record
                .group_attributes
                .into_iter()
                .map(GroupAttributeDto::from)
                .collect(),
        }
    }
}

impl From<GroupAttributeRecord> for GroupAttributeDto {
    fn from(record: GroupAttributeRecord) -> Self {
        let group = record.group_attribute;

        Self {
            group_attribute_id: group.id,
            group_attribute_type: GroupAttributeTypeDto {
                group_attribute_type_id: record.group_attribute_type.id,
                name: record.group_attribute_type.name,
            },
            description: group.description,
            quantity_information: QuantityInformationDto {
                group_attribute_quantity: group.quantity,
                show_price_per_product: group.show_price_per_product,
                is_shown: group.is_shown,
                is_editable: group.is_editable,
                is_verified: group.is_verified,
                verify_value: group.verify_value,
            },
            attributes: record
                .attributes
                .into_iter()
                .map(AttributeDto::from)
                .collect(),
            order: group.display_order,
        }
    }
}

impl From<AttributeModel> for AttributeDto {
    fn from(attribute: AttributeModel) -> Self {
        Self {
            attribute_id: attribute.id,
            name: attribute.name,
            default_quantity: attribute.default_quantity,
            max_quantity: attribute.max_quantity,
            price_impact_amount: attribute.price_impact_amount,
            is_required: attribute.is_required,
            negative_attribute_id: attribute.negative_attribute_id,
            order: attribute.display_order,
            status_id: attribute.status_id,
            url_image: attribute.url_image,
        }
    }
}
