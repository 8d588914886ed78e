//! Factory functions for generating mock product database models.
//!
//! These are in-memory model instances that don't require database interaction.

use rust_decimal::Decimal;

use crate::model::{AttributeModel, GroupAttributeModel, GroupAttributeTypeModel, ProductModel};

pub fn mock_product_model(id: i32, name: &str, price: Decimal) -> ProductModel {
    ProductModel {
        id,
        name: name.to_string(),
        price,
    }
}

pub fn mock_group_attribute_type_model(id: i32) -> GroupAttributeTypeModel {
    GroupAttributeTypeModel {
        id,
        name: "Size".to_string(),
    }
}

/// Create a mock group attribute model belonging to `product_id` with the given quantity.
pub fn mock_group_attribute_model(
    id: i32,
    product_id: i32,
    group_attribute_type_id: i32,
    quantity: i32,
) -> GroupAttributeModel {
    GroupAttributeModel {
        id,
        product_id,
        group_attribute_type_id,
        description: "Available sizes".to_string(),
        quantity,
        show_price_per_product: false,
        is_shown: true,
        is_editable: true,
        is_verified: false,
        verify_value: None,
        display_order: 0,
    }
}

pub fn mock_attribute_model(id: i32, group_attribute_id: i32, name: &str) -> AttributeModel {
    AttributeModel {
        id,
        group_attribute_id,
        name: name.to_string(),
        default_quantity: 1,
        max_quantity: 10,
        price_impact_amount: Decimal::ZERO,
        is_required: false,
        negative_attribute_id: None,
        display_order: 0,
        status_id: None,
        url_image: None,
    }
}
