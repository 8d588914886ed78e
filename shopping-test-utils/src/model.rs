//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main shopping crate to keep fixture signatures readable.

pub type ProductModel = entity::product::Model;

pub type GroupAttributeModel = entity::group_attribute::Model;

pub type GroupAttributeTypeModel = entity::group_attribute_type::Model;

pub type AttributeModel = entity::attribute::Model;
