pub use super::attribute::Entity as Attribute;
pub use super::group_attribute::Entity as GroupAttribute;
pub use super::group_attribute_type::Entity as GroupAttributeType;
pub use super::product::Entity as Product;
