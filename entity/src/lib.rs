pub mod prelude;

pub mod attribute;
pub mod group_attribute;
pub mod group_attribute_type;
pub mod product;
