use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product with its attribute groups
///
/// Identity fields default to `0` when omitted from a request body; the store assigns them on
/// creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub product_id: i32,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(default)]
    pub group_attributes: Vec<GroupAttributeDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupAttributeDto {
    #[serde(default)]
    pub group_attribute_id: i32,
    pub group_attribute_type: GroupAttributeTypeDto,
    pub description: String,
    #[serde(default)]
    pub quantity_information: QuantityInformationDto,
    #[serde(default)]
    pub attributes: Vec<AttributeDto>,
    #[serde(default)]
    pub order: i32,
}

/// Type of an attribute group
///
/// References an existing type when `groupAttributeTypeId` is set, otherwise a new type named
/// `name` is created alongside the group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupAttributeTypeDto {
    #[serde(default)]
    pub group_attribute_type_id: i32,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuantityInformationDto {
    /// Current quantity, never negative
    #[serde(default)]
    pub group_attribute_quantity: i32,
    #[serde(default)]
    pub show_price_per_product: bool,
    #[serde(default)]
    pub is_shown: bool,
    #[serde(default)]
    pub is_editable: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub verify_value: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDto {
    #[serde(default)]
    pub attribute_id: i32,
    pub name: String,
    #[serde(default)]
    pub default_quantity: i32,
    #[serde(default)]
    pub max_quantity: i32,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub price_impact_amount: Decimal,
    #[serde(default)]
    pub is_required: bool,
    /// Attribute that cannot be selected together with this one
    #[serde(default)]
    pub negative_attribute_id: Option<i32>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub status_id: Option<String>,
    #[serde(default)]
    pub url_image: Option<String>,
}
