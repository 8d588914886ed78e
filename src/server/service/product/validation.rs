use crate::{model::product::ProductDto, server::error::product::ProductError};

/// Checks the required fields of a product body before any store access.
///
/// # Returns
/// - `Ok(())` - Body is complete
/// - `Err(ProductError::Validation)` - A required field is blank, a type reference is invalid
///   or a quantity is negative
pub fn validate_product(product: &ProductDto) -> Result<(), ProductError> {
    if product.name.trim().is_empty() {
        return Err(ProductError::Validation(
            "product name is required".to_string(),
        ));
    }

    for (index, group_attribute) in product.group_attributes.iter().enumerate() {
        if group_attribute.description.trim().is_empty() {
            return Err(ProductError::Validation(format!(
                "description of group attribute {} is required",
                index
            )));
        }

        let group_attribute_type = &group_attribute.group_attribute_type;
        if group_attribute_type.group_attribute_type_id < 0 {
            return Err(ProductError::Validation(format!(
                "group attribute type ID {} of group attribute {} is invalid",
                group_attribute_type.group_attribute_type_id, index
            )));
        }
        if group_attribute_type.group_attribute_type_id == 0
            && group_attribute_type.name.trim().is_empty()
        {
            return Err(ProductError::Validation(format!(
                "group attribute type of group attribute {} requires an ID or a name",
                index
            )));
        }

        let quantity = group_attribute.quantity_information.group_attribute_quantity;
        if quantity < 0 {
            return Err(ProductError::Validation(format!(
                "quantity of group attribute {} must not be negative, got {}",
                index, quantity
            )));
        }

        if let Some(position) = group_attribute
            .attributes
            .iter()
            .position(|attribute| attribute.name.trim().is_empty())
        {
            return Err(ProductError::Validation(format!(
                "name of attribute {} in group attribute {} is required",
                position, index
            )));
        }
    }

    Ok(())
}
