//! Tests for ProductService::increase_quantity and ProductService::decrease_quantity methods.

use super::*;

/// Tests increasing the quantity of the first group attribute.
///
/// Expected: Ok with quantity 5 + 3 = 8 and the second group untouched
#[tokio::test]
async fn increases_first_group_attribute() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5, 10])
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.increase_quantity(product_model.id, 3).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(8)
    );
    assert_eq!(
        test.product().get_quantity(group_attributes[1].id).await?,
        Some(10)
    );

    Ok(())
}

/// Expected: Ok with quantity 5 - 5 = 0
#[tokio::test]
async fn decreases_to_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5])
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.decrease_quantity(product_model.id, 5).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(0)
    );

    Ok(())
}

/// Tests decreasing by more than the current quantity.
///
/// Expected: Err with NegativeQuantity and the quantity still 5
#[tokio::test]
async fn fails_to_decrease_below_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5])
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service
        .decrease_quantity(product_model.id, 10)
        .await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::NegativeQuantity {
            current: 5,
            amount: 10
        }))
    ));
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(5)
    );

    Ok(())
}

/// Expected: Err with NegativeAmount for an amount below zero
#[tokio::test]
async fn fails_for_negative_amount() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5])
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service
        .increase_quantity(product_model.id, -3)
        .await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::NegativeAmount(-3)))
    ));
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(5)
    );

    Ok(())
}

/// Expected: Err with NotFound for a missing product
#[tokio::test]
async fn fails_for_nonexistent_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.increase_quantity(1, 3).await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::NotFound(1)))
    ));

    Ok(())
}

/// Expected: Err with NoGroupAttributes for a product without group attributes
#[tokio::test]
async fn fails_without_group_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[])
        .build()
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.decrease_quantity(1, 1).await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::NoGroupAttributes(1)))
    ));

    Ok(())
}

/// Expected: Err with QuantityOverflow when the sum exceeds i32::MAX
#[tokio::test]
async fn fails_on_overflow() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[i32::MAX])
        .build()
        .await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.increase_quantity(1, 1).await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::QuantityOverflow { .. }))
    ));

    Ok(())
}
