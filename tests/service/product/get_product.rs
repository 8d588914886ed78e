//! Tests for ProductService::get_product and ProductService::get_all_products methods.

use super::*;

/// Expected: Err with NotFound for a missing product
#[tokio::test]
async fn fails_for_nonexistent_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.get_product(1).await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::NotFound(1)))
    ));

    Ok(())
}

/// Expected: Ok with quantity information of every group attribute
#[tokio::test]
async fn returns_quantity_information() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[5, 0])
        .build()
        .await?;
    let product_service = ProductService::new(&test.db);

    let product = product_service.get_product(1).await.unwrap();

    let quantities: Vec<i32> = product
        .group_attributes
        .iter()
        .map(|group| group.quantity_information.group_attribute_quantity)
        .collect();
    assert_eq!(quantities, vec![5, 0]);

    Ok(())
}

/// Expected: Ok with every product ordered by ID
#[tokio::test]
async fn returns_all_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[5])
        .with_mock_product("Gadget", Decimal::new(1999, 2), &[])
        .build()
        .await?;
    let product_service = ProductService::new(&test.db);

    let products = product_service.get_all_products().await.unwrap();

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Widget", "Gadget"]);
    assert_eq!(products[0].group_attributes.len(), 1);

    Ok(())
}

/// Expected: Err with DbErr, reads are not retried
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service.get_all_products().await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
