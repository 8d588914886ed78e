//! Tests for the get_product and get_all_products endpoints.

use super::*;

/// Tests the Widget scenario: name and price come back unchanged with no group attributes.
///
/// Expected: 200 OK with the product as body
#[tokio::test]
async fn ok_with_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[])
        .build()
        .await?;

    let result = get_product(State(test.to_app_state()), Ok(Path(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let product: ProductDto = response_json(resp).await;
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, Decimal::new(999, 2));
    assert!(product.group_attributes.is_empty());

    Ok(())
}

/// Expected: 404 Not Found for a missing product
#[tokio::test]
async fn not_found_for_nonexistent_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;

    let result = get_product(State(test.to_app_state()), Ok(Path(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = response_json(resp).await;
    assert_eq!(error.error, "Product ID 1 not found");

    Ok(())
}

/// Expected: 200 OK with every product
#[tokio::test]
async fn ok_with_all_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[1])
        .with_mock_product("Gadget", Decimal::new(500, 2), &[2])
        .build()
        .await?;

    let result = get_all_products(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<ProductDto> = response_json(resp).await;
    assert_eq!(products.len(), 2);

    Ok(())
}

/// Expected: 200 OK with an empty list
#[tokio::test]
async fn ok_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;

    let result = get_all_products(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<ProductDto> = response_json(resp).await;
    assert!(products.is_empty());

    Ok(())
}
