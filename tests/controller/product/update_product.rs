//! Tests for the update_product endpoint.

use super::*;

/// Expected: 204 No Content and the new values stored
#[tokio::test]
async fn no_content_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[5])
        .build()
        .await?;

    let mut body = mock_product_dto("Gadget", vec![]);
    body.product_id = 1;
    let result = update_product(State(test.to_app_state()), Ok(Path(1)), Ok(Json(body))).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );
    let resp = get_product(State(test.to_app_state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();
    let product: ProductDto = response_json(resp).await;
    assert_eq!(product.name, "Gadget");
    assert!(product.group_attributes.is_empty());

    Ok(())
}

/// Expected: 400 Bad Request when path and body IDs differ
#[tokio::test]
async fn bad_request_for_id_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[])
        .build()
        .await?;

    let mut body = mock_product_dto("Gadget", vec![]);
    body.product_id = 2;
    let result = update_product(State(test.to_app_state()), Ok(Path(1)), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 404 Not Found for a missing product
#[tokio::test]
async fn not_found_for_nonexistent_product() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;

    let mut body = mock_product_dto("Gadget", vec![]);
    body.product_id = 1;
    let result = update_product(State(test.to_app_state()), Ok(Path(1)), Ok(Json(body))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
