//! Tests for the increase_quantity and decrease_quantity endpoints.

use super::*;

/// Tests increasing quantity 5 by 3.
///
/// Expected: 204 No Content with quantity 8
#[tokio::test]
async fn no_content_on_increase() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5])
        .await?;

    let result = increase_quantity(
        State(test.to_app_state()),
        Ok(Path(product_model.id)),
        Ok(Json(3)),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(8)
    );

    Ok(())
}

/// Tests decreasing quantity 5 by 10.
///
/// Expected: 400 Bad Request with quantity still 5
#[tokio::test]
async fn bad_request_when_decrease_goes_negative() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let (product_model, group_attributes) = test
        .product()
        .insert_mock_product_with_groups("Widget", Decimal::new(999, 2), &[5])
        .await?;

    let result = decrease_quantity(
        State(test.to_app_state()),
        Ok(Path(product_model.id)),
        Ok(Json(10)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = response_json(resp).await;
    assert_eq!(
        error.error,
        "Cannot reduce quantity 5 by 10 to a negative number"
    );
    assert_eq!(
        test.product().get_quantity(group_attributes[0].id).await?,
        Some(5)
    );

    Ok(())
}

/// Expected: 400 Bad Request for a negative amount
#[tokio::test]
async fn bad_request_for_negative_amount() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[5])
        .build()
        .await?;

    let result = increase_quantity(State(test.to_app_state()), Ok(Path(1)), Ok(Json(-1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 404 Not Found for a product without group attributes
#[tokio::test]
async fn not_found_without_group_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .with_mock_product("Widget", Decimal::new(999, 2), &[])
        .build()
        .await?;

    let result = decrease_quantity(State(test.to_app_state()), Ok(Path(1)), Ok(Json(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
