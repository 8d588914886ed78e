//! Tests for ProductService::create_product method.

use super::*;

/// Tests creating a product without group attributes.
///
/// Expected: Ok with assigned ID and the same name and price read back
#[tokio::test]
async fn creates_product_and_reads_it_back() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let created = product_service
        .create_product(mock_product_dto("Widget", vec![]))
        .await;

    assert!(created.is_ok(), "Error: {:?}", created);
    let created = created.unwrap();
    assert!(created.product_id > 0);

    let fetched = product_service.get_product(created.product_id).await;
    assert!(fetched.is_ok(), "Error: {:?}", fetched);
    let fetched = fetched.unwrap();
    assert_eq!(fetched.name, "Widget");
    assert_eq!(fetched.price, Decimal::new(999, 2));
    assert!(fetched.group_attributes.is_empty());

    Ok(())
}

/// Tests creating a product with a full aggregate.
///
/// Expected: Ok and reading the product back yields a record equal to the one returned
#[tokio::test]
async fn created_aggregate_equals_read_aggregate() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let mut colors = mock_group_attribute_dto("Available colors", 2);
    colors.group_attribute_type.name = "Color".to_string();
    colors.attributes = vec![mock_attribute_dto("Red"), mock_attribute_dto("Blue")];
    let product = mock_product_dto(
        "Widget",
        vec![mock_group_attribute_dto("Available sizes", 5), colors],
    );

    let created = product_service.create_product(product).await.unwrap();
    let fetched = product_service
        .get_product(created.product_id)
        .await
        .unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.group_attributes.len(), 2);
    assert_eq!(fetched.group_attributes[0].description, "Available sizes");
    assert_eq!(
        fetched.group_attributes[1].group_attribute_type.name,
        "Color"
    );
    let names: Vec<&str> = fetched.group_attributes[1]
        .attributes
        .iter()
        .map(|attribute| attribute.name.as_str())
        .collect();
    assert_eq!(names, vec!["Red", "Blue"]);

    Ok(())
}

/// Tests that identity fields in the body are ignored.
///
/// Expected: Ok with an ID assigned by the store
#[tokio::test]
async fn ignores_identity_fields_in_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let mut product = mock_product_dto("Widget", vec![mock_group_attribute_dto("Sizes", 1)]);
    product.product_id = 42;
    product.group_attributes[0].group_attribute_id = 17;

    let created = product_service.create_product(product).await.unwrap();

    assert_eq!(created.product_id, 1);
    assert_eq!(created.group_attributes[0].group_attribute_id, 1);

    Ok(())
}

/// Tests referencing an existing group attribute type by ID.
///
/// Expected: Ok with the group linked to the existing type and no new type created
#[tokio::test]
async fn links_existing_group_attribute_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let type_model = test
        .product()
        .insert_mock_group_attribute_type("Material")
        .await?;
    let product_service = ProductService::new(&test.db);

    let mut group_attribute = mock_group_attribute_dto("Available materials", 3);
    group_attribute.group_attribute_type.group_attribute_type_id = type_model.id;
    group_attribute.group_attribute_type.name = String::new();

    let created = product_service
        .create_product(mock_product_dto("Widget", vec![group_attribute]))
        .await
        .unwrap();

    let group_attribute_type = &created.group_attributes[0].group_attribute_type;
    assert_eq!(group_attribute_type.group_attribute_type_id, type_model.id);
    assert_eq!(group_attribute_type.name, "Material");

    Ok(())
}

/// Tests referencing a group attribute type that does not exist.
///
/// Expected: Err with UnknownGroupAttributeType and no product stored
#[tokio::test]
async fn fails_for_unknown_group_attribute_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let mut group_attribute = mock_group_attribute_dto("Available materials", 3);
    group_attribute.group_attribute_type.group_attribute_type_id = 99;

    let result = product_service
        .create_product(mock_product_dto("Widget", vec![group_attribute]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::UnknownGroupAttributeType(99)))
    ));
    let products = product_service.get_all_products().await.unwrap();
    assert!(products.is_empty());

    Ok(())
}

/// Tests creating a product with a blank name.
///
/// Expected: Err with Validation
#[tokio::test]
async fn fails_for_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_product_tables().build().await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service
        .create_product(mock_product_dto("", vec![]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ProductError(ProductError::Validation(_)))
    ));

    Ok(())
}

/// Tests error handling when the database tables are missing.
///
/// Expected: Err with PersistenceError after 3 attempts
#[tokio::test]
async fn fails_after_retries_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let product_service = ProductService::new(&test.db);

    let result = product_service
        .create_product(mock_product_dto("Widget", vec![]))
        .await;

    match result {
        Err(Error::PersistenceError { message, attempts }) => {
            assert_eq!(attempts, 3);
            assert!(message.starts_with("Failed to add product:"));
        }
        other => panic!("expected persistence error, got {:?}", other),
    }

    Ok(())
}
