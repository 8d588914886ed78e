use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ProblemDto},
        product::ProductDto,
    },
    server::{
        error::{product::ProductError, Error},
        model::app::AppState,
        service::product::ProductService,
    },
};

pub static PRODUCT_TAG: &str = "shopping";

/// Create a product with its group attributes and attributes
///
/// Identity fields in the body are ignored. Responds with the stored product and a `Location`
/// header pointing at it.
#[utoipa::path(
    post,
    path = "/api/shopping",
    tag = PRODUCT_TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product body", body = ErrorDto),
        (status = 500, description = "Product could not be stored", body = ProblemDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(product) = body.map_err(ProductError::from)?;

    let product_service = ProductService::new(&state.db);
    let created = product_service.create_product(product).await?;

    let location = format!("/api/shopping/{}", created.product_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/api/shopping/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ProductError::from)?;
    let product_service = ProductService::new(&state.db);
    let product = product_service.get_product(id).await?;

    Ok((StatusCode::OK, Json(product)))
}

/// Get every product
#[utoipa::path(
    get,
    path = "/api/shopping",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_products(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let product_service = ProductService::new(&state.db);
    let products = product_service.get_all_products().await?;

    Ok((StatusCode::OK, Json(products)))
}

/// Replace a product
///
/// The `productId` of the body must match the ID in the path.
#[utoipa::path(
    put,
    path = "/api/shopping/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductDto,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "ID mismatch or invalid product body", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Product could not be stored", body = ProblemDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<ProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ProductError::from)?;
    let Json(product) = body.map_err(ProductError::from)?;

    let product_service = ProductService::new(&state.db);
    product_service.update_product(id, product).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product with its group attributes and attributes
#[utoipa::path(
    delete,
    path = "/api/shopping/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Product could not be deleted", body = ProblemDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ProductError::from)?;
    let product_service = ProductService::new(&state.db);
    product_service.delete_product(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Increase the quantity of a product's first group attribute
///
/// The body is the amount to add as a bare JSON integer.
#[utoipa::path(
    patch,
    path = "/api/shopping/{id}/increase",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = i32,
    responses(
        (status = 204, description = "Quantity increased"),
        (status = 400, description = "Negative or invalid amount", body = ErrorDto),
        (status = 404, description = "Product or group attribute not found", body = ErrorDto),
        (status = 500, description = "Quantity could not be stored", body = ProblemDto)
    ),
)]
pub async fn increase_quantity(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<i32>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ProductError::from)?;
    let Json(amount) = body.map_err(ProductError::from)?;

    let product_service = ProductService::new(&state.db);
    product_service.increase_quantity(id, amount).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Decrease the quantity of a product's first group attribute
///
/// The body is the amount to subtract as a bare JSON integer. The quantity never drops below
/// zero; such a request is rejected and nothing is written.
#[utoipa::path(
    patch,
    path = "/api/shopping/{id}/decrease",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = i32,
    responses(
        (status = 204, description = "Quantity decreased"),
        (status = 400, description = "Quantity would become negative", body = ErrorDto),
        (status = 404, description = "Product or group attribute not found", body = ErrorDto),
        (status = 500, description = "Quantity could not be stored", body = ProblemDto)
    ),
)]
pub async fn decrease_quantity(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<i32>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path.map_err(ProductError::from)?;
    let Json(amount) = body.map_err(ProductError::from)?;

    let product_service = ProductService::new(&state.db);
    product_service.decrease_quantity(id, amount).await?;

    Ok(StatusCode::NO_CONTENT)
}
