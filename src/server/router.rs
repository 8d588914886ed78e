//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/shopping` - Create a product
/// - `GET /api/shopping` - Get every product
/// - `GET /api/shopping/{id}` - Get a product
/// - `PUT /api/shopping/{id}` - Replace a product
/// - `DELETE /api/shopping/{id}` - Delete a product
/// - `PATCH /api/shopping/{id}/increase` - Increase the first group attribute's quantity
/// - `PATCH /api/shopping/{id}/decrease` - Decrease the first group attribute's quantity
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Shopping", description = "Shopping catalog API"), tags(
        (name = controller::product::PRODUCT_TAG, description = "Product catalog API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::product::create_product,
            controller::product::get_all_products
        ))
        .routes(routes!(
            controller::product::get_product,
            controller::product::update_product,
            controller::product::delete_product
        ))
        .routes(routes!(controller::product::increase_quantity))
        .routes(routes!(controller::product::decrease_quantity))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
