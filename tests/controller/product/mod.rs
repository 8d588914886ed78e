use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use shopping::{
    model::{api::ErrorDto, product::ProductDto},
    server::{
        controller::product::{
            create_product, decrease_quantity, delete_product, get_all_products, get_product,
            increase_quantity, update_product,
        },
        model::app::AppState,
    },
};
use shopping_test_utils::prelude::*;

use crate::util::{mock_group_attribute_dto, mock_product_dto, response_json};

mod get_product;
mod quantity;
mod update_product;
