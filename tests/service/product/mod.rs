//! Tests for ProductService, run against an in-memory SQLite database.

use rust_decimal::Decimal;
use shopping::server::{
    error::{product::ProductError, Error},
    service::product::ProductService,
};
use shopping_test_utils::prelude::*;

use crate::util::{mock_attribute_dto, mock_group_attribute_dto, mock_product_dto};

mod adjust_quantity;
mod create_product;
mod get_product;
