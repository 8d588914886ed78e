use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DbErr};
use shopping_test_utils::prelude::*;

use crate::server::{
    data::product::ProductRepository,
    util::test::{mock_attribute_dto, mock_group_attribute_dto},
};
