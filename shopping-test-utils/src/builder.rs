//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained and everything queued is executed during `build()`.

use rust_decimal::Decimal;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_product_tables: bool,

    // Database fixtures to insert
    products: Vec<(String, Decimal, Vec<i32>)>, // (name, price, group attribute quantities)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_product_tables: false,
            products: Vec::new(),
        }
    }

    /// Add the product aggregate tables to the test database.
    ///
    /// Creates GroupAttributeType, Product, GroupAttribute and Attribute tables in that order.
    pub fn with_product_tables(mut self) -> Self {
        self.include_product_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shopping_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), shopping_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Product)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock product into the database.
    ///
    /// One group attribute is created per entry of `group_quantities`, in order, each with
    /// its own mock group attribute type and the given quantity.
    ///
    /// # Arguments
    /// - `name` - Product name
    /// - `price` - Product price
    /// - `group_quantities` - Quantity of each group attribute to create
    pub fn with_mock_product(
        mut self,
        name: &str,
        price: Decimal,
        group_quantities: &[i32],
    ) -> Self {
        self.products
            .push((name.to_string(), price, group_quantities.to_vec()));
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_product_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::GroupAttributeType),
                schema.create_table_from_entity(entity::prelude::Product),
                schema.create_table_from_entity(entity::prelude::GroupAttribute),
                schema.create_table_from_entity(entity::prelude::Attribute),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (name, price, group_quantities) in self.products {
            setup
                .product()
                .insert_mock_product_with_groups(&name, price, &group_quantities)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
