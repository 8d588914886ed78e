//! Product catalog service.
//!
//! Implements the create, read, update, delete and quantity adjustment operations over product
//! aggregates. Writes run inside [`RetryContext`] and, apart from quantity adjustments which
//! touch a single row, inside one database transaction per attempt.

mod validation;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::product::{GroupAttributeDto, ProductDto},
    server::{
        data::product::ProductRepository,
        error::{product::ProductError, Error},
        model::db::{GroupAttributeRecord, ProductRecord},
        service::{quantity::QuantityAdjustment, retry::RetryContext},
    },
};

pub use validation::validate_product;

/// Service for managing product aggregates.
pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    /// Creates a new instance of [`ProductService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product with its group attributes and attributes.
    ///
    /// Identity fields in `product` are ignored, the store assigns new ones.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - The stored product with assigned identities
    /// - `Err(Error::ProductError(ProductError::Validation))` - A required field is blank
    /// - `Err(Error::ProductError(ProductError::UnknownGroupAttributeType))` - Referenced type missing
    /// - `Err(Error::PersistenceError)` - Every attempt to persist failed
    pub async fn create_product(&self, product: ProductDto) -> Result<ProductDto, Error> {
        validate_product(&product)?;

        let product = &product;

        RetryContext::new()
            .execute_with_retry("add product", move || self.try_create(product))
            .await
    }

    /// Retrieves a product with its group attributes and attributes.
    ///
    /// # Returns
    /// - `Ok(ProductDto)` - Product found
    /// - `Err(Error::ProductError(ProductError::NotFound))` - No product with the ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_product(&self, product_id: i32) -> Result<ProductDto, Error> {
        let product_repo = ProductRepository::new(self.db);

        match product_repo.get_by_id(product_id).await? {
            Some(record) => Ok(ProductDto::from(record)),
            None => Err(ProductError::NotFound(product_id).into()),
        }
    }

    /// Retrieves every product, ordered by ID.
    ///
    /// The result set is not paginated.
    pub async fn get_all_products(&self) -> Result<Vec<ProductDto>, Error> {
        let product_repo = ProductRepository::new(self.db);

        let records = product_repo.get_all().await?;

        Ok(records.into_iter().map(ProductDto::from).collect())
    }

    /// Replaces a product's fields and owned group attributes.
    ///
    /// A write that affects no row is treated as a conflict: if the product no longer exists
    /// the update fails with `NotFound`, otherwise it is retried.
    ///
    /// # Returns
    /// - `Ok(())` - Product replaced
    /// - `Err(Error::ProductError(ProductError::IdMismatch))` - Path and body IDs differ
    /// - `Err(Error::ProductError(ProductError::Validation))` - A required field is blank
    /// - `Err(Error::ProductError(ProductError::NotFound))` - Product missing at write time
    /// - `Err(Error::PersistenceError)` - Every attempt to persist failed
    pub async fn update_product(&self, product_id: i32, product: ProductDto) -> Result<(), Error> {
        if product_id != product.product_id {
            return Err(ProductError::IdMismatch {
                path_id: product_id,
                body_id: product.product_id,
            }
            .into());
        }
        validate_product(&product)?;

        let product = &product;

        RetryContext::new()
            .execute_with_retry(&format!("update product ID {}", product_id), move || {
                self.try_update(product_id, product)
            })
            .await
    }

    /// Deletes a product along with its group attributes and attributes.
    ///
    /// # Returns
    /// - `Ok(())` - Product deleted
    /// - `Err(Error::ProductError(ProductError::NotFound))` - No product with the ID
    /// - `Err(Error::PersistenceError)` - Every attempt to delete failed
    pub async fn delete_product(&self, product_id: i32) -> Result<(), Error> {
        RetryContext::new()
            .execute_with_retry(&format!("delete product ID {}", product_id), move || {
                self.try_delete(product_id)
            })
            .await
    }

    /// Adds `amount` to the quantity of the product's first group attribute.
    pub async fn increase_quantity(&self, product_id: i32, amount: i32) -> Result<(), Error> {
        self.adjust_quantity(product_id, QuantityAdjustment::Increase(amount))
            .await
    }

    /// Subtracts `amount` from the quantity of the product's first group attribute.
    ///
    /// Fails with `NegativeQuantity` without writing anything if the quantity would drop below
    /// zero.
    pub async fn decrease_quantity(&self, product_id: i32, amount: i32) -> Result<(), Error> {
        self.adjust_quantity(product_id, QuantityAdjustment::Decrease(amount))
            .await
    }

    /// Applies a quantity adjustment to the first group attribute (lowest ID) of a product.
    ///
    /// # Returns
    /// - `Ok(())` - New quantity written
    /// - `Err(Error::ProductError(ProductError::NegativeAmount))` - `amount` below zero
    /// - `Err(Error::ProductError(ProductError::NotFound))` - No product with the ID
    /// - `Err(Error::ProductError(ProductError::NoGroupAttributes))` - Product has no groups
    /// - `Err(Error::ProductError(ProductError::NegativeQuantity))` - Decrease below zero
    /// - `Err(Error::PersistenceError)` - Every attempt to persist failed
    async fn adjust_quantity(
        &self,
        product_id: i32,
        adjustment: QuantityAdjustment,
    ) -> Result<(), Error> {
        adjustment.validate()?;

        RetryContext::new()
            .execute_with_retry(adjustment.description(), move || {
                self.try_adjust_quantity(product_id, adjustment)
            })
            .await
    }

    async fn try_create(&self, product: &ProductDto) -> Result<ProductDto, Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        let product_model = product_repo.create(&product.name, product.price).await?;
        let group_attributes =
            create_group_attributes(&product_repo, product_model.id, &product.group_attributes)
                .await?;

        txn.commit().await?;

        Ok(ProductDto::from(ProductRecord {
            product: product_model,
            group_attributes,
        }))
    }

    async fn try_update(&self, product_id: i32, product: &ProductDto) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        match product_repo
            .update(product_id, &product.name, product.price)
            .await
        {
            Ok(_) => (),
            // No row matched, either the product was deleted or the write lost a race
            Err(DbErr::RecordNotUpdated) => {
                let exists = product_repo.exists(product_id).await?;
                txn.rollback().await?;

                if !exists {
                    return Err(ProductError::NotFound(product_id).into());
                }
                return Err(DbErr::RecordNotUpdated.into());
            }
            Err(e) => return Err(e.into()),
        }

        product_repo.delete_group_attributes(product_id).await?;
        create_group_attributes(&product_repo, product_id, &product.group_attributes).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn try_delete(&self, product_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let product_repo = ProductRepository::new(&txn);

        if !product_repo.exists(product_id).await? {
            txn.rollback().await?;
            return Err(ProductError::NotFound(product_id).into());
        }

        product_repo.delete(product_id).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn try_adjust_quantity(
        &self,
        product_id: i32,
        adjustment: QuantityAdjustment,
    ) -> Result<(), Error> {
        let product_repo = ProductRepository::new(self.db);

        let Some(group_attribute) = product_repo.get_first_group_attribute(product_id).await?
        else {
            if !product_repo.exists(product_id).await? {
                return Err(ProductError::NotFound(product_id).into());
            }
            return Err(ProductError::NoGroupAttributes(product_id).into());
        };

        let quantity = adjustment.apply(group_attribute.quantity)?;
        product_repo
            .update_quantity(group_attribute, quantity)
            .await?;

        tracing::debug!(
            "Set quantity of first group attribute for product ID {} to {}",
            product_id,
            quantity
        );

        Ok(())
    }
}

/// Inserts group attributes for a product in order, resolving or creating their types.
async fn create_group_attributes<C: ConnectionTrait>(
    product_repo: &ProductRepository<'_, C>,
    product_id: i32,
    group_attributes: &[GroupAttributeDto],
) -> Result<Vec<GroupAttributeRecord>, Error> {
    let mut records = Vec::with_capacity(group_attributes.len());

    for group_attribute in group_attributes {
        let type_dto = &group_attribute.group_attribute_type;
        let group_attribute_type = if type_dto.group_attribute_type_id > 0 {
            product_repo
                .find_group_attribute_type(type_dto.group_attribute_type_id)
                .await?
                .ok_or(ProductError::UnknownGroupAttributeType(
                    type_dto.group_attribute_type_id,
                ))?
        } else {
            product_repo
                .create_group_attribute_type(&type_dto.name)
                .await?
        };

        let group_attribute_model = product_repo
            .create_group_attribute(product_id, group_attribute_type.id, group_attribute)
            .await?;
        let attributes = product_repo
            .create_attributes(group_attribute_model.id, &group_attribute.attributes)
            .await?;

        records.push(GroupAttributeRecord {
            group_attribute: group_attribute_model,
            group_attribute_type,
            attributes,
        });
    }

    Ok(records)
}
