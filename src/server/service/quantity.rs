//! Bounded adjustments of a group attribute's quantity.

use crate::server::error::product::ProductError;

/// Change to apply to the quantity of a product's group attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityAdjustment {
    Increase(i32),
    Decrease(i32),
}

impl QuantityAdjustment {
    /// Rejects negative amounts, which would let an increase lower the quantity.
    pub fn validate(&self) -> Result<(), ProductError> {
        let amount = self.amount();
        if amount < 0 {
            return Err(ProductError::NegativeAmount(amount));
        }

        Ok(())
    }

    /// Returns the quantity resulting from applying the adjustment to `current`.
    ///
    /// # Returns
    /// - `Ok(i32)` - The new quantity, never negative for a non-negative `current`
    /// - `Err(ProductError::NegativeQuantity)` - A decrease would go below zero
    /// - `Err(ProductError::QuantityOverflow)` - An increase would exceed `i32::MAX`
    pub fn apply(&self, current: i32) -> Result<i32, ProductError> {
        match *self {
            Self::Increase(amount) => current
                .checked_add(amount)
                .ok_or(ProductError::QuantityOverflow { current, amount }),
            Self::Decrease(amount) => match current.checked_sub(amount) {
                Some(quantity) if quantity >= 0 => Ok(quantity),
                _ => Err(ProductError::NegativeQuantity { current, amount }),
            },
        }
    }

    pub fn amount(&self) -> i32 {
        match *self {
            Self::Increase(amount) | Self::Decrease(amount) => amount,
        }
    }

    /// Action name used in logs and persistence error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::Increase(_) => "increase quantity",
            Self::Decrease(_) => "decrease quantity",
        }
    }
}
