use crate::domain::{Denomination, Money};
use crate::inventory::Inventory;

use super::error::VendError;
use super::outcome::{Dispensed, MachineView, Refund};

/// The transaction state machine: accumulated credit plus the catalog.
///
/// Pure request/response over two pieces of state; every operation mutates
/// and answers synchronously. Rendering and simulated delays live with the
/// device, never here, so state is always consistent before anything is
/// drawn.
pub struct Controller {
    credit: Money,
    inventory: Inventory,
}

impl Controller {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            credit: Money::ZERO,
            inventory,
        }
    }

    pub fn credit(&self) -> Money {
        self.credit
    }

    /// Any accepted denomination always increases credit; there is no
    /// failure path. Returns the new total for the credit display.
    pub fn insert_coin(&mut self, denomination: Denomination) -> Money {
        self.credit += denomination.value();
        self.credit
    }

    /// Returns whatever credit is on the machine and zeroes it. Idempotent
    /// once credit is zero.
    pub fn refund(&mut self) -> Refund {
        if self.credit.is_zero() {
            return Refund::NothingToRefund;
        }
        let amount = self.credit;
        self.credit = Money::ZERO;
        Refund::Returned(amount)
    }

    /// Eligibility checks in order: known id, stock, credit. The first
    /// failure wins and leaves credit and every stock count untouched.
    ///
    /// On success the credit deduction and the stock decrement are applied
    /// together; the decrement is the only fallible step and credit is
    /// written after it, so a failure can never leave half a transaction.
    pub fn purchase(&mut self, product_id: u32) -> Result<Dispensed, VendError> {
        let product = self
            .inventory
            .find(product_id)
            .ok_or(VendError::UnknownProduct(product_id))?;

        if !product.in_stock() {
            return Err(VendError::OutOfStock(product.name.clone()));
        }
        if self.credit < product.price {
            return Err(VendError::InsufficientCredit {
                missing: self.credit.shortfall_to(product.price),
            });
        }

        let product_name = product.name.clone();
        let price = product.price;
        let Some(remaining) = self.credit.checked_sub(price) else {
            return Err(VendError::InsufficientCredit {
                missing: self.credit.shortfall_to(price),
            });
        };

        self.inventory.decrement_stock(product_id)?;
        self.credit = remaining;

        Ok(Dispensed {
            product_name,
            price,
            remaining_credit: remaining,
        })
    }

    pub fn view(&self) -> MachineView {
        MachineView {
            credit: self.credit,
            products: self.inventory.products().to_vec(),
        }
    }
}
