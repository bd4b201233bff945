//! Cart pricing aggregator.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A priced line in the active session's cart.
///
/// The subsidy discount is recomputed live while the line sits in the cart;
/// it is frozen into a line item's `line_total` only at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog product this line was priced from.
    pub product_id: ProductId,

    /// Product name at the time it was added.
    pub name: String,

    /// Raw catalog unit price, before subsidy.
    pub unit_price: Money,

    /// Sale unit, e.g. "kg".
    pub unit: String,

    /// Quantity, always >= 1 while the line exists.
    pub quantity: u32,

    /// Whether the subsidy discount applies.
    pub is_subsidized: bool,

    /// Subsidy percentage in [0, 100].
    pub subsidy_percent: u8,
}

impl CartLine {
    /// Returns the unit price after subsidy, or the raw price for
    /// unsubsidized lines.
    pub fn effective_unit_price(&self) -> Money {
        if self.is_subsidized {
            self.unit_price.less_percent(self.subsidy_percent)
        } else {
            self.unit_price
        }
    }

    /// Returns the payable total for this line.
    pub fn line_total(&self) -> Money {
        self.effective_unit_price().multiply(self.quantity)
    }

    /// Returns the subsidy saving across this line's quantity.
    pub fn savings(&self) -> Money {
        (self.unit_price - self.effective_unit_price()).multiply(self.quantity)
    }
}

/// Aggregated cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,

    /// Sum of line quantities.
    pub item_count: u32,

    /// Sum of raw unit price × quantity across lines.
    pub subtotal: Money,

    /// Sum of subsidy savings across lines.
    pub subsidy_savings: Money,

    /// `subtotal - subsidy_savings`; the amount committed at checkout.
    pub payable: Money,
}

/// The active session's cart.
///
/// Owned exclusively by one user session; destroyed on explicit clear or
/// successful checkout. Lines are keyed by product ID and kept in insertion
/// order. Every operation is a total function over the current line set:
/// malformed quantities are clamped, never rejected.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the line for a product, if present.
    pub fn get_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Adds one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended with quantity 1. No upper bound is
    /// enforced here; inventory limits belong to the catalog collaborator.
    pub fn add_line(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            unit: product.unit.clone(),
            quantity: 1,
            is_subsidized: product.is_subsidized,
            subsidy_percent: product.subsidy_percent,
        });
    }

    /// Sets a line's quantity, clamped to `u32::MAX`. A quantity below 1
    /// removes the line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_line(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Removes a line if present.
    pub fn remove_line(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Computes the current totals. Pure and deterministic over the current
    /// line set.
    pub fn totals(&self) -> CartTotals {
        let subtotal: Money = self
            .lines
            .iter()
            .map(|l| l.unit_price.multiply(l.quantity))
            .sum();
        let subsidy_savings: Money = self.lines.iter().map(CartLine::savings).sum();

        CartTotals {
            line_count: self.lines.len(),
            item_count: self.lines.iter().map(|l| l.quantity).sum(),
            subtotal,
            subsidy_savings,
            payable: subtotal - subsidy_savings,
        }
    }
}
