//! Offer items
//!
//! A priced, quantified, optionally discounted snapshot of a product offer,
//! with a percentage-tolerance comparison between line totals.

use chrono::{DateTime, Utc};
use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{discounts::Discount, products::Product};

/// Errors related to offer item construction.
#[derive(Debug, Error, PartialEq)]
pub enum OfferItemError {
    /// The discount's currency differs from the unit price currency.
    #[error("discount currency {actual} does not match unit price currency {expected}")]
    CurrencyMismatch {
        /// Currency of the unit price.
        expected: &'static str,
        /// Currency of the discount.
        actual: &'static str,
    },

    /// The discount takes off more than the pre-discount subtotal.
    #[error("discount {discount} exceeds the pre-discount subtotal {subtotal}")]
    DiscountExceedsSubtotal {
        /// Line subtotal before the discount.
        subtotal: Decimal,
        /// Amount the discount would take off.
        discount: Decimal,
    },
}

/// A line entry in a sales offer: one product, a quantity, a unit price
/// captured at a point in time, and an optional discount.
///
/// The line total is derived once at construction using exact decimal
/// arithmetic and never recomputed; every field is immutable afterwards, so
/// items can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferItem<'a> {
    product: Product,
    unit_price: Money<'a, Currency>,
    snapshot_date: DateTime<Utc>,
    quantity: u32,
    discount: Option<Discount<'a>>,
    total_cost: Decimal,
}

impl<'a> OfferItem<'a> {
    /// Creates an undiscounted offer item.
    ///
    /// The line total is the unit price amount multiplied by the quantity.
    #[must_use]
    pub fn new(
        product: Product,
        unit_price: Money<'a, Currency>,
        snapshot_date: DateTime<Utc>,
        quantity: u32,
    ) -> Self {
        let total_cost = line_subtotal(&unit_price, quantity);

        Self {
            product,
            unit_price,
            snapshot_date,
            quantity,
            discount: None,
            total_cost,
        }
    }

    /// Creates an offer item with an absolute discount taken off the line
    /// total.
    ///
    /// # Errors
    ///
    /// - [`OfferItemError::CurrencyMismatch`]: The discount is denominated in
    ///   a different currency than the unit price.
    /// - [`OfferItemError::DiscountExceedsSubtotal`]: The discount is larger
    ///   than the pre-discount subtotal and would produce a negative total.
    pub fn with_discount(
        product: Product,
        unit_price: Money<'a, Currency>,
        snapshot_date: DateTime<Utc>,
        quantity: u32,
        discount: Discount<'a>,
    ) -> Result<Self, OfferItemError> {
        let discount_currency = discount.amount().currency();
        if discount_currency != unit_price.currency() {
            return Err(OfferItemError::CurrencyMismatch {
                expected: unit_price.currency().iso_alpha_code,
                actual: discount_currency.iso_alpha_code,
            });
        }

        let subtotal = line_subtotal(&unit_price, quantity);
        let amount_off = *discount.amount().amount();
        if amount_off > subtotal {
            return Err(OfferItemError::DiscountExceedsSubtotal {
                subtotal,
                discount: amount_off,
            });
        }

        Ok(Self {
            product,
            unit_price,
            snapshot_date,
            quantity,
            discount: Some(discount),
            total_cost: subtotal - amount_off,
        })
    }

    /// Returns the quoted product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the unit price captured for this line.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Returns when the product's price was captured for this offer.
    #[must_use]
    pub fn snapshot_date(&self) -> DateTime<Utc> {
        self.snapshot_date
    }

    /// Returns the number of units on this line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the discount applied to this line, if any.
    pub fn discount(&self) -> Option<&Discount<'a>> {
        self.discount.as_ref()
    }

    /// Returns the line total: unit price times quantity, less any discount.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    /// Compares the line totals of two offer items within a percentage
    /// tolerance of the larger total.
    ///
    /// Quantities must match exactly; the totals may then differ by strictly
    /// less than `delta` of the larger total. A difference exactly at the
    /// threshold does not count, so two items whose totals are both zero are
    /// never the same under this rule. Use [`OfferItem::same_as_inclusive`]
    /// to accept the threshold itself.
    #[must_use]
    pub fn same_as(&self, other: &Self, delta: Percentage) -> bool {
        match self.cost_spread(other, delta) {
            Some((difference, acceptable)) => acceptable > difference,
            None => false,
        }
    }

    /// Like [`OfferItem::same_as`], but a difference exactly at the tolerance
    /// threshold still counts as the same.
    ///
    /// In particular two items with identical totals, zero included, compare
    /// as the same at any tolerance.
    #[must_use]
    pub fn same_as_inclusive(&self, other: &Self, delta: Percentage) -> bool {
        match self.cost_spread(other, delta) {
            Some((difference, acceptable)) => acceptable >= difference,
            None => false,
        }
    }

    /// Difference between the two line totals alongside the tolerated delta,
    /// or `None` when the quantities differ.
    fn cost_spread(&self, other: &Self, delta: Percentage) -> Option<(Decimal, Decimal)> {
        debug_assert!(
            delta * Decimal::ONE >= Decimal::ZERO,
            "tolerance delta must not be negative"
        );

        if self.quantity != other.quantity {
            return None;
        }

        // The tolerance is taken from the larger of the two totals, which
        // keeps the check symmetric and well-defined when one total is zero.
        let (max, min) = if self.total_cost > other.total_cost {
            (self.total_cost, other.total_cost)
        } else {
            (other.total_cost, self.total_cost)
        };

        Some((max - min, delta * max))
    }
}

/// Line subtotal before any discount, in exact decimal space.
fn line_subtotal(unit_price: &Money<'_, Currency>, quantity: u32) -> Decimal {
    *unit_price.amount() * Decimal::from(quantity)
}
