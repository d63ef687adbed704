//! Discounts

use rusty_money::{Money, iso::Currency};

/// An absolute amount taken off an offer item's pre-discount subtotal.
///
/// How the amount was arrived at (campaign, volume break, manual override) is
/// the pricing layer's concern; this type only carries the value to subtract.
/// "No discount" is expressed as `Option<Discount>` with `None` as the empty
/// case, so comparing two undiscounted items never needs a special path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discount<'a> {
    amount: Money<'a, Currency>,
}

impl<'a> Discount<'a> {
    /// Creates a discount taking the given amount of money off.
    #[must_use]
    pub fn new(amount: Money<'a, Currency>) -> Self {
        Self { amount }
    }

    /// Returns the amount of money this discount takes off.
    pub fn amount(&self) -> &Money<'a, Currency> {
        &self.amount
    }
}
