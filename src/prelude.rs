//! Quotient prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::Discount,
    offers::{OfferItem, OfferItemError},
    products::Product,
};
