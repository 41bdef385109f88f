//! Marketability predicate.
//!
//! Decides whether an incoming order may trade against an opposite-side
//! level. Comparisons are exact decimal comparisons; equality is always
//! marketable.

use types::numeric::Price;
use types::order::Side;

/// Whether an incoming order with `limit` may trade against a level at
/// `level_price`. `None` means a market order: no price boundary.
pub fn marketable(side: Side, limit: Option<Price>, level_price: Price) -> bool {
    match (side, limit) {
        (_, None) => true,
        (Side::Buy, Some(limit)) => level_price <= limit,
        (Side::Sell, Some(limit)) => level_price >= limit,
    }
}
