//! Order total derivation.
//!
//! Pure functions applied once when an order is created. The stored totals
//! are never recomputed from the item blob afterwards.

use super::LineItem;

/// Totals derived from a list of line items at order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Sum of purchased quantities.
    pub item_count: i64,
    /// Sum in currency minor units.
    pub total_price: i64,
}

/// Derives the stored totals for an order.
///
/// Each line contributes `round(quantity * price * 100)` minor units;
/// rounding happens per line and the rounded values are summed. Summing
/// first and rounding once would generally produce a different total.
pub fn order_totals(items: &[LineItem]) -> OrderTotals {
    let mut item_count = 0i64;
    let mut total_price = 0i64;

    for item in items {
        item_count += i64::from(item.quantity);
        total_price += (f64::from(item.quantity) * item.price * 100.0).round() as i64;
    }

    OrderTotals {
        item_count,
        total_price,
    }
}
