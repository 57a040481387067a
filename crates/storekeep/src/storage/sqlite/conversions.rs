//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! including the JSON boundary for the opaque line-item blob columns.
//! These are testable in isolation without database access.

use rusqlite::Row;

use storekeep_core::commerce::{LineItem, Order, User};
use storekeep_core::storage::RepositoryError;

/// Convert a SQLite row to a User.
///
/// Expected columns: id, name, email
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

/// Convert a SQLite row to an Order, decoding the item blob.
///
/// Expected columns: id, uid, item_numbers, is_paid, is_delivered,
/// total_price, order_items
pub fn row_to_order(row: &Row) -> rusqlite::Result<Order> {
    let items_json: String = row.get(6)?;

    Ok(Order {
        id: row.get(0)?,
        user_id: row.get(1)?,
        item_count: row.get(2)?,
        is_paid: row.get(3)?,
        is_delivered: row.get(4)?,
        total_price: row.get(5)?,
        items: json_to_items_internal(&items_json)?,
    })
}

/// Serialize line items to the JSON blob stored in the item columns.
pub fn items_to_json(items: &[LineItem]) -> Result<String, RepositoryError> {
    serde_json::to_string(items).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Deserialize line items from a stored JSON blob.
pub fn json_to_items(json: &str) -> Result<Vec<LineItem>, RepositoryError> {
    serde_json::from_str(json).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Internal version that returns rusqlite::Result for use in row conversions.
fn json_to_items_internal(json: &str) -> rusqlite::Result<Vec<LineItem>> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
