use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An account as seen by callers of the data-access layer.
///
/// The stored password never leaves the layer; operations that look a user
/// up by credentials return this credential-free view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Input for creating a user.
///
/// The password is an opaque string; hashing is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Creates a new-user request with the given fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Mutable user fields. Email is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub password: String,
}

impl UserUpdate {
    /// Creates an update request with the given fields.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

/// One purchased product's price and quantity within an order or cart.
///
/// Only `price` (unit price in currency major units) and `quantity` are
/// interpreted by this layer. Anything else the caller put on the item
/// (product id, display name, ...) lands in `extra` and is written back
/// unchanged when the item is re-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: f64,
    pub quantity: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Creates a line item with the given unit price and quantity.
    pub fn new(price: f64, quantity: u32) -> Self {
        Self {
            price,
            quantity,
            extra: Map::new(),
        }
    }

    /// Attaches a field this layer does not interpret.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A purchase record.
///
/// `item_count` and `total_price` are derived once when the order is
/// created and never recomputed; the flags only change through an explicit
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub item_count: i64,
    pub is_paid: bool,
    pub is_delivered: bool,
    /// Total in currency minor units.
    pub total_price: i64,
    pub items: Vec<LineItem>,
}
