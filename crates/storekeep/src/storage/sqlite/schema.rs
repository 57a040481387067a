//! SQLite schema definitions and SQL statement constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
///
/// Idempotent: safe to re-run on every process start. The flags on
/// `orders` are constrained to {0, 1} and the per-user uniqueness of
/// `cart.uid` is what the cart upsert relies on.
pub const CREATE_TABLES: &str = r#"
-- Users table
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);

-- Orders table
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    uid INTEGER NOT NULL,
    item_numbers INTEGER NOT NULL,
    is_paid INTEGER NOT NULL DEFAULT 0 CHECK (is_paid IN (0, 1)),
    is_delivered INTEGER NOT NULL DEFAULT 0 CHECK (is_delivered IN (0, 1)),
    total_price INTEGER NOT NULL,
    order_items TEXT NOT NULL
);

-- Cart table (at most one row per user)
CREATE TABLE IF NOT EXISTS cart (
    uid INTEGER NOT NULL UNIQUE,
    cart_items TEXT NOT NULL
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_orders_uid ON orders(uid);
"#;

// User statements
pub const INSERT_USER: &str = r#"
INSERT INTO users (name, email, password)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_USER_ID_BY_EMAIL: &str = r#"
SELECT id
FROM users
WHERE email = ?1
"#;

pub const SELECT_USER_BY_CREDENTIALS: &str = r#"
SELECT id, name, email
FROM users
WHERE email = ?1 AND password = ?2
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = ?2, password = ?3
WHERE id = ?1
"#;

pub const DELETE_USER_BY_EMAIL: &str = r#"
DELETE FROM users
WHERE email = ?1
"#;

pub const SELECT_ALL_USERS: &str = r#"
SELECT id, name, email
FROM users
"#;

// Order statements
pub const INSERT_ORDER: &str = r#"
INSERT INTO orders (uid, item_numbers, is_paid, is_delivered, total_price, order_items)
VALUES (?1, ?2, 0, 0, ?3, ?4)
"#;

pub const SELECT_ALL_ORDERS: &str = r#"
SELECT id, uid, item_numbers, is_paid, is_delivered, total_price, order_items
FROM orders
"#;

pub const SELECT_ORDERS_BY_USER: &str = r#"
SELECT id, uid, item_numbers, is_paid, is_delivered, total_price, order_items
FROM orders
WHERE uid = ?1
"#;

pub const UPDATE_ORDER_FLAGS: &str = r#"
UPDATE orders
SET is_paid = ?2, is_delivered = ?3
WHERE id = ?1
"#;

// Cart statements
pub const UPSERT_CART: &str = r#"
INSERT INTO cart (uid, cart_items)
VALUES (?1, ?2)
ON CONFLICT(uid) DO UPDATE SET cart_items = excluded.cart_items
"#;

pub const SELECT_CART_ITEMS: &str = r#"
SELECT cart_items
FROM cart
WHERE uid = ?1
"#;
