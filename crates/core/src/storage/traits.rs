use async_trait::async_trait;

use crate::commerce::{LineItem, NewUser, Order, User, UserUpdate};

use super::Result;

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns whether a user with this email already exists. Pure read.
    async fn email_taken(&self, email: &str) -> Result<bool>;

    /// Creates a new user after a duplicate-email pre-check.
    ///
    /// Returns `Conflict` when the email is already used. The pre-check is
    /// not atomic with the insert; the store's UNIQUE constraint is the
    /// backstop if the race is lost, and surfaces as the same `Conflict`.
    async fn create_user(&self, new_user: &NewUser) -> Result<User>;

    /// Looks a user up by exact email and password equality.
    ///
    /// No match returns `Unauthorized` without saying which field was wrong.
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User>;

    /// Updates a user's name and password. Email is immutable.
    ///
    /// Rejects empty fields with `InvalidInput`. Does not check that the
    /// user exists; updating a missing id is a silent no-op.
    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<()>;

    /// Deletes a user by email. Idempotent: zero matched rows is still Ok.
    async fn delete_user(&self, email: &str) -> Result<()>;

    /// Returns every user. Full scan, no pagination.
    async fn list_users(&self) -> Result<Vec<User>>;
}

/// Repository for order operations.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Creates an order from the submitted items and returns its id.
    ///
    /// `item_count` and `total_price` are derived here, once, and the items
    /// are persisted as an encoded blob. Both flags start unset.
    async fn create_order(&self, user_id: i64, items: &[LineItem]) -> Result<i64>;

    /// Returns every order.
    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Returns the orders belonging to one user.
    async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>>;

    /// Sets both status flags on an order.
    ///
    /// Unconditional: no existence check, no ordering constraint between
    /// the flags. A missing id is a silent no-op.
    async fn update_order(&self, order_id: i64, is_paid: bool, is_delivered: bool) -> Result<()>;
}

/// Repository for cart operations.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Replaces the user's cart contents wholesale.
    ///
    /// Upsert keyed on the user id: inserts the row if absent, otherwise
    /// overwrites the stored items. Never merges with existing items.
    async fn update_cart(&self, user_id: i64, items: &[LineItem]) -> Result<()>;

    /// Returns the user's cart contents.
    ///
    /// A user with no cart row has an empty cart, not an error.
    async fn get_cart(&self, user_id: i64) -> Result<Vec<LineItem>>;
}
