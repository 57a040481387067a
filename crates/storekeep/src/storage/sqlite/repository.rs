//! SQLite repository implementation.
//!
//! Implements the repository traits from `storekeep_core::storage` using
//! SQLite. Every operation composes the statement executor primitives,
//! encodes/decodes the line-item blob where needed, and returns typed
//! errors; storage-level failures are logged here with the operation name
//! and never escape as raw engine errors.

use async_trait::async_trait;

use storekeep_core::commerce::{order_totals, LineItem, NewUser, Order, User, UserUpdate};
use storekeep_core::storage::{
    CartRepository, OrderRepository, RepositoryError, Result, UserRepository,
};

use super::conversions::{items_to_json, json_to_items, row_to_order, row_to_user};
use super::executor::StatementExecutor;
use super::schema;

/// Logs a storage-level failure against the operation that hit it.
fn fail(operation: &'static str, error: RepositoryError) -> RepositoryError {
    tracing::error!(operation, %error, "storage operation failed");
    error
}

/// SQLite-backed implementation of the repository traits.
///
/// Owns one connection to the embedded database. Construct a single
/// instance at process start and pass it by reference to whatever serves
/// requests; tests get isolated instances via [`Self::open_in_memory`].
pub struct SqliteRepository {
    exec: StatementExecutor,
}

impl SqliteRepository {
    /// Opens (or creates) a file-backed database and initializes the schema.
    pub async fn open(path: &str) -> Result<Self> {
        let exec = StatementExecutor::open(path).await?;
        Self::init_schema(&exec).await;

        Ok(Self { exec })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the instance is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let exec = StatementExecutor::open_in_memory().await?;
        Self::init_schema(&exec).await;

        Ok(Self { exec })
    }

    /// Runs the idempotent create-table batch.
    ///
    /// A failure is logged but does not fail construction; operations
    /// against a missing table report `QueryFailed` on first use.
    async fn init_schema(exec: &StatementExecutor) {
        if let Err(error) = exec.execute_batch(schema::CREATE_TABLES).await {
            tracing::error!(%error, "failed to initialize database schema");
        }
    }
}

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn email_taken(&self, email: &str) -> Result<bool> {
        let email = email.to_string();

        let existing = self
            .exec
            .fetch_one(schema::SELECT_USER_ID_BY_EMAIL, (email,), |row| {
                row.get::<_, i64>(0)
            })
            .await
            .map_err(|e| fail("email_taken", e))?;

        Ok(existing.is_some())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        // Check-then-act: not atomic with the insert. Losing the race puts
        // us on the UNIQUE constraint, which maps to the same Conflict.
        if self.email_taken(&new_user.email).await? {
            return Err(RepositoryError::Conflict("email already used".to_string()));
        }

        let name = new_user.name.clone();
        let email = new_user.email.clone();
        let password = new_user.password.clone();

        let outcome = self
            .exec
            .execute(schema::INSERT_USER, (name, email, password))
            .await
            .map_err(|e| fail("create_user", e))?;

        Ok(User {
            id: outcome.last_insert_id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
        })
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User> {
        let params = (email.to_string(), password.to_string());

        let user = self
            .exec
            .fetch_one(schema::SELECT_USER_BY_CREDENTIALS, params, row_to_user)
            .await
            .map_err(|e| fail("verify_credentials", e))?;

        user.ok_or_else(|| RepositoryError::Unauthorized("wrong email or password".to_string()))
    }

    async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<()> {
        if update.name.is_empty() || update.password.is_empty() {
            return Err(RepositoryError::InvalidInput(
                "name and password must not be empty".to_string(),
            ));
        }

        // No existence check: zero affected rows still reports success.
        self.exec
            .execute(
                schema::UPDATE_USER,
                (user_id, update.name.clone(), update.password.clone()),
            )
            .await
            .map(|_| ())
            .map_err(|e| fail("update_user", e))
    }

    async fn delete_user(&self, email: &str) -> Result<()> {
        self.exec
            .execute(schema::DELETE_USER_BY_EMAIL, (email.to_string(),))
            .await
            .map(|_| ())
            .map_err(|e| fail("delete_user", e))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.exec
            .fetch_all(schema::SELECT_ALL_USERS, (), row_to_user)
            .await
            .map_err(|e| fail("list_users", e))
    }
}

#[async_trait]
impl OrderRepository for SqliteRepository {
    async fn create_order(&self, user_id: i64, items: &[LineItem]) -> Result<i64> {
        let totals = order_totals(items);
        let items_json = items_to_json(items).map_err(|e| fail("create_order", e))?;

        let outcome = self
            .exec
            .execute(
                schema::INSERT_ORDER,
                (user_id, totals.item_count, totals.total_price, items_json),
            )
            .await
            .map_err(|e| fail("create_order", e))?;

        Ok(outcome.last_insert_id)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        self.exec
            .fetch_all(schema::SELECT_ALL_ORDERS, (), row_to_order)
            .await
            .map_err(|e| fail("list_orders", e))
    }

    async fn orders_for_user(&self, user_id: i64) -> Result<Vec<Order>> {
        self.exec
            .fetch_all(schema::SELECT_ORDERS_BY_USER, (user_id,), row_to_order)
            .await
            .map_err(|e| fail("orders_for_user", e))
    }

    async fn update_order(&self, order_id: i64, is_paid: bool, is_delivered: bool) -> Result<()> {
        self.exec
            .execute(schema::UPDATE_ORDER_FLAGS, (order_id, is_paid, is_delivered))
            .await
            .map(|_| ())
            .map_err(|e| fail("update_order", e))
    }
}

#[async_trait]
impl CartRepository for SqliteRepository {
    async fn update_cart(&self, user_id: i64, items: &[LineItem]) -> Result<()> {
        let items_json = items_to_json(items).map_err(|e| fail("update_cart", e))?;

        self.exec
            .execute(schema::UPSERT_CART, (user_id, items_json))
            .await
            .map(|_| ())
            .map_err(|e| fail("update_cart", e))
    }

    async fn get_cart(&self, user_id: i64) -> Result<Vec<LineItem>> {
        let stored = self
            .exec
            .fetch_one(schema::SELECT_CART_ITEMS, (user_id,), |row| {
                row.get::<_, String>(0)
            })
            .await
            .map_err(|e| fail("get_cart", e))?;

        match stored {
            Some(json) => json_to_items(&json).map_err(|e| fail("get_cart", e)),
            None => Ok(Vec::new()),
        }
    }
}
