//! Statement executor: the async seam over the synchronous store.
//!
//! Every repository operation goes through one of three primitives on
//! [`StatementExecutor`]: `execute` for mutating statements, `fetch_all`
//! and `fetch_one` for reads. The underlying `rusqlite` call runs
//! synchronously on tokio-rusqlite's dedicated connection thread, so
//! statements execute one at a time while callers suspend at the await
//! point. Keeping the seam here means the store could later be swapped for
//! a networked engine without touching the repository call sites.

use rusqlite::{Params, Row};
use tokio_rusqlite::Connection;

use storekeep_core::storage::{RepositoryError, Result};

use super::error::map_storage_error;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOutcome {
    /// The rowid generated by the statement (last insert on this connection).
    pub last_insert_id: i64,
    /// Number of rows the statement changed.
    pub rows_affected: usize,
}

/// Owns the one connection to the embedded database.
///
/// Cheap to share by reference; all access is serialized behind it.
pub struct StatementExecutor {
    conn: Connection,
}

impl StatementExecutor {
    /// Opens a file-backed database, creating the file if absent.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database. Data is lost when the executor drops.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Runs one mutating statement (insert/update/delete).
    ///
    /// Params can be a positional tuple or named parameters; they are moved
    /// into the connection closure. Constraint violations surface as typed
    /// errors carrying the engine's message.
    pub async fn execute<P>(&self, sql: &'static str, params: P) -> Result<ExecuteOutcome>
    where
        P: Params + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let rows_affected = conn.execute(sql, params).map_err(wrap_err)?;
                Ok(ExecuteOutcome {
                    last_insert_id: conn.last_insert_rowid(),
                    rows_affected,
                })
            })
            .await
            .map_err(map_storage_error)
    }

    /// Runs a read statement and maps every matching row.
    ///
    /// An empty result is an empty `Vec`, never an error. Row order is
    /// whatever the store produced.
    pub async fn fetch_all<P, T, F>(&self, sql: &'static str, params: P, map_row: F) -> Result<Vec<T>>
    where
        P: Params + Send + 'static,
        T: Send + 'static,
        F: Fn(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt.query_map(params, |row| map_row(row)).map_err(wrap_err)?;

                let mut out = Vec::new();
                for row_result in rows {
                    out.push(row_result.map_err(wrap_err)?);
                }
                Ok(out)
            })
            .await
            .map_err(map_storage_error)
    }

    /// Runs a read statement expected to match at most one row.
    ///
    /// Zero rows is `None`, never an error.
    pub async fn fetch_one<P, T, F>(
        &self,
        sql: &'static str,
        params: P,
        map_row: F,
    ) -> Result<Option<T>>
    where
        P: Params + Send + 'static,
        T: Send + 'static,
        F: Fn(&Row<'_>) -> rusqlite::Result<T> + Send + 'static,
    {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row(params, |row| map_row(row)) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_storage_error)
    }

    /// Runs a multi-statement batch. Used for schema initialization.
    pub async fn execute_batch(&self, sql: &'static str) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute_batch(sql).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATE_SCRATCH: &str = "CREATE TABLE scratch (id INTEGER PRIMARY KEY AUTOINCREMENT, label TEXT NOT NULL UNIQUE)";
    const INSERT_SCRATCH: &str = "INSERT INTO scratch (label) VALUES (?1)";
    const SELECT_LABELS: &str = "SELECT label FROM scratch";
    const SELECT_LABEL_BY_ID: &str = "SELECT label FROM scratch WHERE id = ?1";

    async fn scratch_executor() -> StatementExecutor {
        let exec = StatementExecutor::open_in_memory().await.unwrap();
        exec.execute_batch(CREATE_SCRATCH).await.unwrap();
        exec
    }

    #[tokio::test]
    async fn test_execute_reports_generated_id_and_row_count() {
        let exec = scratch_executor().await;

        let first = exec
            .execute(INSERT_SCRATCH, ("one".to_string(),))
            .await
            .unwrap();
        let second = exec
            .execute(INSERT_SCRATCH, ("two".to_string(),))
            .await
            .unwrap();

        assert_eq!(first.last_insert_id, 1);
        assert_eq!(first.rows_affected, 1);
        assert_eq!(second.last_insert_id, 2);
    }

    #[tokio::test]
    async fn test_execute_surfaces_constraint_violation() {
        let exec = scratch_executor().await;
        exec.execute(INSERT_SCRATCH, ("dup".to_string(),))
            .await
            .unwrap();

        let result = exec.execute(INSERT_SCRATCH, ("dup".to_string(),)).await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_execute_rejects_malformed_statement() {
        let exec = scratch_executor().await;

        let result = exec.execute("INSERT INTO missing_table DEFAULT VALUES", ()).await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_fetch_all_returns_empty_vec_for_no_matches() {
        let exec = scratch_executor().await;

        let labels: Vec<String> = exec
            .fetch_all(SELECT_LABELS, (), |row| row.get(0))
            .await
            .unwrap();

        assert!(labels.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_returns_every_row() {
        let exec = scratch_executor().await;
        exec.execute(INSERT_SCRATCH, ("a".to_string(),)).await.unwrap();
        exec.execute(INSERT_SCRATCH, ("b".to_string(),)).await.unwrap();

        let labels: Vec<String> = exec
            .fetch_all(SELECT_LABELS, (), |row| row.get(0))
            .await
            .unwrap();

        assert_eq!(labels, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_one_returns_none_for_zero_rows() {
        let exec = scratch_executor().await;

        let label: Option<String> = exec
            .fetch_one(SELECT_LABEL_BY_ID, (42i64,), |row| row.get(0))
            .await
            .unwrap();

        assert!(label.is_none());
    }

    #[tokio::test]
    async fn test_fetch_one_returns_first_match() {
        let exec = scratch_executor().await;
        let outcome = exec.execute(INSERT_SCRATCH, ("hit".to_string(),)).await.unwrap();

        let label: Option<String> = exec
            .fetch_one(SELECT_LABEL_BY_ID, (outcome.last_insert_id,), |row| row.get(0))
            .await
            .unwrap();

        assert_eq!(label.as_deref(), Some("hit"));
    }
}
