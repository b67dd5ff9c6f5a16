//! Data-access module for the `todos` table.
//!
//! Owns the SQLite connection exclusively; no other module issues SQL.
//! Mutations on a missing id are successful no-ops, so callers can retry
//! blindly without checking existence first.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{params, Connection};
use serde::Serialize;

/// Idempotent schema bootstrap, safe on every process start.
///
/// `AUTOINCREMENT` guarantees a deleted id is never handed out again.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    createdAt INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);
";

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    /// Unix seconds, assigned by the store at insert time.
    pub created_at: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// SQLite-backed store for to-do items.
///
/// The connection sits behind a `Mutex`; SQLite itself serializes writers,
/// this just keeps the handle shareable across request tasks.
pub struct TodoStore {
    conn: Mutex<Connection>,
}

impl TodoStore {
    /// Open (or create) the database file and bootstrap the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open(path)?)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("todo store mutex poisoned")
    }

    /// All to-dos, newest first (`createdAt` descending, insertion order
    /// breaking ties). A failed read degrades to an empty list — the page
    /// renderer has no recovery path for it anyway.
    pub fn list(&self) -> Vec<Todo> {
        match self.try_list() {
            Ok(todos) => todos,
            Err(e) => {
                tracing::error!(error = %e, "listing todos failed, returning empty list");
                Vec::new()
            }
        }
    }

    fn try_list(&self) -> Result<Vec<Todo>, StoreError> {
        let conn = self.lock();
        let mut stmt = conn.prepare(
            "SELECT id, title, completed, createdAt FROM todos
             ORDER BY createdAt DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Todo {
                id: row.get(0)?,
                title: row.get(1)?,
                completed: row.get::<_, i64>(2)? != 0,
                created_at: row.get(3)?,
            })
        })?;

        let mut todos = Vec::new();
        for row in rows {
            todos.push(row?);
        }
        Ok(todos)
    }

    /// Insert a new to-do with `completed = false` and a store-assigned
    /// timestamp. The title is trimmed and must be non-empty.
    pub fn insert(&self, title: &str) -> Result<(), StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("Title cannot be empty"));
        }

        self.lock()
            .execute("INSERT INTO todos (title) VALUES (?1)", params![title])?;
        Ok(())
    }

    /// One-way flip of `completed` to true. Idempotent: a missing or
    /// already-complete id is a successful no-op.
    pub fn mark_complete(&self, id: i64) -> Result<(), StoreError> {
        self.lock().execute(
            "UPDATE todos SET completed = 1 WHERE id = ?1",
            params![id],
        )?;
        Ok(())
    }

    /// Hard delete. A missing id is a successful no-op.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.lock()
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(())
    }
}
