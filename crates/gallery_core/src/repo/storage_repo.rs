//! Durable key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Provide a string-keyed, string-valued storage surface in the shape of a
//!   browser's local storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set_item` is a total overwrite; last write wins.
//! - Values are stored verbatim; callers own serialization.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const KV_TABLE: &str = "kv_store";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage transport error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection was not bootstrapped through `open_db*`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "storage connection is not migrated: expected schema {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "storage connection is missing table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string-keyed storage.
pub trait StorageRepository {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get_item(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> RepoResult<()>;
    /// Lists stored keys in ascending order.
    fn keys(&self) -> RepoResult<Vec<String>>;
}

impl<R: StorageRepository + ?Sized> StorageRepository for &R {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        (**self).keys()
    }
}

/// SQLite-backed storage over the `kv_store` table.
pub struct SqliteStorageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorageRepository<'conn> {
    /// Wraps a connection opened through `open_db`/`open_db_in_memory`.
    ///
    /// Rejects raw connections whose schema has not been migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_table: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
            [KV_TABLE],
            |row| row.get(0),
        )?;
        if !has_table {
            return Err(RepoError::MissingRequiredTable(KV_TABLE));
        }

        Ok(Self { conn })
    }
}

impl StorageRepository for SqliteStorageRepository<'_> {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

/// Process-local storage for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStorageRepository {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageRepository for MemoryStorageRepository {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> RepoResult<Vec<String>> {
        Ok(self.items.borrow().keys().cloned().collect())
    }
}
