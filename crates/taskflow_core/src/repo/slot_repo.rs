//! Slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable get/put APIs over durable `slots` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `try_new` validates schema readiness before any slot access.
//! - `put` replaces the whole value and refreshes `updated_at`.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SlotResult<T> = Result<T, SlotError>;

/// Repository error for slot persistence operations.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    /// Connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Connection reports the right version but a required table is absent.
    MissingRequiredTable(&'static str),
    /// Required table exists but lacks an expected column.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{column}` is missing from table `{table}`")
            }
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string-keyed slot store consumed by state containers.
///
/// The contract mirrors web-style local storage: one opaque value per key,
/// replaced wholesale on every write. Stores decide what the value means.
pub trait SlotRepository {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> SlotResult<Option<String>>;
    /// Inserts or replaces the value stored under `key`.
    fn put(&self, key: &str, value: &str) -> SlotResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Constructs a repository from a migrated, ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration known by this binary.
    /// - `MissingRequiredTable` when the `slots` table is absent.
    /// - `MissingRequiredColumn` when the `slots` table lacks one of its
    ///   expected columns.
    pub fn try_new(conn: &'conn Connection) -> SlotResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;

        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn put(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000));",
            params![key, value],
        )?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> SlotResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if actual_version != expected_version {
        return Err(SlotError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "slots")? {
        return Err(SlotError::MissingRequiredTable("slots"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "slots", column)? {
            return Err(SlotError::MissingRequiredColumn {
                table: "slots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> SlotResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> SlotResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
