//! Scoped employee store handle.
//!
//! # Responsibility
//! - Own the single long-lived SQLite connection for a session.
//! - Hand out repositories borrowing that connection.
//!
//! # Invariants
//! - A store is usable only between `initialize` and `close`/drop.
//! - `close` consumes the handle, so no call can follow it.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::repo::employee_repo::SqliteEmployeeRepository;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default store file, relative to the process working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "treeview_data.db";

/// Owner of the employee database connection.
pub struct EmployeeStore {
    conn: Connection,
    location: Option<PathBuf>,
}

impl EmployeeStore {
    /// Opens or creates the store at `location` and ensures the schema exists.
    ///
    /// Safe to call against an existing file; rows are left untouched.
    ///
    /// # Errors
    /// - `DbError::StorageUnavailable` when the file cannot be opened/created.
    /// - `DbError::UnsupportedSchemaVersion` when the file is from a newer build.
    pub fn initialize(location: impl AsRef<Path>) -> DbResult<Self> {
        let location = location.as_ref();
        let conn = open_db(location)?;
        info!("event=store_init module=store status=ok mode=file");
        Ok(Self {
            conn,
            location: Some(location.to_path_buf()),
        })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self {
            conn,
            location: None,
        })
    }

    /// File location, or `None` for in-memory stores.
    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// Returns a repository bound to this store's connection.
    pub fn repository(&self) -> SqliteEmployeeRepository<'_> {
        SqliteEmployeeRepository::new(&self.conn)
    }

    /// Releases the underlying connection.
    ///
    /// Dropping the store also releases it; `close` additionally reports
    /// errors from the final flush.
    pub fn close(self) -> DbResult<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("event=store_close module=store status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=store_close module=store status=error error={}",
                    err
                );
                Err(DbError::Sqlite(err))
            }
        }
    }
}
