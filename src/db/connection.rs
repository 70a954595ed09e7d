//! Connection lifecycle for the embedded SQLite database. The [`BookStore`]
//! handle owns the single long-lived connection for the life of the process;
//! there is deliberately no global connection or cursor state.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-record-store";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "books.sqlite";

/// Owned handle to the books table. All operations are synchronous and
/// autocommit one statement at a time; the connection is released when the
/// handle is dropped or [`BookStore::close`] is called.
pub struct BookStore {
    pub(crate) conn: Connection,
}

impl BookStore {
    /// Open (creating if necessary) the database at `path` and ensure the
    /// books table exists. Safe to call on every startup.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory database. Used by tests so each case gets
    /// an isolated store without touching the filesystem.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Release the connection explicitly. Dropping the handle has the same
    /// effect; this variant surfaces any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Storage(err))
    }
}

/// Create the books table if it is absent. Idempotent; the schema is the
/// single source of truth for the four record columns.
fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            year INTEGER NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Resolve the default database location inside the user's home. Returns
/// `None` when no home directory can be determined; the caller decides how
/// to report that.
pub fn default_db_path() -> Option<PathBuf> {
    let base_dirs = BaseDirs::new()?;
    Some(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
