//! Connection management for SqliteStore.

use super::transaction::Transaction;
use super::{SqliteStore, StoreSettings};
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

impl SqliteStore {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory SQLite database with the record schema.
    ///
    /// This is useful for testing and for throwaway stores.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open_in_memory_with(StoreSettings::default())
    }

    /// Opens an in-memory database with explicit settings.
    pub fn open_in_memory_with(settings: StoreSettings) -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, settings)
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a SQLite database at the given path.
    ///
    /// Creates parent directories if they don't exist. Initializes the schema
    /// if this is a new database.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Self::open_with(path, StoreSettings::default())
    }

    /// Opens a database file with explicit settings.
    pub fn open_with(path: &Path, settings: StoreSettings) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!(path = %path.display(), "opening store");
        let conn = Connection::open(path)?;
        Self::init(conn, settings)
    }

    fn init(conn: Connection, settings: StoreSettings) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(settings.busy_timeout)?;
        create_schema(&conn)?;
        Ok(Self { conn, settings })
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns the settings the store was opened with.
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    // ===========================================
    // Transaction Support
    // ===========================================

    /// Begins a new write transaction.
    ///
    /// The transaction will automatically rollback on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        Transaction::begin(&self.conn)
    }
}
