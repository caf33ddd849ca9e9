//! SQLite schema creation for the record store.

use rusqlite::Connection;

/// Current schema version recorded in `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the database schema.
///
/// It is idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `customers` - Customers with a denormalized note count
/// - `notes` - Ranked notes, unique per `(customer_id, rank)`
/// - `invoice_types` - Invoice type names
/// - `shipping_instruction_print_history` - Printed shipping instructions
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT,
            phone TEXT,
            notes INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );",
    )?;

    // Rank uniqueness is checked row by row, which is why the rank
    // rewrites walk rows one at a time in a safe order.
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
            rank INTEGER NOT NULL CHECK (rank > 0),
            content TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE (customer_id, rank)
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS invoice_types (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS shipping_instruction_print_history (
            delivery_date TEXT NOT NULL,
            delivery_time_str TEXT NOT NULL DEFAULT '',
            printed_at TEXT NOT NULL,
            page_num_str TEXT NOT NULL DEFAULT '',
            customer_name TEXT NOT NULL,
            customer_address TEXT NOT NULL,
            wholesaler TEXT NOT NULL DEFAULT '',
            order_number TEXT NOT NULL DEFAULT '',
            shipping_date TEXT NOT NULL,
            carrier TEXT NOT NULL DEFAULT '',
            package_count INTEGER CHECK (package_count IS NULL OR package_count > 0),
            items_of_order TEXT NOT NULL,
            PRIMARY KEY (delivery_date, printed_at)
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_print_history_printed_at
            ON shipping_instruction_print_history(printed_at);
         CREATE INDEX IF NOT EXISTS idx_print_history_shipping_date
            ON shipping_instruction_print_history(shipping_date);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Returns the current schema version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}
