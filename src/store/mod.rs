//! SQLite record store: schema, transactions, repositories, and rank upkeep

mod repository;
mod schema;
mod sqlite;

pub use repository::{
    CustomerRepository, InvoiceTypeRepository, NoteRepository, PrintoutRepository, StoreError,
    StoreResult,
};
pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use sqlite::{
    DEFAULT_BUSY_TIMEOUT, DEFAULT_UTC_OFFSET_HOURS, SqliteStore, StoreSettings, Transaction,
};
