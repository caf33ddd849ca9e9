//! Repository traits and the store error type.

use crate::domain::{
    Customer, CustomerId, CustomerInput, InvoiceType, InvoiceTypeId, InvoiceTypeName, Note,
    NoteInput, Printout, PrintoutInput, PrintoutKey, Rank, SearchCategory, SearchRangeError,
};
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
///
/// Every variant maps to an HTTP-style status code through
/// [`StoreError::status`], so callers can report failures uniformly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read or write inside the database failed. The enclosing
    /// transaction has been rolled back.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The requested row does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    /// Caller input was rejected before any transaction opened.
    #[error("invalid request: {0}")]
    Validation(String),

    /// A stored value could not be interpreted.
    #[error("corrupt stored value: {0}")]
    Corrupt(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns the HTTP-style status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::NotFound { .. } => 404,
            StoreError::Database(_) | StoreError::Corrupt(_) | StoreError::Io { .. } => 500,
        }
    }

    pub(crate) fn customer_not_found(id: CustomerId) -> Self {
        StoreError::NotFound {
            what: format!("customer {}", id),
        }
    }

    pub(crate) fn note_not_found(customer: CustomerId, rank: Rank) -> Self {
        StoreError::NotFound {
            what: format!("note at rank {} for customer {}", rank, customer),
        }
    }
}

impl From<SearchRangeError> for StoreError {
    fn from(err: SearchRangeError) -> Self {
        StoreError::Validation(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Repository Traits
// ===========================================

/// Ranked notes belonging to customers.
///
/// Every mutating operation is one transaction. After a successful
/// `create_note` or `reposition_note` the customer's ranks are exactly
/// `1..=N`.
pub trait NoteRepository {
    /// Inserts a note at `desired_rank`, pushing later notes down.
    ///
    /// Ranks past the end of the list are clamped to `N + 1`.
    fn create_note(
        &mut self,
        customer: CustomerId,
        desired_rank: Rank,
        input: &NoteInput,
    ) -> StoreResult<Note>;

    /// Moves the note at `old_rank` to `new_rank`, replacing its payload.
    ///
    /// With `input` of `None` the note keeps the content it has when the
    /// transaction reads it. When the ranks are equal only the payload is
    /// updated.
    fn reposition_note(
        &mut self,
        customer: CustomerId,
        old_rank: Rank,
        new_rank: Rank,
        input: Option<&NoteInput>,
    ) -> StoreResult<Note>;

    /// Deletes the note at exactly `rank`. Returns the number of rows removed.
    ///
    /// Does not close the gap left behind; the next insert does.
    fn delete_note(&mut self, customer: CustomerId, rank: Rank) -> StoreResult<usize>;

    /// Lists a customer's notes in ascending rank order.
    fn list_notes(&self, customer: CustomerId) -> StoreResult<Vec<Note>>;

    /// Retrieves the note at `rank`, if any.
    fn get_note(&self, customer: CustomerId, rank: Rank) -> StoreResult<Option<Note>>;
}

/// Customer records.
pub trait CustomerRepository {
    fn create_customer(&mut self, input: &CustomerInput) -> StoreResult<Customer>;

    fn get_customer(&self, id: CustomerId) -> StoreResult<Option<Customer>>;

    /// Lists all customers ordered by id.
    fn list_customers(&self) -> StoreResult<Vec<Customer>>;

    /// Replaces a customer's contact fields. Fails with `NotFound` if absent.
    fn update_customer(&mut self, id: CustomerId, input: &CustomerInput)
    -> StoreResult<Customer>;

    /// Deletes a customer and, by cascade, their notes.
    fn delete_customer(&mut self, id: CustomerId) -> StoreResult<usize>;
}

/// Invoice type metadata.
pub trait InvoiceTypeRepository {
    fn create_invoice_type(&mut self, name: &InvoiceTypeName) -> StoreResult<InvoiceType>;

    /// Lists all invoice types ordered by id.
    fn list_invoice_types(&self) -> StoreResult<Vec<InvoiceType>>;

    fn rename_invoice_type(
        &mut self,
        id: InvoiceTypeId,
        name: &InvoiceTypeName,
    ) -> StoreResult<InvoiceType>;

    fn delete_invoice_type(&mut self, id: InvoiceTypeId) -> StoreResult<usize>;
}

/// Printed shipping-instruction history.
pub trait PrintoutRepository {
    /// Records a printout and returns its key.
    fn record_printout(&mut self, input: &PrintoutInput) -> StoreResult<PrintoutKey>;

    /// Searches by one date column.
    ///
    /// Fails with `Validation` when the two dates span more than the
    /// configured limit.
    fn search_printouts(
        &self,
        category: SearchCategory,
        a: Option<NaiveDate>,
        b: Option<NaiveDate>,
    ) -> StoreResult<Vec<Printout>>;

    /// Deletes one printout. Returns the number of rows removed.
    fn delete_printout(&mut self, key: &PrintoutKey) -> StoreResult<usize>;
}
