//! Command handlers for the CLI.

mod customers;
mod invoice_types;
mod notes;
mod printouts;


use std::fmt::Display;

use crate::store::StoreError;

pub use customers::{
    handle_customer_add, handle_customer_edit, handle_customer_list, handle_customer_remove,
    handle_customer_show,
};
pub use invoice_types::{
    handle_invoice_type_add, handle_invoice_type_list, handle_invoice_type_remove,
    handle_invoice_type_rename,
};
pub use notes::{
    handle_note_add, handle_note_list, handle_note_remove, handle_note_update, resolve_update,
};
pub use printouts::{handle_printout_add, handle_printout_remove, handle_printout_search};

// ===========================================
// Shared Utilities
// ===========================================

/// Turns a rejected argument into a validation failure (status 400).
pub(crate) fn invalid(err: impl Display) -> StoreError {
    StoreError::Validation(err.to_string())
}

/// Formats an optional field for a table cell.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
