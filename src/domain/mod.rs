//! Core types: Customer, Note, Rank, InvoiceType, Printout, SearchWindow

mod customer;
mod ids;
mod invoice_type;
mod note;
mod printout;
mod rank;
mod search_window;

pub use customer::{Customer, CustomerInput, ParseCustomerError};
pub use ids::{CustomerId, InvoiceTypeId, NoteRowId, ParseIdError};
pub use invoice_type::{InvoiceType, InvoiceTypeName, ParseInvoiceTypeError};
pub use note::{MAX_NOTE_CHARS, Note, NoteInput, ParseNoteError};
pub use printout::{
    DATE_FORMAT, ParsePrintoutError, Printout, PrintoutDraft, PrintoutInput, PrintoutKey,
    SearchCategory, parse_date, parse_timestamp,
};
pub use rank::{ParseRankError, Rank};
pub use search_window::{DEFAULT_MAX_SPAN_DAYS, SearchRangeError, SearchWindow};
