//! Integer row identifiers assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError(String);

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a positive row id.
            pub fn new(value: i64) -> Result<Self, ParseIdError> {
                if value <= 0 {
                    return Err(ParseIdError(format!(
                        "{} id must be a positive integer, got {}",
                        $label, value
                    )));
                }
                Ok(Self(value))
            }

            /// Returns the raw row id.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let value: i64 = s
                    .parse()
                    .map_err(|_| ParseIdError(format!("invalid {} id: '{}'", $label, s)))?;
                Self::new(value)
            }
        }
    };
}

record_id!(
    /// Identifies a customer. Notes reference it as their owner.
    CustomerId,
    "customer"
);

record_id!(
    /// Identifies an invoice type.
    InvoiceTypeId,
    "invoice type"
);

record_id!(
    /// Identifies a single note row. Stable only until the note is moved.
    NoteRowId,
    "note"
);
