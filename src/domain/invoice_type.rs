//! Invoice type metadata.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::InvoiceTypeId;

const MAX_NAME_CHARS: usize = 32;

/// A validated invoice type name.
///
/// Names are trimmed, non-empty, and at most 32 characters. Comparison is
/// exact; the store enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvoiceTypeName(String);

/// Error returned when an invoice type name is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInvoiceTypeError(String);

impl fmt::Display for ParseInvoiceTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseInvoiceTypeError {}

impl InvoiceTypeName {
    pub fn new(s: &str) -> Result<Self, ParseInvoiceTypeError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseInvoiceTypeError(
                "invoice type name cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(ParseInvoiceTypeError(format!(
                "invoice type name exceeds {} characters",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InvoiceTypeName {
    type Err = ParseInvoiceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A persisted invoice type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceType {
    pub id: InvoiceTypeId,
    pub name: String,
}
