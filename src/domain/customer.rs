//! Customers that own notes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::CustomerId;

const MAX_NAME_CHARS: usize = 60;
const MAX_ADDRESS_CHARS: usize = 96;
const MAX_PHONE_CHARS: usize = 32;

/// Error returned when customer fields fail validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCustomerError(String);

impl fmt::Display for ParseCustomerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCustomerError {}

/// Validated fields for creating or editing a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInput {
    name: String,
    address: Option<String>,
    phone: Option<String>,
}

impl CustomerInput {
    /// Validates customer fields.
    ///
    /// The name is trimmed and must not be empty. Blank optional fields are
    /// treated as absent.
    pub fn new(
        name: &str,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Self, ParseCustomerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseCustomerError("customer name cannot be empty".to_string()));
        }
        check_len("name", name, MAX_NAME_CHARS)?;

        let address = normalize_optional(address);
        if let Some(address) = &address {
            check_len("address", address, MAX_ADDRESS_CHARS)?;
        }

        let phone = normalize_optional(phone);
        if let Some(phone) = &phone {
            check_len("phone", phone, MAX_PHONE_CHARS)?;
        }

        Ok(Self {
            name: name.to_string(),
            address,
            phone,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ParseCustomerError> {
    if value.chars().count() > max {
        return Err(ParseCustomerError(format!(
            "customer {} exceeds {} characters",
            field, max
        )));
    }
    Ok(())
}

/// A persisted customer.
///
/// `notes` is a denormalized count of the customer's notes, kept in step
/// with the notes table by every note mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub notes: u32,
    pub created_at: DateTime<Utc>,
}
