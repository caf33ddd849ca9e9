//! Shipping-instruction printout history records.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Date format used for every date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a printout record fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrintoutError(String);

impl fmt::Display for ParsePrintoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParsePrintoutError {}

/// Raw printout fields as supplied by a caller.
///
/// Empty strings mean "not supplied". Use [`PrintoutInput::parse`] to
/// validate.
#[derive(Debug, Clone, Default)]
pub struct PrintoutDraft {
    pub delivery_date: String,
    pub delivery_time: String,
    pub printed_at: Option<String>,
    pub page_num: String,
    pub customer_name: String,
    pub customer_address: String,
    pub wholesaler: String,
    pub order_number: String,
    pub shipping_date: String,
    pub carrier: String,
    pub package_count: u32,
    pub items_of_order: String,
}

/// A validated printout ready to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintoutInput {
    pub delivery_date: NaiveDate,
    pub delivery_time: String,
    pub printed_at: Option<DateTime<FixedOffset>>,
    pub page_num: String,
    pub customer_name: String,
    pub customer_address: String,
    pub wholesaler: String,
    pub order_number: String,
    pub shipping_date: Option<NaiveDate>,
    pub carrier: String,
    /// `None` when the caller supplied zero packages.
    pub package_count: Option<u32>,
    pub items_of_order: String,
}

impl PrintoutInput {
    /// Validates a draft.
    ///
    /// # Errors
    ///
    /// Fails when the delivery date, customer name, customer address, or
    /// items are missing, when a date does not parse, or when a text field
    /// exceeds its length limit.
    pub fn parse(draft: PrintoutDraft) -> Result<Self, ParsePrintoutError> {
        let missing: Vec<&str> = [
            ("delivery date", &draft.delivery_date),
            ("customer name", &draft.customer_name),
            ("customer address", &draft.customer_address),
            ("items of order", &draft.items_of_order),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
        if !missing.is_empty() {
            return Err(ParsePrintoutError(format!(
                "required fields missing: {}",
                missing.join(", ")
            )));
        }

        check_len("delivery time", &draft.delivery_time, 32)?;
        check_len("page number", &draft.page_num, 8)?;
        check_len("customer name", &draft.customer_name, 60)?;
        check_len("customer address", &draft.customer_address, 96)?;
        check_len("wholesaler", &draft.wholesaler, 32)?;
        check_len("order number", &draft.order_number, 64)?;
        check_len("carrier", &draft.carrier, 32)?;

        let delivery_date = parse_date("delivery date", &draft.delivery_date)?;
        let shipping_date = if draft.shipping_date.trim().is_empty() {
            None
        } else {
            Some(parse_date("shipping date", &draft.shipping_date)?)
        };
        let printed_at = draft
            .printed_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_timestamp)
            .transpose()?;

        Ok(Self {
            delivery_date,
            delivery_time: draft.delivery_time,
            printed_at,
            page_num: draft.page_num,
            customer_name: draft.customer_name,
            customer_address: draft.customer_address,
            wholesaler: draft.wholesaler,
            order_number: draft.order_number,
            shipping_date,
            carrier: draft.carrier,
            package_count: (draft.package_count > 0).then_some(draft.package_count),
            items_of_order: draft.items_of_order,
        })
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), ParsePrintoutError> {
    if value.chars().count() > max {
        return Err(ParsePrintoutError(format!(
            "{} exceeds {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, s: &str) -> Result<NaiveDate, ParsePrintoutError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        ParsePrintoutError(format!(
            "invalid {} '{}' (expected YYYY-MM-DD)",
            field,
            s.trim()
        ))
    })
}

/// Parses an RFC 3339 timestamp with an explicit offset.
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>, ParsePrintoutError> {
    DateTime::parse_from_rfc3339(s.trim()).map_err(|_| {
        ParsePrintoutError(format!(
            "invalid timestamp '{}' (expected RFC 3339 with offset)",
            s.trim()
        ))
    })
}

/// A recorded printout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Printout {
    pub delivery_date: NaiveDate,
    pub delivery_time: String,
    pub printed_at: DateTime<FixedOffset>,
    pub page_num: String,
    pub customer_name: String,
    pub customer_address: String,
    pub wholesaler: String,
    pub order_number: String,
    pub shipping_date: NaiveDate,
    pub carrier: String,
    pub package_count: Option<u32>,
    pub items_of_order: String,
}

impl Printout {
    pub fn key(&self) -> PrintoutKey {
        PrintoutKey {
            delivery_date: self.delivery_date,
            printed_at: self.printed_at,
        }
    }
}

/// Identifies one printout: the delivery date plus the moment it was printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrintoutKey {
    pub delivery_date: NaiveDate,
    pub printed_at: DateTime<FixedOffset>,
}

/// Which column a printout search filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCategory {
    DeliveryDate,
    ShippingDate,
    PrintedAt,
}

impl SearchCategory {
    /// Returns the column this category searches.
    pub fn column(self) -> &'static str {
        match self {
            SearchCategory::DeliveryDate => "delivery_date",
            SearchCategory::ShippingDate => "shipping_date",
            SearchCategory::PrintedAt => "printed_at",
        }
    }

    /// Returns true when the column holds a timestamp rather than a date.
    pub fn is_timestamp(self) -> bool {
        matches!(self, SearchCategory::PrintedAt)
    }
}

impl FromStr for SearchCategory {
    type Err = ParsePrintoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").as_str() {
            "delivery_date" => Ok(SearchCategory::DeliveryDate),
            "shipping_date" => Ok(SearchCategory::ShippingDate),
            "printed_at" => Ok(SearchCategory::PrintedAt),
            other => Err(ParsePrintoutError(format!(
                "unknown search category '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> PrintoutDraft {
        PrintoutDraft {
            delivery_date: "2024-03-02".to_string(),
            delivery_time: "AM".to_string(),
            printed_at: None,
            page_num: "1/2".to_string(),
            customer_name: "Sato".to_string(),
            customer_address: "1-2-3 Chuo".to_string(),
            wholesaler: "North".to_string(),
            order_number: "A-100".to_string(),
            shipping_date: String::new(),
            carrier: "Yamato".to_string(),
            package_count: 0,
            items_of_order: "rice x2".to_string(),
        }
    }

    #[test]
    fn parse_valid_draft() {
        let input = PrintoutInput::parse(draft()).unwrap();
        assert_eq!(
            input.delivery_date,
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
        assert_eq!(input.shipping_date, None);
        assert_eq!(input.package_count, None);
        assert_eq!(input.printed_at, None);
    }

    #[test]
    fn missing_required_fields_are_listed() {
        let mut d = draft();
        d.customer_name = String::new();
        d.items_of_order = "  ".to_string();
        let err = PrintoutInput::parse(d).unwrap_err().to_string();
        assert!(err.contains("customer name"));
        assert!(err.contains("items of order"));
        assert!(!err.contains("delivery date"));
    }

    #[test]
    fn field_lengths_are_limited() {
        let mut d = draft();
        d.page_num = "123456789".to_string();
        assert!(PrintoutInput::parse(d).is_err());
    }

    #[test]
    fn optional_values_are_kept_when_supplied() {
        let mut d = draft();
        d.shipping_date = "2024-03-01".to_string();
        d.package_count = 3;
        d.printed_at = Some("2024-03-01T09:15:00+09:00".to_string());
        let input = PrintoutInput::parse(d).unwrap();
        assert_eq!(
            input.shipping_date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(input.package_count, Some(3));
        assert!(input.printed_at.is_some());
    }

    #[test]
    fn bad_dates_are_rejected() {
        let mut d = draft();
        d.delivery_date = "2024/03/02".to_string();
        assert!(PrintoutInput::parse(d).is_err());

        let mut d = draft();
        d.printed_at = Some("yesterday".to_string());
        assert!(PrintoutInput::parse(d).is_err());
    }

    #[test]
    fn category_accepts_dash_or_underscore() {
        assert_eq!(
            "printed-at".parse::<SearchCategory>().unwrap(),
            SearchCategory::PrintedAt
        );
        assert_eq!(
            "shipping_date".parse::<SearchCategory>().unwrap(),
            SearchCategory::ShippingDate
        );
        assert!("created".parse::<SearchCategory>().is_err());
    }
}
