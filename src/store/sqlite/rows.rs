//! Conversions between stored columns and domain types.

use crate::domain::{
    Customer, CustomerId, DATE_FORMAT, Note, NoteRowId, Printout, Rank,
};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use rusqlite::Row;

/// Columns selected for a note, in `NoteRow::read` order.
pub(crate) const NOTE_COLUMNS: &str = "id, customer_id, rank, content, created_at, updated_at";

/// Columns selected for a customer, in `CustomerRow::read` order.
pub(crate) const CUSTOMER_COLUMNS: &str = "id, name, address, phone, notes, created_at";

/// Columns selected for a printout, in `PrintoutRow::read` order.
pub(crate) const PRINTOUT_COLUMNS: &str = "delivery_date, delivery_time_str, printed_at, page_num_str,
     customer_name, customer_address, wholesaler, order_number, shipping_date, carrier,
     package_count, items_of_order";

pub(crate) fn format_utc(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Formats a printout timestamp. All stored values share one offset so
/// that text comparison against `YYYY-MM-DD` bounds orders correctly.
pub(crate) fn format_local(ts: DateTime<FixedOffset>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset)
        .to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_utc(column: &str, s: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("invalid {} timestamp '{}': {}", column, s, e)))
}

fn parse_date(column: &str, s: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| StoreError::Corrupt(format!("invalid {} date '{}': {}", column, s, e)))
}

pub(crate) fn rank_from_column(value: i64) -> StoreResult<Rank> {
    Rank::from_i64(value).map_err(|e| StoreError::Corrupt(e.to_string()))
}

fn customer_id_from_column(value: i64) -> StoreResult<CustomerId> {
    CustomerId::new(value).map_err(|e| StoreError::Corrupt(e.to_string()))
}

// ===========================================
// Notes
// ===========================================

/// A note row as SQLite returns it.
pub(crate) struct NoteRow {
    id: i64,
    customer_id: i64,
    rank: i64,
    content: String,
    created_at: String,
    updated_at: String,
}

impl NoteRow {
    pub(crate) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            customer_id: row.get(1)?,
            rank: row.get(2)?,
            content: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }

    pub(crate) fn into_note(self) -> StoreResult<Note> {
        let id = NoteRowId::new(self.id).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(Note::new(
            id,
            customer_id_from_column(self.customer_id)?,
            rank_from_column(self.rank)?,
            self.content,
            parse_utc("created_at", &self.created_at)?,
            parse_utc("updated_at", &self.updated_at)?,
        ))
    }
}

// ===========================================
// Customers
// ===========================================

pub(crate) struct CustomerRow {
    id: i64,
    name: String,
    address: Option<String>,
    phone: Option<String>,
    notes: i64,
    created_at: String,
}

impl CustomerRow {
    pub(crate) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            address: row.get(2)?,
            phone: row.get(3)?,
            notes: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    pub(crate) fn into_customer(self) -> StoreResult<Customer> {
        let notes = u32::try_from(self.notes)
            .map_err(|_| StoreError::Corrupt(format!("invalid note count {}", self.notes)))?;
        Ok(Customer {
            id: customer_id_from_column(self.id)?,
            name: self.name,
            address: self.address,
            phone: self.phone,
            notes,
            created_at: parse_utc("created_at", &self.created_at)?,
        })
    }
}

// ===========================================
// Printouts
// ===========================================

pub(crate) struct PrintoutRow {
    delivery_date: String,
    delivery_time: String,
    printed_at: String,
    page_num: String,
    customer_name: String,
    customer_address: String,
    wholesaler: String,
    order_number: String,
    shipping_date: String,
    carrier: String,
    package_count: Option<i64>,
    items_of_order: String,
}

impl PrintoutRow {
    pub(crate) fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            delivery_date: row.get(0)?,
            delivery_time: row.get(1)?,
            printed_at: row.get(2)?,
            page_num: row.get(3)?,
            customer_name: row.get(4)?,
            customer_address: row.get(5)?,
            wholesaler: row.get(6)?,
            order_number: row.get(7)?,
            shipping_date: row.get(8)?,
            carrier: row.get(9)?,
            package_count: row.get(10)?,
            items_of_order: row.get(11)?,
        })
    }

    pub(crate) fn into_printout(self) -> StoreResult<Printout> {
        let printed_at = DateTime::parse_from_rfc3339(&self.printed_at).map_err(|e| {
            StoreError::Corrupt(format!("invalid printed_at '{}': {}", self.printed_at, e))
        })?;
        let package_count = self
            .package_count
            .map(|n| {
                u32::try_from(n)
                    .map_err(|_| StoreError::Corrupt(format!("invalid package count {}", n)))
            })
            .transpose()?;
        Ok(Printout {
            delivery_date: parse_date("delivery_date", &self.delivery_date)?,
            delivery_time: self.delivery_time,
            printed_at,
            page_num: self.page_num,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            wholesaler: self.wholesaler,
            order_number: self.order_number,
            shipping_date: parse_date("shipping_date", &self.shipping_date)?,
            carrier: self.carrier,
            package_count,
            items_of_order: self.items_of_order,
        })
    }
}
