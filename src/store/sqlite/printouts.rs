//! PrintoutRepository implementation.

use super::SqliteStore;
use super::rows::{PRINTOUT_COLUMNS, PrintoutRow, format_date, format_local};
use crate::domain::{PrintoutInput, PrintoutKey, Printout, SearchCategory, SearchWindow};
use crate::store::{PrintoutRepository, StoreResult};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, params_from_iter};
use tracing::{debug, warn};

impl SqliteStore {
    /// Today's date at the configured offset.
    pub fn today(&self) -> NaiveDate {
        Utc::now()
            .with_timezone(&self.settings.utc_offset)
            .date_naive()
    }
}

impl PrintoutRepository for SqliteStore {
    fn record_printout(&mut self, input: &PrintoutInput) -> StoreResult<PrintoutKey> {
        let offset = self.settings.utc_offset;
        let printed_at = input
            .printed_at
            .unwrap_or_else(|| Utc::now().with_timezone(&offset))
            .with_timezone(&offset);
        // Without an explicit shipping date the printout ships the day it was printed.
        let shipping_date = input.shipping_date.unwrap_or(printed_at.date_naive());

        self.conn.execute(
            "INSERT INTO shipping_instruction_print_history (
                delivery_date, delivery_time_str, printed_at, page_num_str, customer_name,
                customer_address, wholesaler, order_number, shipping_date, carrier,
                package_count, items_of_order
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                format_date(input.delivery_date),
                input.delivery_time,
                format_local(printed_at, offset),
                input.page_num,
                input.customer_name,
                input.customer_address,
                input.wholesaler,
                input.order_number,
                format_date(shipping_date),
                input.carrier,
                input.package_count,
                input.items_of_order,
            ],
        )?;

        debug!(delivery_date = %input.delivery_date, printed_at = %printed_at, "recorded printout");
        Ok(PrintoutKey {
            delivery_date: input.delivery_date,
            printed_at,
        })
    }

    fn search_printouts(
        &self,
        category: SearchCategory,
        a: Option<NaiveDate>,
        b: Option<NaiveDate>,
    ) -> StoreResult<Vec<Printout>> {
        let window = SearchWindow::resolve(a, b, self.today(), self.settings.max_search_days)
            .inspect_err(|e| warn!(error = %e, "rejected printout search"))?;

        let column = category.column();
        let mut bounds = vec![format_date(window.start())];
        let filter = if category.is_timestamp() || !window.is_single_day() {
            bounds.push(format_date(window.end_exclusive()));
            format!("{column} >= ?1 AND {column} < ?2")
        } else {
            format!("{column} = ?1")
        };

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PRINTOUT_COLUMNS} FROM shipping_instruction_print_history
             WHERE {filter} ORDER BY {column}"
        ))?;
        let rows = stmt
            .query_map(params_from_iter(bounds.iter()), PrintoutRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(PrintoutRow::into_printout).collect()
    }

    fn delete_printout(&mut self, key: &PrintoutKey) -> StoreResult<usize> {
        Ok(self.conn.execute(
            "DELETE FROM shipping_instruction_print_history
             WHERE delivery_date = ?1 AND printed_at = ?2",
            params![
                format_date(key.delivery_date),
                format_local(key.printed_at, self.settings.utc_offset),
            ],
        )?)
    }
}
