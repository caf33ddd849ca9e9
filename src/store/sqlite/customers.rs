//! CustomerRepository implementation.

use super::SqliteStore;
use super::rows::{CUSTOMER_COLUMNS, CustomerRow, format_utc};
use crate::domain::{Customer, CustomerId, CustomerInput};
use crate::store::{CustomerRepository, StoreError, StoreResult};
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tracing::info;

impl CustomerRepository for SqliteStore {
    fn create_customer(&mut self, input: &CustomerInput) -> StoreResult<Customer> {
        let row = self.conn.query_row(
            &format!(
                "INSERT INTO customers (name, address, phone, notes, created_at)
                 VALUES (?1, ?2, ?3, 0, ?4)
                 RETURNING {CUSTOMER_COLUMNS}"
            ),
            params![
                input.name(),
                input.address(),
                input.phone(),
                format_utc(Utc::now())
            ],
            CustomerRow::read,
        )?;
        let customer = row.into_customer()?;
        info!(customer = %customer.id, "created customer");
        Ok(customer)
    }

    fn get_customer(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        self.conn
            .query_row(
                &format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?1"),
                [id.get()],
                CustomerRow::read,
            )
            .optional()?
            .map(CustomerRow::into_customer)
            .transpose()
    }

    fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"))?;
        let rows = stmt
            .query_map([], CustomerRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(CustomerRow::into_customer).collect()
    }

    fn update_customer(
        &mut self,
        id: CustomerId,
        input: &CustomerInput,
    ) -> StoreResult<Customer> {
        self.conn
            .query_row(
                &format!(
                    "UPDATE customers SET name = ?1, address = ?2, phone = ?3
                     WHERE id = ?4
                     RETURNING {CUSTOMER_COLUMNS}"
                ),
                params![input.name(), input.address(), input.phone(), id.get()],
                CustomerRow::read,
            )
            .optional()?
            .ok_or_else(|| StoreError::customer_not_found(id))?
            .into_customer()
    }

    fn delete_customer(&mut self, id: CustomerId) -> StoreResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM customers WHERE id = ?1", [id.get()])?;
        info!(customer = %id, removed, "deleted customer");
        Ok(removed)
    }
}
