//! InvoiceTypeRepository implementation.

use super::SqliteStore;
use crate::domain::{InvoiceType, InvoiceTypeId, InvoiceTypeName};
use crate::store::{InvoiceTypeRepository, StoreError, StoreResult};
use rusqlite::{OptionalExtension, Row, params};

fn read_invoice_type(row: &Row<'_>) -> rusqlite::Result<(i64, String)> {
    Ok((row.get(0)?, row.get(1)?))
}

fn into_invoice_type((id, name): (i64, String)) -> StoreResult<InvoiceType> {
    let id = InvoiceTypeId::new(id).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    Ok(InvoiceType { id, name })
}

impl InvoiceTypeRepository for SqliteStore {
    fn create_invoice_type(&mut self, name: &InvoiceTypeName) -> StoreResult<InvoiceType> {
        let row = self.conn.query_row(
            "INSERT INTO invoice_types (name) VALUES (?1) RETURNING id, name",
            [name.as_str()],
            read_invoice_type,
        )?;
        into_invoice_type(row)
    }

    fn list_invoice_types(&self) -> StoreResult<Vec<InvoiceType>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM invoice_types ORDER BY id")?;
        let rows = stmt
            .query_map([], read_invoice_type)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(into_invoice_type).collect()
    }

    fn rename_invoice_type(
        &mut self,
        id: InvoiceTypeId,
        name: &InvoiceTypeName,
    ) -> StoreResult<InvoiceType> {
        let row = self
            .conn
            .query_row(
                "UPDATE invoice_types SET name = ?1 WHERE id = ?2 RETURNING id, name",
                params![name.as_str(), id.get()],
                read_invoice_type,
            )
            .optional()?
            .ok_or_else(|| StoreError::NotFound {
                what: format!("invoice type {}", id),
            })?;
        into_invoice_type(row)
    }

    fn delete_invoice_type(&mut self, id: InvoiceTypeId) -> StoreResult<usize> {
        Ok(self
            .conn
            .execute("DELETE FROM invoice_types WHERE id = ?1", [id.get()])?)
    }
}
