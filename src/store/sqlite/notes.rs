//! NoteRepository implementation: ranked note mutations.

use super::SqliteStore;
use super::ranking::{count_notes, end_of_list, push_aside, slide_over};
use super::rows::{NOTE_COLUMNS, NoteRow, format_utc};
use super::transaction::Transaction;
use crate::domain::{CustomerId, Note, NoteInput, Rank};
use crate::store::{NoteRepository, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::{OptionalExtension, params};
use tracing::{info, instrument};

fn insert_note(
    tx: &Transaction<'_>,
    customer: CustomerId,
    rank: Rank,
    input: &NoteInput,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> StoreResult<Note> {
    let row = tx.conn().query_row(
        &format!(
            "INSERT INTO notes (customer_id, rank, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {NOTE_COLUMNS}"
        ),
        params![
            customer.get(),
            rank.as_i64(),
            input.content(),
            format_utc(created_at),
            format_utc(updated_at),
        ],
        NoteRow::read,
    )?;
    row.into_note()
}

/// Sets the customer's note count from the rows present plus `pending`.
///
/// Returns false when the customer does not exist.
fn sync_note_count(tx: &Transaction<'_>, customer: CustomerId, pending: i64) -> StoreResult<bool> {
    let total = count_notes(tx, customer)? + pending;
    let updated = tx.execute(
        "UPDATE customers SET notes = ?1 WHERE id = ?2",
        params![total, customer.get()],
    )?;
    Ok(updated > 0)
}

impl NoteRepository for SqliteStore {
    #[instrument(skip(self, input), fields(customer = %customer, rank = %desired_rank))]
    fn create_note(
        &mut self,
        customer: CustomerId,
        desired_rank: Rank,
        input: &NoteInput,
    ) -> StoreResult<Note> {
        let tx = self.transaction()?;

        // Count first so the customer row is written in the same unit as the note.
        if !sync_note_count(&tx, customer, 1)? {
            return Err(StoreError::customer_not_found(customer));
        }

        slide_over(&tx, customer)?;
        let rank = desired_rank.clamp_to(end_of_list(count_notes(&tx, customer)?)?);
        push_aside(&tx, customer, rank)?;

        let now = Utc::now();
        let note = insert_note(&tx, customer, rank, input, now, now)?;
        tx.commit()?;

        info!(note = %note.id(), rank = %note.rank(), "created note");
        Ok(note)
    }

    #[instrument(skip(self, input), fields(customer = %customer, from = %old_rank, to = %new_rank))]
    fn reposition_note(
        &mut self,
        customer: CustomerId,
        old_rank: Rank,
        new_rank: Rank,
        input: Option<&NoteInput>,
    ) -> StoreResult<Note> {
        let now = Utc::now();

        if old_rank == new_rank {
            let row = self
                .conn
                .query_row(
                    &format!(
                        "UPDATE notes SET content = COALESCE(?1, content), updated_at = ?2
                         WHERE customer_id = ?3 AND rank = ?4
                         RETURNING {NOTE_COLUMNS}"
                    ),
                    params![
                        input.map(NoteInput::content),
                        format_utc(now),
                        customer.get(),
                        old_rank.as_i64()
                    ],
                    NoteRow::read,
                )
                .optional()?
                .ok_or_else(|| StoreError::note_not_found(customer, old_rank))?;
            info!("updated note in place");
            return row.into_note();
        }

        let tx = self.transaction()?;

        let removed = tx
            .conn()
            .query_row(
                &format!(
                    "DELETE FROM notes WHERE customer_id = ?1 AND rank = ?2
                     RETURNING {NOTE_COLUMNS}"
                ),
                params![customer.get(), old_rank.as_i64()],
                NoteRow::read,
            )
            .optional()?
            .ok_or_else(|| StoreError::note_not_found(customer, old_rank))?
            .into_note()?;

        slide_over(&tx, customer)?;
        let rank = new_rank.clamp_to(end_of_list(count_notes(&tx, customer)?)?);
        push_aside(&tx, customer, rank)?;

        let payload = input.cloned().unwrap_or_else(|| removed.to_input());
        let note = insert_note(&tx, customer, rank, &payload, removed.created_at(), now)?;
        tx.commit()?;

        info!(note = %note.id(), rank = %note.rank(), "repositioned note");
        Ok(note)
    }

    #[instrument(skip(self), fields(customer = %customer, rank = %rank))]
    fn delete_note(&mut self, customer: CustomerId, rank: Rank) -> StoreResult<usize> {
        let tx = self.transaction()?;
        let removed = tx.execute(
            "DELETE FROM notes WHERE customer_id = ?1 AND rank = ?2",
            params![customer.get(), rank.as_i64()],
        )?;
        if removed > 0 {
            sync_note_count(&tx, customer, 0)?;
        }
        tx.commit()?;

        info!(removed, "deleted note");
        Ok(removed)
    }

    fn list_notes(&self, customer: CustomerId) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE customer_id = ?1 ORDER BY rank ASC"
        ))?;
        let rows = stmt
            .query_map([customer.get()], NoteRow::read)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(NoteRow::into_note).collect()
    }

    fn get_note(&self, customer: CustomerId, rank: Rank) -> StoreResult<Option<Note>> {
        self.conn
            .query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE customer_id = ?1 AND rank = ?2"),
                params![customer.get(), rank.as_i64()],
                NoteRow::read,
            )
            .optional()?
            .map(NoteRow::into_note)
            .transpose()
    }
}
