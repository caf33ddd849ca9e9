//! Rank maintenance for a customer's notes.
//!
//! Ranks are rewritten one row at a time because `(customer_id, rank)` is
//! unique and SQLite checks that constraint after each row. Both passes
//! choose a walk order in which the destination rank is always free:
//!
//! - [`slide_over`] walks ascending and only ever moves a row *down* to the
//!   next expected rank, which the rows before it have just vacated or
//!   never held.
//! - [`push_aside`] walks descending and moves rows *up* by one, so the
//!   row above has already moved out of the way.
//!
//! Both take an open [`Transaction`]; neither commits.

use super::rows::rank_from_column;
use super::transaction::Transaction;
use crate::domain::{CustomerId, Rank};
use crate::store::StoreResult;
use rusqlite::params;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
enum Direction {
    Ascending,
    Descending,
}

/// Reads the customer's ranks in the given order.
fn ranks(tx: &Transaction<'_>, customer: CustomerId, dir: Direction) -> StoreResult<Vec<Rank>> {
    let sql = match dir {
        Direction::Ascending => "SELECT rank FROM notes WHERE customer_id = ?1 ORDER BY rank ASC",
        Direction::Descending => "SELECT rank FROM notes WHERE customer_id = ?1 ORDER BY rank DESC",
    };
    let mut stmt = tx.conn().prepare(sql)?;
    let raw = stmt
        .query_map([customer.get()], |row| row.get::<_, i64>(0))?
        .collect::<rusqlite::Result<Vec<i64>>>()?;
    raw.into_iter().map(rank_from_column).collect()
}

fn move_rank(tx: &Transaction<'_>, customer: CustomerId, from: Rank, to: Rank) -> StoreResult<()> {
    tx.execute(
        "UPDATE notes SET rank = ?1 WHERE customer_id = ?2 AND rank = ?3",
        params![to.as_i64(), customer.get(), from.as_i64()],
    )?;
    trace!(customer = %customer, from = %from, to = %to, "moved note");
    Ok(())
}

/// Closes every gap in the customer's ranks.
///
/// Afterwards the ranks are exactly `1..=N` in their original relative
/// order. Rows already at their expected rank are not written. Returns the
/// number of rows rewritten.
pub(crate) fn slide_over(tx: &Transaction<'_>, customer: CustomerId) -> StoreResult<usize> {
    let mut rewritten = 0;
    let mut expected = Rank::FIRST;

    for actual in ranks(tx, customer, Direction::Ascending)? {
        if actual != expected {
            move_rank(tx, customer, actual, expected)?;
            rewritten += 1;
        }
        expected = expected.next();
    }

    if rewritten > 0 {
        debug!(customer = %customer, rewritten, "closed rank gaps");
    }
    Ok(rewritten)
}

/// Vacates `target` by moving every note at or after it one rank later.
///
/// Expects contiguous ranks, so run [`slide_over`] first in the same
/// transaction. Returns the number of rows shifted.
pub(crate) fn push_aside(
    tx: &Transaction<'_>,
    customer: CustomerId,
    target: Rank,
) -> StoreResult<usize> {
    let mut shifted = 0;

    for current in ranks(tx, customer, Direction::Descending)? {
        if current < target {
            break;
        }
        move_rank(tx, customer, current, current.next())?;
        shifted += 1;
    }

    if shifted > 0 {
        debug!(customer = %customer, target = %target, shifted, "vacated rank");
    }
    Ok(shifted)
}

/// Counts the customer's notes.
pub(crate) fn count_notes(tx: &Transaction<'_>, customer: CustomerId) -> StoreResult<i64> {
    Ok(tx.conn().query_row(
        "SELECT COUNT(*) FROM notes WHERE customer_id = ?1",
        [customer.get()],
        |row| row.get(0),
    )?)
}

/// The rank just past the end of a contiguous list of `count` notes.
pub(crate) fn end_of_list(count: i64) -> StoreResult<Rank> {
    rank_from_column(count + 1)
}
