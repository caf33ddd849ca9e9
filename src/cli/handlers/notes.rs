//! Note command handlers.

use anyhow::{Context, Result};

use super::invalid;
use crate::cli::output::{Output, OutputFormat, truncate_str};
use crate::cli::{NoteAddArgs, NoteListArgs, NoteRemoveArgs, NoteUpdateArgs};
use crate::domain::{Note, NoteInput, Rank};
use crate::store::{NoteRepository, StoreError};

fn print_note(verb: &str, note: &Note, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!(
            "{} note {} at rank {} for customer {}",
            verb,
            note.id(),
            note.rank(),
            note.customer_id()
        ),
        OutputFormat::Json => Output::new(note).print()?,
    }
    Ok(())
}

pub fn handle_note_list(args: &NoteListArgs, store: &impl NoteRepository) -> Result<()> {
    let notes = store
        .list_notes(args.customer)
        .with_context(|| format!("failed to list notes for customer {}", args.customer))?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }
            println!("{:>4}  {:<60}  {:>10}", "Rank", "Content", "Updated");
            println!(
                "{:>4}  {:<60}  {:>10}",
                "----",
                "------------------------------------------------------------",
                "----------"
            );
            for note in &notes {
                let content = note.content().replace('\n', " ");
                println!(
                    "{:>4}  {:<60}  {:>10}",
                    note.rank(),
                    truncate_str(&content, 60),
                    note.updated_at().format("%Y-%m-%d")
                );
            }
            println!();
            println!("{} note(s)", notes.len());
        }
        OutputFormat::Json => Output::new(&notes).print()?,
    }
    Ok(())
}

pub fn handle_note_add(args: &NoteAddArgs, store: &mut impl NoteRepository) -> Result<()> {
    let input = NoteInput::new(args.content.as_str()).map_err(invalid)?;
    let rank = args.rank.unwrap_or(Rank::LAST);
    let note = store
        .create_note(args.customer, rank, &input)
        .with_context(|| format!("failed to add note for customer {}", args.customer))?;
    print_note("Added", &note, args.format)
}

/// Works out the target rank and replacement content for `note update`.
///
/// Content of `None` tells the store to keep whatever the note holds when
/// the move runs.
pub fn resolve_update(args: &NoteUpdateArgs) -> Result<(Rank, Option<NoteInput>)> {
    if args.to.is_none() && args.content.is_none() {
        return Err(invalid("nothing to change: pass --to and/or --content").into());
    }

    let target = args.to.unwrap_or(args.rank);
    let input = args
        .content
        .as_deref()
        .map(NoteInput::new)
        .transpose()
        .map_err(invalid)?;
    Ok((target, input))
}

pub fn handle_note_update(args: &NoteUpdateArgs, store: &mut impl NoteRepository) -> Result<()> {
    let (target, input) = resolve_update(args)?;
    let note = store
        .reposition_note(args.customer, args.rank, target, input.as_ref())
        .with_context(|| {
            format!(
                "failed to update note at rank {} for customer {}",
                args.rank, args.customer
            )
        })?;
    print_note("Updated", &note, args.format)
}

pub fn handle_note_remove(args: &NoteRemoveArgs, store: &mut impl NoteRepository) -> Result<()> {
    let removed = store
        .delete_note(args.customer, args.rank)
        .with_context(|| format!("failed to delete note for customer {}", args.customer))?;
    if removed == 0 {
        return Err(StoreError::note_not_found(args.customer, args.rank).into());
    }
    println!(
        "Deleted note at rank {} for customer {}",
        args.rank, args.customer
    );
    Ok(())
}
