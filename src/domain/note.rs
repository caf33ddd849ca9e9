//! Customer notes and the payload written with them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{CustomerId, NoteRowId, Rank};

/// Maximum length of a note body, in characters.
pub const MAX_NOTE_CHARS: usize = 2000;

/// Error returned when note content fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteError(String);

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNoteError {}

/// The caller-controlled part of a note.
///
/// The ranking machinery never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    content: String,
}

impl NoteInput {
    /// Validates note content.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the content is blank or longer than
    /// [`MAX_NOTE_CHARS`].
    pub fn new(content: impl Into<String>) -> Result<Self, ParseNoteError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ParseNoteError("note content cannot be empty".to_string()));
        }
        let chars = content.chars().count();
        if chars > MAX_NOTE_CHARS {
            return Err(ParseNoteError(format!(
                "note content is {} characters, limit is {}",
                chars, MAX_NOTE_CHARS
            )));
        }
        Ok(Self { content })
    }

    /// Returns the note body.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteRowId,
    customer_id: CustomerId,
    rank: Rank,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Assembles a note from stored columns.
    pub fn new(
        id: NoteRowId,
        customer_id: CustomerId,
        rank: Rank,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            rank,
            content: content.into(),
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> NoteRowId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the note was first written. Survives repositioning.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the payload portion, e.g. to reuse it for a move.
    pub fn to_input(&self) -> NoteInput {
        NoteInput {
            content: self.content.clone(),
        }
    }
}
