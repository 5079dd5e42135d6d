use crate::domain::column::ColumnId;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a card
///
/// Seeded cards use short numeric ids ("1" to "8"); cards created at runtime
/// get a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Generates a fresh, unique card id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub(crate) fn seed(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = KanbanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(KanbanError::InvalidCardId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CardId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CardId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Trims a user-supplied title, rejecting one that is blank after trimming
pub fn normalize_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column_id: ColumnId,
}

impl Card {
    /// Creates a card with an already-normalized title
    pub fn new(id: CardId, title: impl Into<String>, column_id: ColumnId) -> Self {
        Self {
            id,
            title: title.into(),
            column_id,
        }
    }

    /// Returns a copy of this card carrying a new title
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Returns a copy of this card placed in another column
    pub fn with_column(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }
}
