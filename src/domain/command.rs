use crate::domain::board::Board;
use crate::domain::card::{normalize_title, Card, CardId};
use crate::domain::column::ColumnId;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single mutation of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    AddCard {
        id: CardId,
        column_id: ColumnId,
        title: String,
    },
    DeleteCard {
        id: CardId,
    },
    UpdateCardTitle {
        id: CardId,
        title: String,
    },
    MoveCard {
        id: CardId,
        column_id: ColumnId,
        index: usize,
    },
}

impl Command {
    /// Builds an `AddCard` command with a freshly generated card id
    pub fn add_card(column_id: ColumnId, title: impl Into<String>) -> Self {
        Self::AddCard {
            id: CardId::generate(),
            column_id,
            title: title.into(),
        }
    }

    /// Card the command targets
    pub fn card_id(&self) -> &CardId {
        match self {
            Self::AddCard { id, .. }
            | Self::DeleteCard { id }
            | Self::UpdateCardTitle { id, .. }
            | Self::MoveCard { id, .. } => id,
        }
    }

    /// Computes the board that results from applying this command
    ///
    /// Returns `Ok(None)` when the command leaves the board as it is, which
    /// covers ids that no longer exist. Blank titles are rejected with
    /// [`KanbanError::EmptyTitle`](crate::error::KanbanError::EmptyTitle).
    pub fn apply(&self, board: &Board) -> Result<Option<Board>> {
        match self {
            Self::AddCard {
                id,
                column_id,
                title,
            } => {
                let title = normalize_title(title)?;
                if board.find_card(id.as_str()).is_some() {
                    return Ok(None);
                }
                Ok(Some(
                    board.with_card_added(Card::new(id.clone(), title, *column_id)),
                ))
            }
            Self::DeleteCard { id } => Ok(board.without_card(id.as_str())),
            Self::UpdateCardTitle { id, title } => {
                let title = normalize_title(title)?;
                Ok(board.with_card_title(id.as_str(), &title))
            }
            Self::MoveCard {
                id,
                column_id,
                index,
            } => Ok(board.with_card_moved(id.as_str(), *column_id, *index)),
        }
    }
}
