//! Drop resolution
//!
//! Turns the end of a drag gesture into the lane and index handed to the
//! board's move operation. The gesture layer reports raw target ids, which
//! may name a lane (the card was released over empty lane space) or another
//! card. Nothing here mutates the board.

use crate::domain::board::Board;
use crate::domain::card::CardId;
use crate::domain::column::ColumnId;
use crate::domain::command::Command;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a drag was released over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(ColumnId),
    Card(CardId),
}

impl DropTarget {
    /// Resolves a raw target id against the board. Lane ids win over card ids.
    pub fn resolve(board: &Board, over_id: &str) -> Option<Self> {
        if let Ok(column_id) = ColumnId::from_str(over_id) {
            if board.find_column(column_id).is_some() {
                return Some(Self::Column(column_id));
            }
        }
        board
            .find_card(over_id)
            .map(|card| Self::Card(card.id.clone()))
    }
}

/// Where a dropped card should go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub card_id: CardId,
    pub column_id: ColumnId,
    pub index: usize,
}

impl MovePlan {
    pub fn into_command(self) -> Command {
        Command::MoveCard {
            id: self.card_id,
            column_id: self.column_id,
            index: self.index,
        }
    }
}

/// Computes the move for a drag released over `over_id`
///
/// Returns `None` when the drag should be abandoned: no target, an unknown
/// active card, or a target that is neither a lane nor a card.
pub fn resolve_drop(board: &Board, active_id: &str, over_id: Option<&str>) -> Option<MovePlan> {
    let over_id = over_id?;
    let (active_column, active_index) = board.position_of(active_id)?;
    let card_id = board.find_card(active_id)?.id.clone();

    match DropTarget::resolve(board, over_id)? {
        DropTarget::Column(column_id) => Some(MovePlan {
            card_id,
            column_id,
            index: board.column_len(column_id),
        }),
        DropTarget::Card(over_card) => {
            let (column_id, over_index) = board.position_of(over_card.as_str())?;
            let index = if column_id == active_column {
                reorder_index(active_index, over_index)
            } else {
                over_index
            };
            Some(MovePlan {
                card_id,
                column_id,
                index,
            })
        }
    }
}

/// Index, in the lane's resulting order, for a card dragged from
/// `active_index` onto the card at `over_index` of the same lane.
///
/// Dragging forward lands after the hovered card, dragging backward lands
/// before it. The slot is picked in the current order and then shifted to
/// account for the dragged card leaving its old position.
fn reorder_index(active_index: usize, over_index: usize) -> usize {
    let slot = if active_index < over_index {
        over_index + 1
    } else {
        over_index
    };
    if slot > active_index {
        slot - 1
    } else {
        slot
    }
}
