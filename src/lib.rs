//! # Kanban Core
//!
//! Board state and drag-and-drop move resolution for a three-lane kanban
//! board.
//!
//! The crate holds the cards, the fixed lanes, and the rules that reorder
//! cards within and across lanes. Rendering and pointer hit-testing are left
//! to the caller, which feeds drag notifications in and reads board
//! snapshots out.

pub mod domain;
pub mod error;
pub mod interaction;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    card::{Card, CardId},
    column::{Column, ColumnId},
    command::Command,
    resolver::{resolve_drop, DropTarget, MovePlan},
};
pub use error::{KanbanError, Result};
pub use interaction::{DragController, DragOutcome, EditOutcome, NewCardForm, TitleEdit};
pub use store::{BoardObserver, BoardStore, SubscriptionId};
