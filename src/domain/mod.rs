pub mod board;
pub mod card;
pub mod column;
pub mod command;
pub mod resolver;

pub use board::{Board, BoardConfig};
pub use card::{normalize_title, Card, CardId};
pub use column::{Column, ColumnId};
pub use command::Command;
pub use resolver::{resolve_drop, DropTarget, MovePlan};
