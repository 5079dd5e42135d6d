use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifier of one of the board's fixed lanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// Every lane, in default display order
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    /// Returns the wire form used by drag targets (`todo`, `in-progress`, `done`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Default header title for the lane
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Default accent color for the lane
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Todo => "#3b82f6",
            Self::InProgress => "#f97316",
            Self::Done => "#22c55e",
        }
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(crate::error::KanbanError::InvalidColumnId(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display configuration for a lane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
        }
    }
}

impl From<ColumnId> for Column {
    fn from(id: ColumnId) -> Self {
        Self::new(id, id.default_title(), id.default_color())
    }
}
