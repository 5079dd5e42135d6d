use crate::domain::card::{Card, CardId};
use crate::domain::column::{Column, ColumnId};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl BoardConfig {
    /// Parses a configuration from JSON and validates it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every lane appears exactly once with a non-blank title
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id) {
                return Err(KanbanError::ConfigError(format!(
                    "column '{}' is configured more than once",
                    column.id
                )));
            }
            if column.title.trim().is_empty() {
                return Err(KanbanError::ConfigError(format!(
                    "column '{}' has a blank title",
                    column.id
                )));
            }
        }

        if let Some(missing) = ColumnId::ALL.iter().find(|id| !seen.contains(*id)) {
            return Err(KanbanError::ConfigError(format!(
                "column '{}' is missing",
                missing
            )));
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            columns: ColumnId::ALL.into_iter().map(Column::from).collect(),
        }
    }
}

const SEED_CARDS: [(&str, &str, ColumnId); 8] = [
    ("1", "Create initial project plan", ColumnId::Todo),
    ("2", "Design landing page", ColumnId::Todo),
    ("3", "Review codebase structure", ColumnId::Todo),
    ("4", "Implement authentication", ColumnId::InProgress),
    ("5", "Set up database schema", ColumnId::InProgress),
    ("6", "Fix navbar bugs", ColumnId::InProgress),
    ("7", "Organize project repository", ColumnId::Done),
    ("8", "Write API documentation", ColumnId::Done),
];

/// Kanban board state
///
/// `cards` is a single sequence shared by all lanes. The order in which the
/// cards of one lane occur in it is that lane's display order; cards of
/// different lanes may interleave freely. Every transition returns a new
/// `Board` and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord")]
pub struct Board {
    config: BoardConfig,
    cards: Vec<Card>,
}

/// Unvalidated wire form of a [`Board`]
#[derive(Deserialize)]
struct BoardRecord {
    config: BoardConfig,
    cards: Vec<Card>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = KanbanError;

    fn try_from(record: BoardRecord) -> Result<Self> {
        Board::with_cards(record.config, record.cards)
    }
}

impl Board {
    /// Creates an empty board from a validated configuration
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_cards(config, Vec::new())
    }

    /// Creates a board holding the given cards, in the given order
    pub fn with_cards(config: BoardConfig, cards: Vec<Card>) -> Result<Self> {
        config.validate()?;

        let mut ids = HashSet::new();
        for card in &cards {
            if !ids.insert(card.id.as_str()) {
                return Err(KanbanError::ConfigError(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
            if card.title.trim().is_empty() {
                return Err(KanbanError::EmptyTitle);
            }
        }

        Ok(Self { config, cards })
    }

    /// The fixed starting board: three lanes and eight cards split 3/3/2
    pub fn seeded() -> Self {
        let cards = SEED_CARDS
            .iter()
            .map(|(id, title, column)| Card::new(CardId::seed(id), *title, *column))
            .collect();

        Self {
            config: BoardConfig::default(),
            cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Lanes in display order
    pub fn columns(&self) -> &[Column] {
        &self.config.columns
    }

    /// Every card, in storage order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn find_card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn find_column(&self, id: ColumnId) -> Option<&Column> {
        self.config.columns.iter().find(|col| col.id == id)
    }

    /// Cards of one lane, in display order
    pub fn column_cards(&self, column_id: ColumnId) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.column_id == column_id)
            .collect()
    }

    /// Number of cards in a lane
    pub fn column_len(&self, column_id: ColumnId) -> usize {
        self.cards
            .iter()
            .filter(|card| card.column_id == column_id)
            .count()
    }

    /// Lane and display index of a card
    pub fn position_of(&self, id: &str) -> Option<(ColumnId, usize)> {
        let card = self.find_card(id)?;
        let index = self
            .cards
            .iter()
            .filter(|c| c.column_id == card.column_id)
            .position(|c| c.id == id)?;
        Some((card.column_id, index))
    }

    /// Each lane alongside its cards, in lane order
    pub fn lanes(&self) -> impl Iterator<Item = (&Column, Vec<&Card>)> + '_ {
        self.config
            .columns
            .iter()
            .map(move |column| (column, self.column_cards(column.id)))
    }

    /// Appends a card, making it the last card of its lane
    pub fn with_card_added(&self, card: Card) -> Board {
        let mut cards = self.cards.clone();
        cards.push(card);
        self.replace_cards(cards)
    }

    /// Removes a card; `None` when no card has that id
    pub fn without_card(&self, id: &str) -> Option<Board> {
        self.find_card(id)?;
        let cards = self
            .cards
            .iter()
            .filter(|card| card.id != id)
            .cloned()
            .collect();
        Some(self.replace_cards(cards))
    }

    /// Replaces a card's title; `None` when the card is absent or already
    /// carries that title
    pub fn with_card_title(&self, id: &str, title: &str) -> Option<Board> {
        let current = self.find_card(id)?;
        if current.title == title {
            return None;
        }
        let cards = self
            .cards
            .iter()
            .map(|card| {
                if card.id == id {
                    card.with_title(title)
                } else {
                    card.clone()
                }
            })
            .collect();
        Some(self.replace_cards(cards))
    }

    /// Moves a card so that it ends up at `new_index` in `target`'s display
    /// order. Indexes past the end append. `None` when the card is absent or
    /// already sits at that position.
    pub fn with_card_moved(&self, id: &str, target: ColumnId, new_index: usize) -> Option<Board> {
        let card = self.find_card(id)?;

        if card.column_id == target {
            let mut lane: Vec<Card> = self
                .cards
                .iter()
                .filter(|c| c.column_id == target)
                .cloned()
                .collect();
            let old_index = lane.iter().position(|c| c.id == id)?;
            if old_index == new_index {
                return None;
            }

            let moved = lane.remove(old_index);
            let insert_at = new_index.min(lane.len());
            if insert_at == old_index {
                return None;
            }
            lane.insert(insert_at, moved);

            let cards = self
                .cards
                .iter()
                .filter(|c| c.column_id != target)
                .cloned()
                .chain(lane)
                .collect();
            return Some(self.replace_cards(cards));
        }

        let moved = card.with_column(target);
        let (mut lane, others): (Vec<Card>, Vec<Card>) = self
            .cards
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .partition(|c| c.column_id == target);

        let insert_at = new_index.min(lane.len());
        lane.insert(insert_at, moved);

        let cards = others.into_iter().chain(lane).collect();
        Some(self.replace_cards(cards))
    }

    fn replace_cards(&self, cards: Vec<Card>) -> Board {
        Board {
            config: self.config.clone(),
            cards,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded()
    }
}
