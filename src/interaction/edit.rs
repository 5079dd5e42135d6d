use crate::domain::{Board, CardId, ColumnId};
use crate::error::{KanbanError, Result};
use crate::store::BoardStore;
use tracing::debug;

/// How a title edit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    /// The draft was blank or unchanged; the card keeps its title
    Reverted,
}

/// In-place rename of a single card
#[derive(Debug, Clone)]
pub struct TitleEdit {
    card_id: CardId,
    draft: String,
}

impl TitleEdit {
    /// Starts editing with the card's current title as the draft
    pub fn begin(board: &Board, card_id: &CardId) -> Result<Self> {
        let card = board
            .find_card(card_id.as_str())
            .ok_or_else(|| KanbanError::CardNotFound(card_id.to_string()))?;
        Ok(Self {
            card_id: card.id.clone(),
            draft: card.title.clone(),
        })
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Discards the draft
    pub fn cancel(self) {
        debug!(card_id = %self.card_id, "Title edit cancelled");
    }

    /// Saves the trimmed draft if it is non-blank and differs from the
    /// current title
    pub fn commit(self, store: &mut BoardStore) -> Result<EditOutcome> {
        let board = store.snapshot();
        let card = board
            .find_card(self.card_id.as_str())
            .ok_or_else(|| KanbanError::CardNotFound(self.card_id.to_string()))?;

        let trimmed = self.draft.trim();
        if trimmed.is_empty() || trimmed == card.title {
            debug!(card_id = %self.card_id, "Title edit reverted");
            return Ok(EditOutcome::Reverted);
        }

        store.update_card_title(&self.card_id, trimmed)?;
        Ok(EditOutcome::Updated)
    }
}

/// The "add card" input shown at the top of a lane
#[derive(Debug, Clone)]
pub struct NewCardForm {
    column_id: ColumnId,
    open: bool,
    draft: String,
}

impl NewCardForm {
    pub fn new(column_id: ColumnId) -> Self {
        Self {
            column_id,
            open: false,
            draft: String::new(),
        }
    }

    pub fn column_id(&self) -> ColumnId {
        self.column_id
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn cancel(&mut self) {
        self.draft.clear();
        self.open = false;
    }

    /// Adds a card from the draft. A blank draft adds nothing and leaves
    /// the form open.
    pub fn submit(&mut self, store: &mut BoardStore) -> Result<Option<CardId>> {
        if self.draft.trim().is_empty() {
            return Ok(None);
        }

        let id = store.add_card(self.column_id, &self.draft)?;
        self.cancel();
        Ok(Some(id))
    }
}
