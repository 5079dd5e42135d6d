use crate::domain::{resolve_drop, Board, Card, CardId, Column, MovePlan};
use crate::store::BoardStore;
use std::str::FromStr;
use tracing::debug;

/// Result of a finished drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The card was moved as planned
    Moved(MovePlan),
    /// The drop resolved to the card's current position
    Unchanged(MovePlan),
    /// No target, or the target or dragged card could not be resolved
    Abandoned,
}

/// Tracks one drag gesture reported by the pointer layer
///
/// Only [`DragController::on_drag_end`] touches the board; start and over
/// notifications update transient display state.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<CardId>,
    over: Option<String>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_drag_start(&mut self, active_id: &str) {
        self.active = CardId::from_str(active_id).ok();
        self.over = None;
    }

    pub fn on_drag_over(&mut self, over_id: Option<&str>) {
        self.over = over_id.map(str::to_string);
    }

    /// Finishes the gesture and applies the resolved move
    pub fn on_drag_end(
        &mut self,
        store: &mut BoardStore,
        active_id: &str,
        over_id: Option<&str>,
    ) -> DragOutcome {
        self.clear();

        let board = store.snapshot();
        let Some(plan) = resolve_drop(&board, active_id, over_id) else {
            debug!(active_id, over_id, "Drag abandoned");
            return DragOutcome::Abandoned;
        };

        if store.move_card(&plan.card_id, plan.column_id, plan.index) {
            DragOutcome::Moved(plan)
        } else {
            DragOutcome::Unchanged(plan)
        }
    }

    pub fn on_drag_cancel(&mut self) {
        self.clear();
    }

    /// Card currently being dragged
    pub fn active(&self) -> Option<&CardId> {
        self.active.as_ref()
    }

    /// Target id last reported under the pointer
    pub fn hover(&self) -> Option<&str> {
        self.over.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The dragged card and its lane, for drawing the floating preview
    pub fn overlay<'a>(&self, board: &'a Board) -> Option<(&'a Card, &'a Column)> {
        let card = board.find_card(self.active.as_ref()?.as_str())?;
        let column = board.find_column(card.column_id)?;
        Some((card, column))
    }

    fn clear(&mut self) {
        self.active = None;
        self.over = None;
    }
}
