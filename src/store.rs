use crate::{
    domain::{Board, Card, CardId, Column, ColumnId, Command},
    error::Result,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Receives the new board after every mutation that changed it
pub trait BoardObserver {
    fn board_changed(&self, board: &Arc<Board>);
}

impl<F> BoardObserver for F
where
    F: Fn(&Arc<Board>),
{
    fn board_changed(&self, board: &Arc<Board>) {
        self(board)
    }
}

/// Handle returned by [`BoardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single-writer owner of the board
///
/// Each command computes a complete new [`Board`] and swaps it in, so a
/// snapshot obtained earlier never changes underneath its holder.
pub struct BoardStore {
    board: Arc<Board>,
    observers: Vec<(SubscriptionId, Box<dyn BoardObserver>)>,
    next_subscription: u64,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current board snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Registers an observer notified after each change
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Adds a card at the end of `column_id` and returns its id
    pub fn add_card(&mut self, column_id: ColumnId, title: &str) -> Result<CardId> {
        let command = Command::add_card(column_id, title);
        let id = command.card_id().clone();
        self.dispatch(command)?;
        Ok(id)
    }

    /// Deletes a card; unknown ids are ignored
    pub fn delete_card(&mut self, card_id: &CardId) -> bool {
        self.apply_infallible(Command::DeleteCard {
            id: card_id.clone(),
        })
    }

    /// Renames a card. A blank title is rejected and the old title kept;
    /// unknown ids are ignored.
    pub fn update_card_title(&mut self, card_id: &CardId, title: &str) -> Result<bool> {
        self.dispatch(Command::UpdateCardTitle {
            id: card_id.clone(),
            title: title.to_string(),
        })
    }

    /// Moves a card to `new_index` within `target_column_id`; unknown ids
    /// are ignored
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        target_column_id: ColumnId,
        new_index: usize,
    ) -> bool {
        self.apply_infallible(Command::MoveCard {
            id: card_id.clone(),
            column_id: target_column_id,
            index: new_index,
        })
    }

    /// Applies a command, returning whether the board changed
    pub fn dispatch(&mut self, command: Command) -> Result<bool> {
        let next = match command.apply(&self.board) {
            Ok(next) => next,
            Err(err) => {
                warn!(card_id = %command.card_id(), error = %err, "Rejected board command");
                return Err(err);
            }
        };

        let Some(next) = next else {
            trace!(?command, "Board command left board unchanged");
            return Ok(false);
        };

        debug!(?command, "Applied board command");
        self.board = Arc::new(next);
        self.notify();
        Ok(true)
    }

    fn apply_infallible(&mut self, command: Command) -> bool {
        match self.dispatch(command) {
            Ok(changed) => changed,
            Err(err) => {
                warn!(error = %err, "Board command failed");
                false
            }
        }
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer.board_changed(&self.board);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::seeded())
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("board", &self.board)
            .field("observers", &self.observers.len())
            .finish()
    }
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(ColumnId),
        Delete(usize),
        Rename(usize),
        Move(usize, ColumnId, usize),
    }

    fn column() -> impl Strategy<Value = ColumnId> {
        prop_oneof![
            Just(ColumnId::Todo),
            Just(ColumnId::InProgress),
            Just(ColumnId::Done),
        ]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            column().prop_map(Op::Add),
            (0..16usize).prop_map(Op::Delete),
            (0..16usize).prop_map(Op::Rename),
            (0..16usize, column(), 0..8usize)
                .prop_map(|(card, col, index)| Op::Move(card, col, index)),
        ]
    }

    fn pick(store: &BoardStore, n: usize) -> CardId {
        let cards = store.cards();
        if cards.is_empty() {
            return "missing".parse().unwrap();
        }
        cards[n % cards.len()].id.clone()
    }

    fn lane(board: &Board, column: ColumnId) -> Vec<CardId> {
        board
            .column_cards(column)
            .into_iter()
            .map(|c| c.id.clone())
            .collect()
    }

    fn apply(store: &mut BoardStore, op: &Op) {
        match op {
            Op::Add(col) => {
                store.add_card(*col, "generated").unwrap();
            }
            Op::Delete(n) => {
                let id = pick(store, *n);
                store.delete_card(&id);
            }
            Op::Rename(n) => {
                let id = pick(store, *n);
                store.update_card_title(&id, "renamed").unwrap();
            }
            Op::Move(n, col, index) => {
                let id = pick(store, *n);
                store.move_card(&id, *col, *index);
            }
        }
    }

    proptest! {
        #[test]
        fn non_move_ops_keep_relative_order(ops in proptest::collection::vec(op(), 0..40)) {
            let mut store = BoardStore::default();
            for op in &ops {
                let before = store.snapshot();
                apply(&mut store, op);
                if matches!(op, Op::Move(..)) {
                    continue;
                }
                let after = store.snapshot();
                for col in ColumnId::ALL {
                    let old = lane(&before, col);
                    let new = lane(&after, col);
                    let kept_old: Vec<_> = old.iter().filter(|id| new.contains(id)).collect();
                    let kept_new: Vec<_> = new.iter().filter(|id| old.contains(id)).collect();
                    prop_assert_eq!(kept_old, kept_new);
                }
            }
        }

        #[test]
        fn delete_is_idempotent(ops in proptest::collection::vec(op(), 0..20), n in 0..16usize) {
            let mut store = BoardStore::default();
            for op in &ops {
                apply(&mut store, op);
            }
            let id = pick(&store, n);
            store.delete_card(&id);
            let once = store.snapshot();
            store.delete_card(&id);
            prop_assert_eq!(&*once, &*store.snapshot());
        }

        #[test]
        fn move_preserves_other_cards_order(
            ops in proptest::collection::vec(op(), 0..20),
            n in 0..16usize,
            target in column(),
            index in 0..8usize,
        ) {
            let mut store = BoardStore::default();
            for op in &ops {
                apply(&mut store, op);
            }
            prop_assume!(!store.cards().is_empty());

            let id = pick(&store, n);
            let before = store.snapshot();
            store.move_card(&id, target, index);
            let after = store.snapshot();

            prop_assert_eq!(before.cards().len(), after.cards().len());
            for col in ColumnId::ALL {
                let old: Vec<_> = lane(&before, col).into_iter().filter(|c| *c != id).collect();
                let new: Vec<_> = lane(&after, col).into_iter().filter(|c| *c != id).collect();
                prop_assert_eq!(old, new);
            }

            let (column, position) = after.position_of(id.as_str()).unwrap();
            prop_assert_eq!(column, target);
            prop_assert_eq!(position, index.min(after.column_len(target) - 1));
        }

        #[test]
        fn moving_to_current_position_is_noop(
            ops in proptest::collection::vec(op(), 0..20),
            n in 0..16usize,
        ) {
            let mut store = BoardStore::default();
            for op in &ops {
                apply(&mut store, op);
            }
            prop_assume!(!store.cards().is_empty());

            let id = pick(&store, n);
            let (column, index) = store.snapshot().position_of(id.as_str()).unwrap();
            prop_assert!(!store.move_card(&id, column, index));
        }
    }
}
