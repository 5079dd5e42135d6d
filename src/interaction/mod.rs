//! Presentation-side state machines driving the store: drag gestures, inline
//! title editing and the per-lane "add card" form.

pub mod drag;
pub mod edit;

pub use drag::{DragController, DragOutcome};
pub use edit::{EditOutcome, NewCardForm, TitleEdit};
