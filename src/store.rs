//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! sole owner of the in-memory columns and tasks; the view layer only reads.
//! Both collections are only ever replaced wholesale by reload completions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Column, Task};

/// Initialization state machine for the one-time bootstrap.
///
/// Seeding default columns must happen at most once per session, so the
/// guard is an explicit state transition rather than a side effect of how
/// often the loading effect happens to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Unstarted,
    Loading,
    Loaded,
    Failed,
}

impl BootstrapPhase {
    /// Attempt the `Unstarted -> Loading` transition.
    ///
    /// Returns the next phase and whether this caller won the transition.
    /// Only the winner is allowed to seed default columns.
    pub fn begin(self) -> (Self, bool) {
        match self {
            Self::Unstarted => (Self::Loading, true),
            other => (other, false),
        }
    }
}

/// Global board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All columns, as last fetched
    pub columns: Vec<Column>,
    /// All tasks across all columns, as last fetched
    pub tasks: Vec<Task>,
    /// Bootstrap state machine
    pub phase: BootstrapPhase,
    /// Last mutation/fetch failure, surfaced by the error banner
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace both collections at once (full reload, no partial merge)
pub fn store_set_board(store: &BoardStore, columns: Vec<Column>, tasks: Vec<Task>) {
    store.columns().set(columns);
    store.tasks().set(tasks);
}

/// Try to arm the one-time seed guard. Returns true for exactly one caller
/// per session; the transition is applied synchronously before any await.
pub fn store_begin_bootstrap(store: &BoardStore) -> bool {
    let (next, won) = store.phase().get_untracked().begin();
    if won {
        store.phase().set(next);
    }
    won
}

/// Record a failure for the error banner
pub fn store_set_error(store: &BoardStore, message: String) {
    store.last_error().set(Some(message));
}

/// Clear the error banner
pub fn store_clear_error(store: &BoardStore) {
    store.last_error().set(None);
}
