//! Global Application State Store
//!
//! Uses Leptos reactive_stores so each row re-renders on its own.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Counters, Todo, TodoId};
use crate::rows::{row_mut, RowSet};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rendered rows, in display order
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Counters rescanned from every row whenever the rows change
pub fn counters_memo(store: AppStore) -> Memo<Counters> {
    Memo::new(move |_| store.todos().with(|rows| Counters::tally(rows)))
}

// ========================
// Store Helper Functions
// ========================

impl RowSet for AppStore {
    fn replace_all(&mut self, todos: Vec<Todo>) {
        *self.todos().write() = todos;
    }

    fn append_row(&mut self, todo: Todo) {
        self.todos().write().push(todo);
    }

    fn set_completed(&mut self, id: &TodoId, completed: bool) -> bool {
        // Check first so a miss does not notify subscribers.
        if !self.todos().with_untracked(|rows| rows.iter().any(|row| &row.id == id)) {
            return false;
        }
        row_mut(&mut self.todos().write(), id).map(|row| row.completed = completed).is_some()
    }

    fn set_title(&mut self, id: &TodoId, title: String) -> bool {
        if !self.todos().with_untracked(|rows| rows.iter().any(|row| &row.id == id)) {
            return false;
        }
        row_mut(&mut self.todos().write(), id).map(|row| row.title = title).is_some()
    }

    fn remove_row(&mut self, id: &TodoId) -> bool {
        if !self.todos().with_untracked(|rows| rows.iter().any(|row| &row.id == id)) {
            return false;
        }
        self.todos().write().retain(|row| &row.id != id);
        true
    }

    fn row_count(&self) -> usize {
        self.todos().with_untracked(|rows| rows.len())
    }

    fn completed_of(&self, id: &TodoId) -> Option<bool> {
        self.todos()
            .with_untracked(|rows| rows.iter().find(|row| &row.id == id).map(|row| row.completed))
    }
}
