//! Row Set
//!
//! The rendered rows are the client's only cache of the task list. Every
//! patch after a successful response goes through this trait.

use crate::models::{Todo, TodoId};

/// Operations on the collection of rendered rows.
///
/// Lookups by id that miss return `false` and leave the rows untouched.
pub trait RowSet {
    /// Drop every row and render `todos` in the given order
    fn replace_all(&mut self, todos: Vec<Todo>);

    /// New rows always go at the end
    fn append_row(&mut self, todo: Todo);

    fn set_completed(&mut self, id: &TodoId, completed: bool) -> bool;

    fn set_title(&mut self, id: &TodoId, title: String) -> bool;

    fn remove_row(&mut self, id: &TodoId) -> bool;

    fn row_count(&self) -> usize;

    /// Completed flag of the row as last confirmed by the server
    fn completed_of(&self, id: &TodoId) -> Option<bool>;
}

impl RowSet for Vec<Todo> {
    fn replace_all(&mut self, todos: Vec<Todo>) {
        *self = todos;
    }

    fn append_row(&mut self, todo: Todo) {
        self.push(todo);
    }

    fn set_completed(&mut self, id: &TodoId, completed: bool) -> bool {
        row_mut(self, id).map(|row| row.completed = completed).is_some()
    }

    fn set_title(&mut self, id: &TodoId, title: String) -> bool {
        row_mut(self, id).map(|row| row.title = title).is_some()
    }

    fn remove_row(&mut self, id: &TodoId) -> bool {
        let before = Vec::len(self);
        self.retain(|row| &row.id != id);
        Vec::len(self) != before
    }

    fn row_count(&self) -> usize {
        Vec::len(self)
    }

    fn completed_of(&self, id: &TodoId) -> Option<bool> {
        self.iter().find(|row| &row.id == id).map(|row| row.completed)
    }
}

/// Find a row by id (shared by every `RowSet` backed by a `Vec<Todo>`)
pub fn row_mut<'a>(rows: &'a mut [Todo], id: &TodoId) -> Option<&'a mut Todo> {
    rows.iter_mut().find(|row| &row.id == id)
}
