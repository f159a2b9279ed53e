//! Task List Client
//!
//! Load, create, toggle, rename and delete. Each operation issues at most one
//! request and patches the rows only after that request succeeds.

use crate::commands::{Dialogs, TodoApi};
use crate::error::{Action, ApiError, TodoError};
use crate::models::{NewTodo, TodoId, TodoPatch};
use crate::rows::RowSet;

const EDIT_PROMPT: &str = "Edit task";
const DELETE_CONFIRM: &str = "Delete this task?";

/// What an operation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Request succeeded and the rows were patched
    Applied,
    /// No request was made (blank input, cancelled prompt, declined confirm)
    Skipped,
    /// Request succeeded but the row is gone locally; nothing to patch
    RowMissing,
}

impl Outcome {
    fn from_patch(found: bool) -> Self {
        if found { Outcome::Applied } else { Outcome::RowMissing }
    }
}

#[derive(Debug, Clone)]
pub struct TodoClient<A, D> {
    api: A,
    dialogs: D,
}

impl<A: TodoApi, D: Dialogs> TodoClient<A, D> {
    pub fn new(api: A, dialogs: D) -> Self {
        Self { api, dialogs }
    }

    /// Replace every row with the server's list, in the order received.
    /// Returns the number of rows rendered.
    pub async fn load<R: RowSet>(&self, rows: &mut R) -> Result<usize, TodoError> {
        let todos = self.api.list().await.map_err(|e| self.fail(Action::Load, e))?;
        rows.replace_all(todos);
        let count = rows.row_count();
        log::info!("[TODO] loaded {} tasks", count);
        Ok(count)
    }

    /// Create a task from raw form input. Blank input is ignored silently.
    pub async fn create<R: RowSet>(&self, rows: &mut R, input: &str) -> Result<Outcome, TodoError> {
        let title = input.trim();
        if title.is_empty() {
            return Ok(Outcome::Skipped);
        }

        let created = self
            .api
            .create(&NewTodo { title })
            .await
            .map_err(|e| self.fail(Action::Add, e))?;
        log::debug!("[TODO] created {}", created.id);
        rows.append_row(created);
        Ok(Outcome::Applied)
    }

    /// Send the checkbox's new value. The row takes whatever the server
    /// answers, not `completed`.
    pub async fn toggle<R: RowSet>(&self, rows: &mut R, id: &TodoId, completed: bool) -> Result<Outcome, TodoError> {
        let updated = self
            .api
            .update(id, &TodoPatch::completed(completed))
            .await
            .map_err(|e| self.fail(Action::Update, e))?;
        Ok(Outcome::from_patch(rows.set_completed(id, updated.completed)))
    }

    /// Toggle from a checkbox change and return the value the checkbox
    /// should show: the server's answer on success, the pre-click value
    /// (`!completed`) when the request failed.
    pub async fn toggle_checkbox<R: RowSet>(&self, rows: &mut R, id: &TodoId, completed: bool) -> bool {
        match self.toggle(rows, id, completed).await {
            Ok(_) => rows.completed_of(id).unwrap_or(completed),
            Err(_) => !completed,
        }
    }

    /// Prompt for a new title seeded with `current_title`, then rename.
    pub async fn rename<R: RowSet>(&self, rows: &mut R, id: &TodoId, current_title: &str) -> Result<Outcome, TodoError> {
        let Some(next) = self.dialogs.prompt(EDIT_PROMPT, current_title) else {
            return Ok(Outcome::Skipped);
        };
        let title = next.trim();
        if title.is_empty() {
            return Err(self.report(TodoError::ValidationFailed));
        }

        let updated = self
            .api
            .update(id, &TodoPatch::title(title))
            .await
            .map_err(|e| self.fail(Action::Rename, e))?;
        Ok(Outcome::from_patch(rows.set_title(id, updated.title)))
    }

    /// Ask for confirmation, then delete.
    pub async fn delete<R: RowSet>(&self, rows: &mut R, id: &TodoId) -> Result<Outcome, TodoError> {
        if !self.dialogs.confirm(DELETE_CONFIRM) {
            return Ok(Outcome::Skipped);
        }

        self.api.delete(id).await.map_err(|e| self.fail(Action::Delete, e))?;
        log::debug!("[TODO] deleted {}", id);
        Ok(Outcome::from_patch(rows.remove_row(id)))
    }

    fn fail(&self, action: Action, source: ApiError) -> TodoError {
        log::warn!("[TODO] {:?} request failed: {}", action, source);
        self.report(TodoError::RequestFailed { action, source })
    }

    fn report(&self, err: TodoError) -> TodoError {
        self.dialogs.alert(&err.to_string());
        err
    }
}
