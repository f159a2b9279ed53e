//! Backend Bindings
//!
//! The seams between the client and the outside world: the task REST API
//! and the browser's blocking dialogs.

mod dialog;
mod todo;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

pub use dialog::{BrowserDialogs, Dialogs};
pub use todo::HttpTodoApi;

/// Task endpoints of the backend.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos`
    async fn list(&self) -> Result<Vec<Todo>, ApiError>;

    /// `POST /todos`
    async fn create(&self, new_todo: &NewTodo<'_>) -> Result<Todo, ApiError>;

    /// `PUT /todos/{id}`
    async fn update(&self, id: &TodoId, patch: &TodoPatch<'_>) -> Result<Todo, ApiError>;

    /// `DELETE /todos/{id}`
    async fn delete(&self, id: &TodoId) -> Result<(), ApiError>;
}
