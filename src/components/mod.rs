//! UI Components
//!
//! Leptos components for the task list.

mod new_todo_form;
mod task_counters;
mod todo_item;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use task_counters::TaskCounters;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
