//! Frontend Models
//!
//! Data structures matching the task API payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
///
/// Opaque to the client. The reference backend hands out integers, other
/// backends may use strings; whichever shape arrives is sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// POST body for creating a task
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}

/// PUT body; only the fields being changed are sent
#[derive(Debug, Default, Serialize)]
pub struct TodoPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> TodoPatch<'a> {
    pub fn title(title: &'a str) -> Self {
        Self { title: Some(title), completed: None }
    }

    pub fn completed(completed: bool) -> Self {
        Self { title: None, completed: Some(completed) }
    }
}

/// Completed / uncompleted totals derived from the current rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub completed: usize,
    pub uncompleted: usize,
}

impl Counters {
    /// Rescan every row; nothing is tracked incrementally.
    pub fn tally(rows: &[Todo]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, todo| {
            if todo.completed {
                acc.completed += 1;
            } else {
                acc.uncompleted += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo { id: TodoId::Int(id), title: format!("Task {}", id), completed }
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let from_int: Todo = serde_json::from_str(r#"{"id":7,"title":"a","completed":false}"#).unwrap();
        assert_eq!(from_int.id, TodoId::Int(7));
        assert_eq!(from_int.id.to_string(), "7");

        let from_str: Todo = serde_json::from_str(r#"{"id":"x","title":"Buy milk","completed":false}"#).unwrap();
        assert_eq!(from_str.id, TodoId::Text("x".into()));
        assert_eq!(from_str.id.to_string(), "x");
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let toggle = serde_json::to_string(&TodoPatch::completed(true)).unwrap();
        assert_eq!(toggle, r#"{"completed":true}"#);

        let rename = serde_json::to_string(&TodoPatch::title("New name")).unwrap();
        assert_eq!(rename, r#"{"title":"New name"}"#);
    }

    #[test]
    fn test_counters_tally() {
        let rows = vec![todo(1, true), todo(2, false), todo(3, false)];
        let counters = Counters::tally(&rows);
        assert_eq!(counters.completed, 1);
        assert_eq!(counters.uncompleted, 2);
        assert_eq!(counters.completed + counters.uncompleted, rows.len());

        assert_eq!(Counters::tally(&[]), Counters::default());
    }
}
