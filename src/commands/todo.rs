//! Task Commands
//!
//! HTTP bindings for the task endpoints, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::TodoApi;
use crate::error::ApiError;
use crate::models::{NewTodo, Todo, TodoId, TodoPatch};

/// Characters left alone in an id path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base: String,
}

impl HttpTodoApi {
    /// `base` is the API prefix without trailing slash, e.g. `/api`
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base)
    }

    fn item_url(&self, id: &TodoId) -> String {
        let segment = id.to_string();
        format!("{}/todos/{}", self.base, utf8_percent_encode(&segment, PATH_SEGMENT))
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let response = Request::get(&self.collection_url()).send().await.map_err(network)?;
        read_json(response).await
    }

    async fn create(&self, new_todo: &NewTodo<'_>) -> Result<Todo, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(new_todo)
            .map_err(encode)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch<'_>) -> Result<Todo, ApiError> {
        let response = Request::put(&self.item_url(id))
            .json(patch)
            .map_err(encode)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn delete(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id)).send().await.map_err(network)?;
        // Body is not required; ignore whatever came back.
        check_status(response).map(|_| ())
    }
}

fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        log::debug!("[API] {} {} -> {}", response.url(), response.status_text(), response.status());
        Err(ApiError::Status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn encode(e: gloo_net::Error) -> ApiError {
    ApiError::Encode(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_url() {
        let api = HttpTodoApi::new("/api");
        assert_eq!(api.collection_url(), "/api/todos");
    }

    #[test]
    fn test_item_url_uses_id_as_single_segment() {
        let api = HttpTodoApi::new("https://todo.example.com/api");
        assert_eq!(api.item_url(&TodoId::Int(42)), "https://todo.example.com/api/todos/42");
        assert_eq!(api.item_url(&TodoId::Text("a b/c".into())), "https://todo.example.com/api/todos/a%20b%2Fc");
        assert_eq!(api.item_url(&TodoId::Text("task-1_x.y~z".into())), "https://todo.example.com/api/todos/task-1_x.y~z");
    }
}
