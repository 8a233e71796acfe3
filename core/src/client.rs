//! Stateless request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no state between calls.
//! Each route is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorMessage, Todo, TodoData};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "todos".to_string())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &TodoData) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "todos".to_string(), input)
    }

    /// The whole todo, id included, is sent as the replacement value.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("todos/{}", todo.id), todo)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("todos/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}/{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        let mut req = self.request(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map unexpected status codes to the matching `ApiError` variant. A 404
/// keeps the server's `message`, or the raw body if it is not JSON.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        let message = serde_json::from_str::<ErrorMessage>(&response.body)
            .map(|e| e.message)
            .unwrap_or_else(|_| response.body.clone());
        return Err(ApiError::NotFound { message });
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = TodoData::new("test summary", "test description");
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["summary"], "test summary");
        assert_eq!(body["description"], "test description");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_todo_targets_todo_id() {
        let todo = Todo {
            id: 5,
            summary: "updated summary".to_string(),
            description: "updated description".to_string(),
        };
        let req = client().build_update_todo(&todo).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/todos/5");
        let body: Todo = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, todo);
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/todos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let resp = response(200, r#"[{"id":1,"summary":"Test","description":"Text"}]"#);
        let todos = client().parse_list_todos(resp).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].summary, "Test");
    }

    #[test]
    fn parse_get_todo_not_found_keeps_message() {
        let resp = response(404, r#"{"message":"Todo with the id 9999 not found."}"#);
        let err = client().parse_get_todo(resp).unwrap_err();
        match err {
            ApiError::NotFound { message } => {
                assert_eq!(message, "Todo with the id 9999 not found.")
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_not_found_with_plain_body() {
        let err = client().parse_delete_todo(response(404, "gone")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { message } if message == "gone"));
    }

    #[test]
    fn parse_create_todo_success() {
        let resp = response(201, r#"{"id":1,"summary":"New","description":"Thing"}"#);
        let todo = client().parse_create_todo(resp).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.summary, "New");
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let resp = response(200, r#"{"id":1,"summary":"Updated","description":"Again"}"#);
        let todo = client().parse_update_todo(resp).unwrap();
        assert_eq!(todo.summary, "Updated");
        assert_eq!(todo.description, "Again");
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:8080/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
