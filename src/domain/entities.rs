use crate::domain::value_objects::{JsonBody, PositiveInt, Url};
use hyper::StatusCode;
use serde::Serialize;

/// HTTP methods the todos endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Represents an HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>, // Key-value pairs for headers
    pub body: Option<JsonBody>,
}

/// Represents an HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    /// The endpoint answers 200 for reads and deletes, 201 for creation
    pub fn is_accepted(&self) -> bool {
        self.status == StatusCode::OK || self.status == StatusCode::CREATED
    }
}

/// One operation against the todos endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum TodoCommand {
    List { page: PositiveInt, limit: PositiveInt },
    Create,
    Delete { id: PositiveInt },
}

impl TodoCommand {
    pub fn method(&self) -> Method {
        match self {
            TodoCommand::List { .. } => Method::Get,
            TodoCommand::Create => Method::Post,
            TodoCommand::Delete { .. } => Method::Delete,
        }
    }
}

/// Payload sent when creating a todo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: u64,
    pub title: String,
    pub completed: bool,
}

impl Default for NewTodo {
    fn default() -> Self {
        Self {
            user_id: 1,
            title: "New todo".to_string(),
            completed: false,
        }
    }
}
