//! Response bodies. Request bodies are the domain `UserInput` / `PostInput`.

use chrono::{DateTime, Utc};
use domains::{Post, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub count: usize,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        Self {
            count: users.len(),
            users,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
    pub count: usize,
}

impl From<Vec<Post>> for PostList {
    fn from(posts: Vec<Post>) -> Self {
        Self {
            count: posts.len(),
            posts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload of `GET /`: what this service is and which routes it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDirectory {
    pub health: String,
    pub users: Vec<String>,
    pub posts: Vec<String>,
}

impl EndpointDirectory {
    pub fn standard() -> Self {
        Self {
            health: "/health".to_string(),
            users: crud_routes("/users"),
            posts: crud_routes("/posts"),
        }
    }
}

fn crud_routes(base: &str) -> Vec<String> {
    vec![
        format!("GET {base}"),
        format!("POST {base}"),
        format!("GET {base}/:id"),
        format!("PUT {base}/:id"),
        format!("DELETE {base}/:id"),
    ]
}
