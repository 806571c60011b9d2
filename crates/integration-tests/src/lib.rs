//! Shared fixtures for the integration test targets.

use std::sync::Arc;

use domains::{PostInput, PostRepository, UserInput, UserRepository};
use services::{PostService, UserService};
use storage_adapters::{InMemoryPostRepository, InMemoryUserRepository};

/// Fresh, isolated repositories and the services over them.
pub struct Fixture {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub user_service: UserService,
    pub post_service: PostService,
}

impl Fixture {
    pub fn new() -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
        Self {
            user_service: UserService::new(users.clone()),
            post_service: PostService::new(posts.clone(), users.clone()),
            users,
            posts,
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub fn user(username: &str, email: &str) -> UserInput {
    UserInput {
        username: username.to_string(),
        email: email.to_string(),
    }
}

pub fn post(title: &str, content: &str) -> PostInput {
    PostInput {
        title: title.to_string(),
        content: content.to_string(),
    }
}

#[cfg(feature = "web-axum")]
pub mod http {
    //! Drives the real router in-process, no socket involved.

    use api_adapters::{router, AppState, ServiceInfo};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::Fixture;

    pub const SERVICE_NAME: &str = "postboard-test";
    pub const TITLE: &str = "Postboard API Starter";

    pub struct TestApp {
        router: Router,
    }

    impl TestApp {
        pub fn new() -> Self {
            Self::with_fixture(Fixture::new())
        }

        pub fn with_fixture(fixture: Fixture) -> Self {
            let state = AppState::new(
                fixture.user_service,
                fixture.post_service,
                ServiceInfo {
                    service_name: SERVICE_NAME.to_string(),
                    title: TITLE.to_string(),
                    version: "0.1.0".to_string(),
                },
            );
            Self {
                router: router(state),
            }
        }

        pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Method::GET, uri, None).await
        }

        pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(Method::POST, uri, Some(body.to_string())).await
        }

        pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
            self.send(Method::PUT, uri, Some(body.to_string())).await
        }

        pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
            self.send(Method::DELETE, uri, None).await
        }

        /// Sends a raw body verbatim, for malformed-JSON cases.
        pub async fn send(&self, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
            self.send_as(method, uri, body, Some("application/json")).await
        }

        /// Like [`TestApp::send`], with `content_type` as the `Content-Type`
        /// header, or no header at all when `None`.
        pub async fn send_as(
            &self,
            method: Method,
            uri: &str,
            body: Option<String>,
            content_type: Option<&str>,
        ) -> (StatusCode, Value) {
            let mut request = Request::builder().method(method).uri(uri);
            let body = match body {
                Some(raw) => {
                    if let Some(content_type) = content_type {
                        request = request.header(header::CONTENT_TYPE, content_type);
                    }
                    Body::from(raw)
                }
                None => Body::empty(),
            };

            let response = self
                .router
                .clone()
                .oneshot(request.body(body).expect("request builds"))
                .await
                .expect("router is infallible");

            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body is readable");
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }
    }

    impl Default for TestApp {
        fn default() -> Self {
            Self::new()
        }
    }
}
