//! Requests driven through the complete router.


use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory::user::DEFAULT_PASSWORD};
use tower::ServiceExt;

use crate::server::{config::Environment, router::app, startup::session_layer, state::AppState};

/// Router over an in-memory database holding every table.
pub struct TestApp {
    router: Router,
    pub db: DatabaseConnection,
    _context: TestContext,
}

/// Status, session cookie (if one was set) and JSON body of a response.
pub struct TestResponse {
    pub status: StatusCode,
    pub cookie: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_environment(Environment::Test).await
    }

    pub async fn with_environment(environment: Environment) -> Self {
        let mut context = TestBuilder::new().with_ticket_tables().build().await.unwrap();
        let store = context.session_store().await.unwrap();
        let db = context.db.clone().unwrap();

        let state = AppState::new(db.clone(), environment);
        let router = app(state, session_layer(store, "test secret", false));

        Self {
            router,
            db,
            _context: context,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        TestResponse {
            status,
            cookie,
            body,
        }
    }

    /// Logs in with the factory default password and returns the cookie.
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/session",
                None,
                Some(serde_json::json!({
                    "username": username,
                    "password": DEFAULT_PASSWORD,
                })),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.cookie.unwrap()
    }
}
