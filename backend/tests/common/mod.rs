//! Shared helpers for driving the router against a test database
//!
//! `spawn_app` uses a private in-memory database with a single connection.
//! `spawn_file_app` uses a WAL database file in a temporary directory with a
//! real pool, for backups and concurrent writers.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use household_inventory::{
    config::{AuthConfig, DatabaseConfig, ServerConfig},
    create_app, db, AppState, Config,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    /// Keeps the database file alive for file-backed apps
    _dir: Option<TempDir>,
}

pub fn test_config() -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig::default(),
        database: DatabaseConfig {
            path: db::IN_MEMORY.to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            secret_key: "test-secret".to_string(),
            app_password: PASSWORD.to_string(),
            session_ttl_secs: 3600,
            secure_cookie: false,
            bcrypt_cost: 4,
        },
    }
}

pub async fn spawn_app() -> TestApp {
    build_app(test_config(), None).await
}

pub async fn spawn_file_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config();
    config.database = DatabaseConfig {
        path: dir.path().join("inventory.db").to_string_lossy().into_owned(),
        max_connections: 8,
    };
    build_app(config, Some(dir)).await
}

async fn build_app(config: Config, dir: Option<TempDir>) -> TestApp {
    let pool = db::init(&config.database).await.unwrap();
    let state = AppState::new(pool.clone(), config).unwrap();
    TestApp {
        router: create_app(state),
        pool,
        _dir: dir,
    }
}

impl TestApp {
    /// Send a request and decode the JSON response (Null for an empty body)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        cookie: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    /// Log in and return the `Cookie` header value for later requests
    pub async fn login(&self) -> String {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({ "password": PASSWORD }).to_string(),
            ))
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login sets a cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    /// Find a consumable by name in the consumables listing
    pub async fn consumable(&self, cookie: &str, name: &str) -> Value {
        let (status, body) = self
            .request(Method::GET, "/api/consumables", Some(cookie), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        body.as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == name)
            .cloned()
            .unwrap_or_else(|| panic!("no consumable named {}", name))
    }

    pub async fn consumable_id(&self, cookie: &str, name: &str) -> i64 {
        self.consumable(cookie, name).await["id"].as_i64().unwrap()
    }

    pub async fn quantity(&self, cookie: &str, name: &str) -> f64 {
        self.consumable(cookie, name).await["current_quantity"]
            .as_f64()
            .unwrap()
    }
}
