//! Test helper module for user-service integration tests.
//!
//! Spawns the service against a real PostgreSQL database on an
//! ephemeral port and exposes a `reqwest` client pointed at it.

#![allow(dead_code)]

use tokio::net::TcpListener;
use user_service::{
    build_router,
    config::{DatabaseConfig, Environment, UserServiceConfig, DEFAULT_DATABASE_URL},
    db::Database,
    AppState,
};

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
    pub db: Database,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the test application with a clean users table.
    pub async fn spawn() -> Self {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db = Database::new(&database_url, 5, 1)
            .await
            .expect("Failed to connect to test database");
        db.ensure_schema()
            .await
            .expect("Failed to bootstrap schema");

        cleanup_test_data(&db)
            .await
            .expect("Failed to cleanup test data");

        let config = UserServiceConfig {
            common: service_core::config::Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            environment: Environment::Dev,
            service_name: "user-service-test".to_string(),
            service_version: "test".to_string(),
            log_level: "error".to_string(),
            database: DatabaseConfig {
                url: database_url,
                max_connections: 5,
                min_connections: 1,
            },
        };

        let state = AppState {
            config,
            db: db.clone(),
        };
        let app = build_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener.local_addr().expect("No local address").port();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server task failed");
        });

        Self {
            address: format!("http://127.0.0.1:{}", port),
            db,
            client: reqwest::Client::new(),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST /users with the given payload fields.
    pub async fn create_user(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/users", self.address))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// GET /users/{id} with an arbitrary path segment.
    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/users/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Unique email per test so parallel tests never collide on the
/// uniqueness constraint.
pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, uuid::Uuid::new_v4())
}

async fn cleanup_test_data(db: &Database) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE users RESTART IDENTITY")
        .execute(db.pool())
        .await?;
    Ok(())
}
