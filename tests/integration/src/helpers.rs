//! Test helpers for integration tests
//!
//! Spawns a test server, mints access tokens the way the identity provider
//! would, and wraps the HTTP verbs.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use pasala_api::server::{create_app, create_app_state};
use pasala_common::{AppConfig, JwtService};
use pasala_core::AccountId;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Secret used when `JWT_SECRET` is not set
const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Account listed in `ADMIN_ACCOUNT_IDS` for this server
    pub admin: AccountId,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with a fresh admin account
    pub async fn start() -> Result<Self> {
        let admin = AccountId::new();
        let config = test_config(admin)?;
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.leeway_secs);

        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            admin,
            jwt,
            _handle: handle,
        })
    }

    /// Base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Access token for `account`, valid for an hour
    pub fn token_for(&self, account: AccountId) -> String {
        self.jwt.issue(account, 3600).expect("test token")
    }

    /// A new account and its token
    pub fn new_account(&self) -> (AccountId, String) {
        let account = AccountId::new();
        (account, self.token_for(account))
    }

    pub fn admin_token(&self) -> String {
        self.token_for(self.admin)
    }

    fn authed(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// Anonymous GET
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.authed(self.client.get(self.url(path)), token).send().await?)
    }

    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .authed(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(self
            .authed(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.authed(self.client.delete(self.url(path)), token).send().await?)
    }
}

/// Configuration from the environment with test defaults layered underneath
pub fn test_config(admin: AccountId) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut defaults: HashMap<&str, String> = HashMap::new();
    defaults.insert("API_PORT", "0".to_string());
    defaults.insert("JWT_SECRET", TEST_JWT_SECRET.to_string());
    defaults.insert("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string());
    defaults.insert("RATE_LIMIT_BURST", "1000".to_string());
    defaults.insert("PUBLIC_BASE_URL", "https://pasala.test".to_string());

    let admin = admin.to_string();
    let config = AppConfig::from_lookup(|key| match key {
        "ADMIN_ACCOUNT_IDS" => Some(admin.clone()),
        "RESULT_ROSTER_REQUIREMENT" => Some("both_teams".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" | "RATE_LIMIT_BURST" | "PUBLIC_BASE_URL" => {
            defaults.get(key).cloned()
        }
        _ => std::env::var(key).ok().or_else(|| defaults.get(key).cloned()),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Whether the environment can run server tests
pub fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: crate::fixtures::ErrorEnvelope = assert_json(response, expected_status).await?;
    Ok(body.error.code)
}
