//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! as anonymous users, bearer-authenticated users or the admin.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use blog_api::{create_app, create_app_state};
use blog_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{AuthTokens, LoginRequest, RegisterRequest};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    admin: (String, String),
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let admin = (config.admin.username.clone(), config.admin.password.clone());

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets parallel tests each get their own listener
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            admin,
            _handle: handle,
        })
    }

    /// Get base URL for the API
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET, optionally with a bearer token
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let request = Self::bearer(self.client.get(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// POST a JSON body, optionally with a bearer token
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let request = Self::bearer(self.client.post(self.url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// PUT a JSON body, optionally with a bearer token
    pub async fn put<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let request = Self::bearer(self.client.put(self.url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// DELETE, optionally with a bearer token
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let request = Self::bearer(self.client.delete(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// POST a JSON body with the admin's Basic credentials
    pub async fn admin_post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .basic_auth(&self.admin.0, Some(&self.admin.1))
            .json(body)
            .send()
            .await?)
    }

    /// DELETE with the admin's Basic credentials
    pub async fn admin_delete(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .basic_auth(&self.admin.0, Some(&self.admin.1))
            .send()
            .await?)
    }

    /// Register a fresh user and log them in
    pub async fn register_and_login(&self) -> Result<(RegisterRequest, AuthTokens)> {
        let registration = RegisterRequest::unique();
        let response = self
            .post("/api/auth/registration", None, &registration)
            .await?;
        assert_status(response, StatusCode::NO_CONTENT).await?;

        let response = self
            .post(
                "/api/auth/login",
                None,
                &LoginRequest::from_register(&registration),
            )
            .await?;
        let tokens = assert_json(response, StatusCode::OK).await?;

        Ok((registration, tokens))
    }
}

/// Create a test configuration
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
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
