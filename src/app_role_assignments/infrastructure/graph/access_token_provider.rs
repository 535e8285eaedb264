use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::app_role_assignments::infrastructure::graph::graph_client_error::GraphClientError;

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, GraphClientError>;
}

#[derive(Debug)]
pub struct GraphCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_expired(&self, grace_period: Duration) -> bool {
        Utc::now() + grace_period >= self.expires_at
    }
}

/// OAuth2 client credentials flow with an in-memory token cache.
#[derive(Debug)]
pub struct ClientCredentialsTokenProvider {
    credentials: GraphCredentials,
    login_endpoint: String,
    scope: String,
    http_client: reqwest::Client,
    cached_token: RwLock<Option<CachedToken>>,
    grace_period: Duration,
}

impl ClientCredentialsTokenProvider {
    pub fn new(
        credentials: GraphCredentials,
        login_endpoint: &str,
        graph_endpoint: &str,
        request_timeout: StdDuration,
    ) -> Result<Self, GraphClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| GraphClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            credentials,
            login_endpoint: login_endpoint.trim_end_matches('/').to_string(),
            scope: format!("{}/.default", graph_endpoint.trim_end_matches('/')),
            http_client,
            cached_token: RwLock::new(None),
            grace_period: Duration::minutes(5),
        })
    }

    fn usable(&self, cached: &Option<CachedToken>) -> Option<String> {
        cached
            .as_ref()
            .filter(|token| !token.is_expired(self.grace_period))
            .map(|token| token.access_token.clone())
    }

    #[instrument(skip(self), fields(tenant_id = %self.credentials.tenant_id))]
    async fn acquire_token(&self) -> Result<CachedToken, GraphClientError> {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            self.login_endpoint, self.credentials.tenant_id
        );

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.expose_secret()),
            ("scope", self.scope.as_str()),
        ];

        let response = self
            .http_client
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| GraphClientError::Auth(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphClientError::Auth(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| GraphClientError::Auth(format!("failed to parse token response: {e}")))?;

        let expires_at = Utc::now() + Duration::seconds(token_response.expires_in);
        debug!(%expires_at, "acquired new Graph access token");

        Ok(CachedToken {
            access_token: token_response.access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsTokenProvider {
    async fn access_token(&self) -> Result<String, GraphClientError> {
        if let Some(token) = self.usable(&*self.cached_token.read().await) {
            return Ok(token);
        }

        // Concurrent callers queue on the write lock; only the first one refreshes.
        let mut cache = self.cached_token.write().await;
        if let Some(token) = self.usable(&cache) {
            return Ok(token);
        }

        let token = self.acquire_token().await?;
        let access_token = token.access_token.clone();
        *cache = Some(token);

        Ok(access_token)
    }
}
