use std::{sync::Arc, time::Duration};

use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use crate::app_role_assignments::infrastructure::graph::{
    access_token_provider::AccessTokenProvider, graph_client_error::GraphClientError,
};

#[derive(Debug, Deserialize)]
pub struct ODataError {
    pub error: ODataErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ODataErrorBody {
    pub code: String,
    pub message: String,
}

/// Thin Graph transport: one request per call, bearer token attached, OData errors decoded.
pub struct GraphHttpClient {
    http_client: reqwest::Client,
    token_provider: Arc<dyn AccessTokenProvider>,
    base_url: Url,
}

impl GraphHttpClient {
    pub fn new(
        token_provider: Arc<dyn AccessTokenProvider>,
        graph_endpoint: &str,
        api_version: &str,
        request_timeout: Duration,
    ) -> Result<Self, GraphClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| GraphClientError::Config(format!("failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(&format!(
            "{}/{}",
            graph_endpoint.trim_end_matches('/'),
            api_version.trim_matches('/')
        ))
        .map_err(|e| GraphClientError::Config(format!("invalid Graph endpoint: {e}")))?;

        Ok(Self {
            http_client,
            token_provider,
            base_url,
        })
    }

    /// Appends percent-encoded path segments to the versioned base URL.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url, GraphClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GraphClientError::Config("Graph endpoint cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GraphClientError> {
        let response = self.send(Method::GET, segments, None::<&()>).await?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, body))]
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, GraphClientError> {
        let response = self.send(Method::POST, segments, Some(body)).await?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, segments: &[&str]) -> Result<(), GraphClientError> {
        self.send(Method::DELETE, segments, None::<&()>).await?;
        Ok(())
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<reqwest::Response, GraphClientError> {
        let url = self.url_for(segments)?;
        let token = self.token_provider.access_token().await?;

        let mut request = self
            .http_client
            .request(method.clone(), url.clone())
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, %url, %status, "Graph request completed");

        if status.is_success() {
            return Ok(response);
        }

        Err(Self::error_from_response(url, response).await)
    }

    async fn error_from_response(url: Url, response: reqwest::Response) -> GraphClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let odata_error = serde_json::from_str::<ODataError>(&body).ok();

        if status == StatusCode::NOT_FOUND {
            let message = odata_error
                .map(|error| error.error.message)
                .unwrap_or_else(|| url.to_string());
            return GraphClientError::NotFound(message);
        }

        match odata_error {
            Some(odata_error) => GraphClientError::Api {
                status: status.as_u16(),
                code: odata_error.error.code,
                message: odata_error.error.message,
            },
            None => GraphClientError::Api {
                status: status.as_u16(),
                code: status.to_string(),
                message: body,
            },
        }
    }
}
