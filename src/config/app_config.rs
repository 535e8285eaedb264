use std::time::Duration;

use secrecy::SecretString;

#[derive(Debug)]
pub struct AppConfig {
    pub port: u16,
    pub graph_tenant_id: String,
    pub graph_client_id: String,
    pub graph_client_secret: SecretString,
    pub graph_cloud_environment: String,
    pub graph_api_version: String,
    pub graph_endpoint_override: Option<String>,
    pub graph_request_timeout_secs: u64,
    pub resource_create_timeout_secs: u64,
    pub resource_read_timeout_secs: u64,
    pub resource_delete_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            graph_tenant_id: std::env::var("GRAPH_TENANT_ID").unwrap_or_default(),
            graph_client_id: std::env::var("GRAPH_CLIENT_ID").unwrap_or_default(),
            graph_client_secret: SecretString::from(
                std::env::var("GRAPH_CLIENT_SECRET").unwrap_or_default(),
            ),
            graph_cloud_environment: std::env::var("GRAPH_CLOUD_ENVIRONMENT")
                .unwrap_or_else(|_| "public".to_string()),
            graph_api_version: std::env::var("GRAPH_API_VERSION")
                .unwrap_or_else(|_| "v1.0".to_string()),
            graph_endpoint_override: std::env::var("GRAPH_ENDPOINT_OVERRIDE")
                .ok()
                .filter(|value| !value.trim().is_empty()),
            graph_request_timeout_secs: seconds_from_env("GRAPH_REQUEST_TIMEOUT_SECS", 30),
            resource_create_timeout_secs: seconds_from_env("RESOURCE_CREATE_TIMEOUT_SECS", 300),
            resource_read_timeout_secs: seconds_from_env("RESOURCE_READ_TIMEOUT_SECS", 300),
            resource_delete_timeout_secs: seconds_from_env("RESOURCE_DELETE_TIMEOUT_SECS", 300),
        }
    }

    pub fn graph_request_timeout(&self) -> Duration {
        Duration::from_secs(self.graph_request_timeout_secs)
    }

    pub fn create_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_create_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_read_timeout_secs)
    }

    pub fn delete_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_delete_timeout_secs)
    }
}

fn seconds_from_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
