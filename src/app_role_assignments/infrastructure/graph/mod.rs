pub mod access_token_provider;
pub mod clients;
pub mod graph_client_error;
pub mod graph_cloud_environment;
pub mod graph_http_client;
