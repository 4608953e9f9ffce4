//! GraphQL client for making requests to the API server

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::OnceLock;

static API_URL: OnceLock<String> = OnceLock::new();

const FALLBACK_API_URL: &str = "http://localhost:8080/graphql";

/// Initialize the API URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API URL
pub fn get_api_url() -> &'static str {
    API_URL.get().map(|s| s.as_str()).unwrap_or(FALLBACK_API_URL)
}

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    /// Unwrap the payload, surfacing the first GraphQL error if any
    pub fn into_data(self) -> Result<T, ClientError> {
        if let Some(first_error) = self.errors.as_ref().and_then(|errors| errors.first()) {
            return Err(ClientError::GraphQL(first_error.message.clone()));
        }

        self.data.ok_or(ClientError::NoData)
    }
}

/// GraphQL error
///
/// Only the message is kept; `path` and `locations` mix strings and list
/// indices and are ignored.
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// Error type for GraphQL operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("No data returned")]
    NoData,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// GraphQL client for making requests
#[derive(Clone)]
pub struct GraphQLClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphQLClient {
    /// Create a new GraphQL client
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Execute a GraphQL mutation
    pub async fn mutate<V, R>(&self, mutation: &'static str, variables: Option<V>) -> Result<R, ClientError>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest {
            query: mutation,
            variables,
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let body = response.text().await?;
        let graphql_response: GraphQLResponse<R> = serde_json::from_str(&body)?;

        graphql_response.into_data()
    }
}

/// Create a client for server-side requests (direct to API)
#[cfg(feature = "server")]
pub fn server_client() -> GraphQLClient {
    GraphQLClient::new(get_api_url())
}
