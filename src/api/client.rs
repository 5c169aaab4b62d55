use crate::api::models::{CurrentUser, SearchResponse};
use crate::core::query::SearchQuery;
use crate::error::ApiError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("cfl-cli/", env!("CARGO_PKG_VERSION"));

pub const SEARCH_ENDPOINT: &str = "/rest/api/content/search";
pub const CURRENT_USER_ENDPOINT: &str = "/rest/api/user/current";

/// Username half of the Basic pair when no account email is configured
const FALLBACK_USERNAME: &str = "user";

#[derive(Debug, Clone)]
pub struct ConfluenceClient {
    client: Client,
    pub base_url: String,
    pub email: Option<String>,
    api_token: String,
}

impl ConfluenceClient {
    pub fn new(
        base_url: String,
        email: Option<String>,
        api_token: String,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http {
                status: 0,
                status_text: format!("Failed to create HTTP client: {e}"),
                endpoint: "client_init".to_string(),
            })?;

        Ok(ConfluenceClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            email,
            api_token,
        })
    }

    fn auth_header(&self) -> String {
        let username = self.email.as_deref().unwrap_or(FALLBACK_USERNAME);
        let pair = format!("{}:{}", username, self.api_token);
        format!("Basic {}", STANDARD.encode(pair))
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
    }

    /// Run the search query against the content search endpoint
    pub async fn search_pages(&self, query: &SearchQuery) -> Result<SearchResponse, ApiError> {
        let request = self
            .build_request(Method::GET, SEARCH_ENDPOINT)
            .query(&query.query_params());

        let response = request
            .send()
            .await
            .map_err(|e| network_error(SEARCH_ENDPOINT, e))?;

        self.handle_response(response, SEARCH_ENDPOINT).await
    }

    /// Fetch the authenticated user; used to validate credentials
    pub async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        let request = self.build_request(Method::GET, CURRENT_USER_ENDPOINT);

        let response = request
            .send()
            .await
            .map_err(|e| network_error(CURRENT_USER_ENDPOINT, e))?;

        self.handle_response(response, CURRENT_USER_ENDPOINT).await
    }

    pub async fn handle_response<T>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            return response.json::<T>().await.map_err(|e| ApiError::Parse {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            });
        }

        match status.as_u16() {
            401 => {
                let server_message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Unauthorized {
                    status: 401,
                    endpoint: endpoint.to_string(),
                    server_message,
                })
            }
            404 => Err(ApiError::NotFound {
                endpoint: endpoint.to_string(),
            }),
            code => Err(ApiError::Http {
                status: code,
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                endpoint: endpoint.to_string(),
            }),
        }
    }
}

fn network_error(endpoint: &str, e: reqwest::Error) -> ApiError {
    ApiError::Network {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    }
}
