// Posts API HTTP client.
// Handles default headers, URL construction, and response status checks.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{PostboardError, Result};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client bound to a single API base URL.
pub struct PostsClient {
    client: Client,
    base_url: String,
}

impl PostsClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("postboard-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(PostboardError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request relative to the base URL.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await?;
        check_response(response)
    }
}

/// Any non-2xx status collapses into the generic status error.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        log::warn!("GET {} returned {}", response.url(), status);
        Err(PostboardError::Status(status))
    }
}
