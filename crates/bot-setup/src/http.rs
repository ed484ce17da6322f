//! HTTP collaborator: POST a JSON body, return status and raw response body.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::Result;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends JSON request bodies. Implemented with reqwest; tests substitute a fake.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// POSTs `body` (already serialized JSON) to `url` with `Content-Type: application/json`.
    /// Non-2xx statuses are returned, not treated as errors.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by a shared [`reqwest::Client`].
#[derive(Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
