//! Outbound HTTP client that participates in request correlation.
//!
//! Every request built through [`ApiClient`] carries an `X-Request-ID`
//! header: the current request's id when called inside a request scope
//! (service-to-service hops keep one correlation id end to end), otherwise a
//! fresh UUIDv4 (browser-initiated or background work). Injection is
//! additive; headers and credentials set by the caller or configured on the
//! underlying `reqwest::Client` are left untouched.

use reqwest::{Client, Method, RequestBuilder};
use uuid::Uuid;

use crate::context;
use crate::middleware::REQUEST_ID_HEADER;
use crate::AppError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let http = Client::builder()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an existing client, e.g. one preconfigured with default headers
    /// or cookie-based credentials.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Start a request with the correlation header already injected.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request_id =
            context::request_id().unwrap_or_else(|| Uuid::new_v4().to_string());

        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(&REQUEST_ID_HEADER, request_id)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::middleware::is_valid_uuid_v4;
    use reqwest::header::AUTHORIZATION;

    #[tokio::test]
    async fn injects_a_fresh_uuid_outside_a_request_scope() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let request = client.get("/api/weights").build().unwrap();

        let value = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("header should be injected");
        assert!(is_valid_uuid_v4(value));
    }

    #[tokio::test]
    async fn reuses_the_current_request_id_inside_a_scope() {
        let id = "12345678-1234-4234-8234-123456789abc";
        let client = ApiClient::new("http://localhost:8080").unwrap();

        let request = context::scope(RequestContext::new(id.to_string()), async {
            client.post("/api/meals/analyze").build().unwrap()
        })
        .await;

        assert_eq!(
            request
                .headers()
                .get(&REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some(id)
        );
    }

    #[tokio::test]
    async fn caller_headers_survive_injection() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let request = client
            .get("/api/auth/me")
            .header(AUTHORIZATION, "Bearer caller-token")
            .header("X-Feature-Flag", "beta")
            .build()
            .unwrap();

        assert_eq!(
            request
                .headers()
                .get(AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer caller-token")
        );
        assert_eq!(
            request
                .headers()
                .get("X-Feature-Flag")
                .and_then(|v| v.to_str().ok()),
            Some("beta")
        );
        assert!(request.headers().contains_key(&REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn paths_are_joined_onto_the_base_url() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        let request = client.get("/api/ai-usage").build().unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:8080/api/ai-usage");
    }
}
