use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, UNKNOWN_API_ERROR},
    config,
    identity::{default_identity, SharedIdentity},
};

pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Successful response with the parts callers still need after decoding.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn rate_limit_remaining(&self) -> Option<u32> {
        self.header(RATE_LIMIT_REMAINING_HEADER)
            .and_then(|raw| raw.trim().parse().ok())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            headers: self.headers,
            data: f(self.data),
        }
    }
}

/// Shared HTTP client for the KencanKuy API. Attaches the identity token as a
/// bearer header whenever a user is signed in.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session_url: Option<String>,
    identity: SharedIdentity,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session_url: None,
            identity: default_identity(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_identity(mut self, identity: SharedIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_session_url(mut self, session_url: impl Into<String>) -> Self {
        self.session_url = Some(session_url.into());
        self
    }

    pub fn identity(&self) -> SharedIdentity {
        Rc::clone(&self.identity)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn resolved_session_url(&self) -> String {
        if let Some(url) = &self.session_url {
            url.clone()
        } else {
            config::await_session_endpoint().await
        }
    }

    /// Current identity token, if a user is signed in. Token failures are
    /// treated as anonymous.
    async fn bearer_token(&self) -> Option<String> {
        self.identity.current_user()?;
        match self.identity.id_token().await {
            Ok(token) => Some(token),
            Err(err) => {
                log::warn!("could not read identity token: {}", err);
                None
            }
        }
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .client
            .request(method, format!("{}{}", base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.bearer_token().await {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        log::debug!("{} {}", method, path);
        let response = self
            .build_request(method, path, query, body)
            .await
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.send(method, path, query, body).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let data = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        Ok(ApiResponse {
            status,
            headers,
            data,
        })
    }

    pub(crate) async fn send_bytes(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ApiResponse<Vec<u8>>, ApiError> {
        let response = self.send(method, path, query, None).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(transport_error)?;
        Ok(ApiResponse {
            status,
            headers,
            data: bytes.to_vec(),
        })
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    let message = err.to_string();
    if message.trim().is_empty() {
        ApiError::request_failed(UNKNOWN_API_ERROR)
    } else {
        ApiError::request_failed(message)
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let payload = response.json::<Value>().await.ok();
    ApiError::from_status(status, payload.as_ref())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_header_is_parsed_when_numeric() {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING_HEADER, "3".parse().unwrap());
        let response = ApiResponse {
            status: StatusCode::OK,
            headers,
            data: (),
        };
        assert_eq!(response.rate_limit_remaining(), Some(3));

        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING_HEADER, "lots".parse().unwrap());
        let response = ApiResponse {
            status: StatusCode::OK,
            headers,
            data: (),
        };
        assert_eq!(response.rate_limit_remaining(), None);
    }

    #[test]
    fn map_keeps_status_and_headers() {
        let response = ApiResponse {
            status: StatusCode::CREATED,
            headers: HeaderMap::new(),
            data: 2,
        }
        .map(|n| n * 21);
        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.data, 42);
    }
}
