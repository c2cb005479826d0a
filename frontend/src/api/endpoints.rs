use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Display;

use super::{
    client::{ApiClient, ApiResponse},
    types::ApiError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_method(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Call-time inputs: path parameters, query string and JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub params: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub data: Option<Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn data(mut self, body: Value) -> Self {
        self.data = Some(body);
        self
    }

    pub fn json<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Failed to encode request: {}", e)))?;
        Ok(self.data(value))
    }
}

/// A verb plus a path template such as `/date-plan/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Substitutes `:key` placeholders with the matching parameter values.
    pub fn resolve_path(&self, params: &[(String, String)]) -> String {
        let mut url = self.path.to_string();
        for (key, value) in params {
            url = url.replacen(&format!(":{}", key), value, 1);
        }
        url
    }

    pub async fn call<T: DeserializeOwned>(
        &self,
        client: &ApiClient,
        args: CallArgs,
    ) -> Result<ApiResponse<T>, ApiError> {
        let path = self.resolve_path(&args.params);
        client
            .send_json(self.method.as_method(), &path, &args.query, args.data.as_ref())
            .await
    }

    pub async fn call_bytes(
        &self,
        client: &ApiClient,
        args: CallArgs,
    ) -> Result<ApiResponse<Vec<u8>>, ApiError> {
        let path = self.resolve_path(&args.params);
        client
            .send_bytes(self.method.as_method(), &path, &args.query)
            .await
    }
}

/// Endpoint table for the KencanKuy API.
pub mod kencan_api {
    use super::{Endpoint, HttpMethod};

    pub mod users {
        use super::*;
        pub const SYNC: Endpoint = Endpoint::new(HttpMethod::Post, "/users/sync");
        pub const ME: Endpoint = Endpoint::new(HttpMethod::Get, "/users/me");
        pub const UPDATE_PROFILE: Endpoint = Endpoint::new(HttpMethod::Patch, "/users/me");
        pub const LINK_PARTNER: Endpoint = Endpoint::new(HttpMethod::Post, "/users/link-partner");
    }

    pub mod date_plan {
        use super::*;
        pub const GENERATE: Endpoint = Endpoint::new(HttpMethod::Post, "/date-plan/generate");
        pub const GET_BY_ID: Endpoint = Endpoint::new(HttpMethod::Get, "/date-plan/:id");
        pub const MY_PLANS: Endpoint = Endpoint::new(HttpMethod::Get, "/date-plan/my-plans");
        pub const PDF: Endpoint = Endpoint::new(HttpMethod::Get, "/date-plan/:id/pdf");
    }

    pub mod rate_limit {
        use super::*;
        pub const STATUS: Endpoint = Endpoint::new(HttpMethod::Get, "/rate-limit/status");
    }

    pub mod places {
        use super::*;
        pub const LIST: Endpoint = Endpoint::new(HttpMethod::Get, "/curated-places");
        pub const UPDATE: Endpoint = Endpoint::new(HttpMethod::Patch, "/curated-places/:id");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_path_substitutes_named_params() {
        let args = CallArgs::new().param("id", 7);
        assert_eq!(kencan_api::date_plan::GET_BY_ID.resolve_path(&args.params), "/date-plan/7");
        assert_eq!(kencan_api::date_plan::PDF.resolve_path(&args.params), "/date-plan/7/pdf");
    }

    #[test]
    fn resolve_path_ignores_unknown_params_and_keeps_static_paths() {
        let args = CallArgs::new().param("slug", "x");
        assert_eq!(kencan_api::date_plan::MY_PLANS.resolve_path(&args.params), "/date-plan/my-plans");
        assert_eq!(kencan_api::date_plan::GET_BY_ID.resolve_path(&[]), "/date-plan/:id");
    }

    #[test]
    fn call_args_builder_collects_query_and_body() {
        let args = CallArgs::new()
            .query("page", 2)
            .query("search", "kopi")
            .json(&json!({ "name": "Kopi" }))
            .unwrap();
        assert_eq!(
            args.query,
            vec![("page".to_string(), "2".to_string()), ("search".to_string(), "kopi".to_string())]
        );
        assert_eq!(args.data, Some(json!({ "name": "Kopi" })));
    }

    #[test]
    fn endpoint_methods_match_table() {
        assert_eq!(kencan_api::users::UPDATE_PROFILE.method.as_method(), Method::PATCH);
        assert_eq!(kencan_api::places::UPDATE.method, HttpMethod::Patch);
        assert_eq!(kencan_api::date_plan::GENERATE.method, HttpMethod::Post);
    }
}
