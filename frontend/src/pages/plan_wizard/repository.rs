use crate::{
    api::{
        client::{error_from_response, transport_error},
        ApiClient, ApiError, GeneratePlanRequest, PickedLocation,
    },
    config,
    utils::maps::{geocode_url, GeocodeResponse, GEOCODE_BASE},
};
use std::rc::Rc;

/// Result of a successful generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub id: i64,
    pub remaining: Option<u32>,
}

#[derive(Clone)]
pub struct PlanWizardRepository {
    client: Rc<ApiClient>,
    geocode_endpoint: String,
    maps_api_key: Option<String>,
}

impl PlanWizardRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
            geocode_endpoint: GEOCODE_BASE.to_string(),
            maps_api_key: None,
        }
    }

    pub fn with_geocoder(mut self, endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        self.geocode_endpoint = endpoint.into();
        self.maps_api_key = Some(api_key.into());
        self
    }

    pub async fn generate(&self, request: GeneratePlanRequest) -> Result<GeneratedPlan, ApiError> {
        let response = self.client.generate_plan(&request).await?;
        Ok(GeneratedPlan {
            id: response.data.id,
            remaining: response.rate_limit_remaining(),
        })
    }

    pub async fn remaining_plans(&self) -> Result<u32, ApiError> {
        self.client
            .get_rate_limit_status()
            .await
            .map(|status| status.remaining)
    }

    /// Address search against the geocoding API, restricted to Indonesia.
    pub async fn search_locations(&self, query: &str) -> Result<Vec<PickedLocation>, ApiError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let key = self
            .maps_api_key
            .clone()
            .unwrap_or_else(config::maps_api_key);
        let url = geocode_url(&self.geocode_endpoint, query, &key);
        let response = self
            .client
            .http_client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
        body.into_locations().map_err(ApiError::request_failed)
    }
}
