use reqwest::header::AUTHORIZATION;

use super::{
    client::{error_from_response, transport_error, ApiClient},
    types::{ApiError, StatusResponse, UserProfile},
};

impl ApiClient {
    /// Exchanges an identity token for the HTTP-only `session` cookie.
    pub async fn create_session(&self, id_token: &str) -> Result<StatusResponse, ApiError> {
        let url = self.resolved_session_url().await;
        let response = self
            .http_client()
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", id_token))
            .send()
            .await
            .map_err(transport_error)?;
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn clear_session(&self) -> Result<(), ApiError> {
        let url = self.resolved_session_url().await;
        let response = self
            .http_client()
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Fetches `/users/me` with an explicit token. A non-2xx answer means the
    /// profile has not been synced yet and yields `None`.
    pub async fn fetch_profile_with_token(
        &self,
        id_token: &str,
    ) -> Result<Option<UserProfile>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/users/me", base_url))
            .header(AUTHORIZATION, format!("Bearer {}", id_token))
            .send()
            .await
            .map_err(transport_error)?;
        if !response.status().is_success() {
            return Ok(None);
        }
        response
            .json()
            .await
            .map(Some)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }
}
