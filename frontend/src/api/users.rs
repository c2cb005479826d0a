use super::{
    client::ApiClient,
    endpoints::{kencan_api, CallArgs},
    types::{ApiError, LinkPartnerRequest, UpdateProfileRequest, UserProfile},
};

impl ApiClient {
    pub async fn sync_user(&self) -> Result<UserProfile, ApiError> {
        kencan_api::users::SYNC
            .call(self, CallArgs::new())
            .await
            .map(|resp| resp.data)
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        kencan_api::users::ME
            .call(self, CallArgs::new())
            .await
            .map(|resp| resp.data)
    }

    pub async fn update_profile(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        kencan_api::users::UPDATE_PROFILE
            .call(self, CallArgs::new().json(payload)?)
            .await
            .map(|resp| resp.data)
    }

    pub async fn link_partner(&self, partner_email: &str) -> Result<UserProfile, ApiError> {
        let payload = LinkPartnerRequest {
            partner_email: partner_email.trim().to_string(),
        };
        kencan_api::users::LINK_PARTNER
            .call(self, CallArgs::new().json(&payload)?)
            .await
            .map(|resp| resp.data)
    }
}
