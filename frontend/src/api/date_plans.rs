use super::{
    client::{ApiClient, ApiResponse},
    endpoints::{kencan_api, CallArgs},
    types::{ApiError, DatePlan, GeneratePlanRequest, RateLimitStatus},
};

impl ApiClient {
    /// Keeps the full response so callers can read the rate-limit header.
    pub async fn generate_plan(
        &self,
        payload: &GeneratePlanRequest,
    ) -> Result<ApiResponse<DatePlan>, ApiError> {
        kencan_api::date_plan::GENERATE
            .call(self, CallArgs::new().json(payload)?)
            .await
    }

    pub async fn get_plan(&self, id: &str) -> Result<DatePlan, ApiError> {
        kencan_api::date_plan::GET_BY_ID
            .call(self, CallArgs::new().param("id", id))
            .await
            .map(|resp| resp.data)
    }

    pub async fn get_my_plans(&self) -> Result<Vec<DatePlan>, ApiError> {
        kencan_api::date_plan::MY_PLANS
            .call(self, CallArgs::new())
            .await
            .map(|resp| resp.data)
    }

    pub async fn download_plan_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        kencan_api::date_plan::PDF
            .call_bytes(self, CallArgs::new().param("id", id))
            .await
            .map(|resp| resp.data)
    }

    pub async fn get_rate_limit_status(&self) -> Result<RateLimitStatus, ApiError> {
        kencan_api::rate_limit::STATUS
            .call(self, CallArgs::new())
            .await
            .map(|resp| resp.data)
    }
}
