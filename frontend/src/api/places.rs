use super::{
    client::ApiClient,
    endpoints::{kencan_api, CallArgs},
    types::{ApiError, CuratedPlace, Paginated, UpdateCuratedPlaceRequest},
};

impl ApiClient {
    pub async fn list_curated_places(
        &self,
        page: u32,
        limit: u32,
        search: &str,
    ) -> Result<Paginated<CuratedPlace>, ApiError> {
        let args = CallArgs::new()
            .query("page", page)
            .query("limit", limit)
            .query("search", search.trim());
        kencan_api::places::LIST
            .call(self, args)
            .await
            .map(|resp| resp.data)
    }

    pub async fn update_curated_place(
        &self,
        id: i64,
        payload: &UpdateCuratedPlaceRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let args = CallArgs::new().param("id", id).json(payload)?;
        kencan_api::places::UPDATE
            .call(self, args)
            .await
            .map(|resp| resp.data)
    }
}
