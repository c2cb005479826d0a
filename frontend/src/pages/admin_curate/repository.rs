use crate::api::{ApiClient, ApiError, CuratedPlace, Paginated, UpdateCuratedPlaceRequest};
use std::rc::Rc;

pub const PAGE_SIZE: u32 = 10;

#[derive(Clone)]
pub struct CurateRepository {
    client: Rc<ApiClient>,
}

impl CurateRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub async fn list(&self, page: u32, search: &str) -> Result<Paginated<CuratedPlace>, ApiError> {
        self.client
            .list_curated_places(page, PAGE_SIZE, search)
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &UpdateCuratedPlaceRequest,
    ) -> Result<(), ApiError> {
        self.client.update_curated_place(id, payload).await.map(|_| ())
    }
}
