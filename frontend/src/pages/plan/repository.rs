use crate::api::{ApiClient, ApiError, DatePlan};
use std::rc::Rc;

#[derive(Clone)]
pub struct PlanRepository {
    client: Rc<ApiClient>,
}

impl PlanRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub async fn load(&self, id: &str) -> Result<DatePlan, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::validation("Missing plan id"));
        }
        self.client.get_plan(id.trim()).await
    }

    pub async fn pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client.download_plan_pdf(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::identity::StaticIdentity;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> PlanRepository {
        PlanRepository::new(
            ApiClient::new_with_base_url(server.base_url())
                .with_identity(Rc::new(StaticIdentity::signed_out())),
        )
    }

    #[tokio::test]
    async fn load_fetches_plan_by_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/date-plan/42");
            then.status(200).json_body(json!({
                "id": 42, "userId": "uid-alice", "theme": "ARTSY", "steps": [],
                "createdAt": "2025-02-14T10:00:00Z", "updatedAt": "2025-02-14T10:00:00Z"
            }));
        });
        let plan = repository(&server).load("42").await.unwrap();
        assert_eq!(plan.theme, "ARTSY");
    }

    #[tokio::test]
    async fn blank_id_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let err = repository(&server).load(" ").await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
