use crate::api::{ApiClient, ApiError, DatePlan};
use std::rc::Rc;

#[derive(Clone)]
pub struct MyPlansRepository {
    client: Rc<ApiClient>,
}

impl MyPlansRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub async fn list(&self) -> Result<Vec<DatePlan>, ApiError> {
        self.client.get_my_plans().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::identity::StaticIdentity;
    use crate::test_support::helpers::alice;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/date-plan/my-plans")
                .header("authorization", "Bearer id-token-1");
            then.status(200).json_body(json!([{
                "id": 1, "userId": "uid-alice", "theme": "FOODIE", "steps": [],
                "createdAt": "2025-02-14T10:00:00Z", "updatedAt": "2025-02-14T10:00:00Z"
            }]));
        });
        let repo = MyPlansRepository::new(
            ApiClient::new_with_base_url(server.base_url())
                .with_identity(Rc::new(StaticIdentity::signed_in(alice(), "id-token-1"))),
        );
        let plans = repo.list().await.unwrap();
        assert_eq!(plans.len(), 1);
        mock.assert();
    }
}
