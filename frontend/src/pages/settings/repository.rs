use crate::api::{ApiClient, ApiError, UpdateProfileRequest, UserProfile};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProfileRepository {
    client: Rc<ApiClient>,
}

impl ProfileRepository {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn update(&self, payload: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
        self.client.update_profile(payload).await
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
    async fn update_patches_me_with_camel_case_body() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::PATCH)
                .path("/users/me")
                .json_body(json!({ "name": "Alice", "partnerName": "Bob", "partnerEmail": "" }));
            then.status(200).json_body(json!({
                "id": "uid-alice", "email": "alice@example.com", "name": "Alice",
                "partnerName": "Bob", "partnerEmail": null,
                "createdAt": "2025-01-01T00:00:00Z", "updatedAt": "2025-01-02T00:00:00Z"
            }));
        });
        let repo = ProfileRepository::new(
            ApiClient::new_with_base_url(server.base_url())
                .with_identity(Rc::new(StaticIdentity::signed_in(alice(), "tok"))),
        );
        let profile = repo
            .update(&UpdateProfileRequest {
                name: "Alice".into(),
                partner_name: Some("Bob".into()),
                partner_email: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(profile.partner_name.as_deref(), Some("Bob"));
        mock.assert();
    }

    #[tokio::test]
    async fn update_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(httpmock::Method::PATCH).path("/users/me");
            then.status(400).json_body(json!({ "message": "Partner not found" }));
        });
        let repo = ProfileRepository::new(
            ApiClient::new_with_base_url(server.base_url())
                .with_identity(Rc::new(StaticIdentity::signed_in(alice(), "tok"))),
        );
        let err = repo
            .update(&UpdateProfileRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.message_or_default(), "Partner not found");
    }
}
