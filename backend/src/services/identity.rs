//! Session-cookie minting against the identity provider's REST API.
//!
//! The flow is: sign a service-account assertion (RS256), exchange it for an
//! OAuth access token, then call `createSessionCookie` with the user's ID
//! token. Access tokens are cached until shortly before they expire.

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::config::FirebaseCredentials;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const OAUTH_SCOPES: &str =
    "https://www.googleapis.com/auth/cloud-platform https://www.googleapis.com/auth/identitytoolkit";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_TTL_SECS: i64 = 3600;
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum MintError {
    #[error("identity provider credentials are not configured")]
    MissingCredentials,
    #[error("invalid service account key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("identity provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionMinter: Send + Sync {
    /// Exchanges a client ID token for a session cookie value valid for
    /// `expires_in`.
    async fn create_session_cookie(
        &self,
        id_token: &str,
        expires_in: Duration,
    ) -> Result<String, MintError>;
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    ASSERTION_TTL_SECS as u64
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieRequest<'a> {
    id_token: &'a str,
    valid_duration: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieResponse {
    session_cookie: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

pub struct FirebaseSessionMinter {
    client: reqwest::Client,
    credentials: Option<FirebaseCredentials>,
    token_url: String,
    identity_url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl FirebaseSessionMinter {
    pub fn new(credentials: Option<FirebaseCredentials>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            identity_url: IDENTITY_TOOLKIT_URL.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub fn with_endpoints(mut self, token_url: impl Into<String>, identity_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.identity_url = identity_url.into();
        self
    }

    fn credentials(&self) -> Result<&FirebaseCredentials, MintError> {
        self.credentials.as_ref().ok_or(MintError::MissingCredentials)
    }

    fn sign_assertion(&self, creds: &FirebaseCredentials) -> Result<String, MintError> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &creds.client_email,
            scope: OAUTH_SCOPES,
            aud: &self.token_url,
            iat: now,
            exp: now + ASSERTION_TTL_SECS,
        };
        let key = EncodingKey::from_rsa_pem(creds.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }

    async fn access_token(&self, creds: &FirebaseCredentials) -> Result<String, MintError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let assertion = self.sign_assertion(creds)?;
        let response = self
            .client
            .post(&self.token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let token: AccessTokenResponse = response.json().await?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_REFRESH_MARGIN);
        tracing::debug!(expires_in = token.expires_in, "obtained identity provider access token");
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MintError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderErrorBody>(&body)
        .map(|parsed| parsed.error.message)
        .unwrap_or(body);
    Err(MintError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl SessionMinter for FirebaseSessionMinter {
    async fn create_session_cookie(
        &self,
        id_token: &str,
        expires_in: Duration,
    ) -> Result<String, MintError> {
        let creds = self.credentials()?;
        let access_token = self.access_token(creds).await?;
        let url = format!(
            "{}/projects/{}:createSessionCookie",
            self.identity_url, creds.project_id
        );
        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(&CreateSessionCookieRequest {
                id_token,
                valid_duration: expires_in.as_secs(),
            })
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body: CreateSessionCookieResponse = response.json().await?;
        Ok(body.session_cookie)
    }
}
