use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub partner_name: Option<String>,
    pub partner_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePlace {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub google_place_id: String,
    pub photo_reference: Option<String>,
    #[serde(default)]
    pub cached_photo_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateStep {
    pub id: i64,
    pub date_plan_id: i64,
    pub step_number: u32,
    pub place_id: i64,
    pub place: DatePlace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePlan {
    pub id: i64,
    #[serde(default)]
    pub steps: Vec<DateStep>,
    pub user_id: Option<String>,
    pub theme: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DatePlan {
    /// Places in itinerary order.
    pub fn ordered_places(&self) -> Vec<DatePlace> {
        let mut steps: Vec<&DateStep> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.step_number);
        steps.into_iter().map(|step| step.place.clone()).collect()
    }

    pub fn is_owned_by(&self, uid: Option<&str>) -> bool {
        match (uid, self.user_id.as_deref()) {
            (Some(uid), Some(owner)) => !uid.is_empty() && uid == owner,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceExtension {
    pub id: i64,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub boosted_rate: f64,
    pub place_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedPlace {
    pub id: i64,
    pub google_place_id: String,
    pub name: String,
    pub address: Option<String>,
    pub photo_reference: Option<String>,
    pub cached_photo_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub activity_type: Option<String>,
    #[serde(default)]
    pub needs_photo_processing: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub extension: Option<PlaceExtension>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub remaining: u32,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    #[default]
    Romantic,
    Adventurous,
    Artsy,
    Entertainment,
    Foodie,
    Relaxing,
    Sporty,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 7] = [
        PlaceCategory::Romantic,
        PlaceCategory::Adventurous,
        PlaceCategory::Artsy,
        PlaceCategory::Entertainment,
        PlaceCategory::Foodie,
        PlaceCategory::Relaxing,
        PlaceCategory::Sporty,
    ];

    pub fn value(self) -> &'static str {
        match self {
            PlaceCategory::Romantic => "romantic",
            PlaceCategory::Adventurous => "adventurous",
            PlaceCategory::Artsy => "artsy",
            PlaceCategory::Entertainment => "entertainment",
            PlaceCategory::Foodie => "foodie",
            PlaceCategory::Relaxing => "relaxing",
            PlaceCategory::Sporty => "sporty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaceCategory::Romantic => "Romantic",
            PlaceCategory::Adventurous => "Adventurous",
            PlaceCategory::Artsy => "Artsy",
            PlaceCategory::Entertainment => "Entertainment",
            PlaceCategory::Foodie => "Foodie",
            PlaceCategory::Relaxing => "Relaxing",
            PlaceCategory::Sporty => "Sporty",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PlaceCategory::Romantic => "💕",
            PlaceCategory::Adventurous => "🧭",
            PlaceCategory::Artsy => "🎨",
            PlaceCategory::Entertainment => "📺",
            PlaceCategory::Foodie => "🍖",
            PlaceCategory::Relaxing => "🫧",
            PlaceCategory::Sporty => "🚲",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        valid.then_some(Self { lat, lng })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickedLocation {
    pub coordinates: Coordinates,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    pub category: PlaceCategory,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPartnerRequest {
    pub partner_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionUpdate {
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub boosted_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCuratedPlaceRequest {
    pub name: String,
    pub category: String,
    pub activity_type: Option<String>,
    pub extension: ExtensionUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub const UNKNOWN_API_ERROR: &str = "An unknown API error occurred";

fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    /// Builds the error for a non-2xx response. The message comes from the
    /// payload's `message` (or `error`) field, falling back to the status line.
    /// Validation responses carry `message` as a list; its entries are joined.
    pub fn from_status(status: u16, payload: Option<&Value>) -> Self {
        let message = payload
            .and_then(|body| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| body.get(key).and_then(message_text))
            })
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        let code = match status {
            401 => "UNAUTHORIZED",
            403 => "FORBIDDEN",
            404 => "NOT_FOUND",
            429 => "RATE_LIMITED",
            _ => "HTTP_ERROR",
        };
        Self {
            error: message,
            code: code.to_string(),
            status: Some(status),
            details: payload.cloned(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429) || self.code == "RATE_LIMITED"
    }

    pub fn message_or_default(&self) -> &str {
        if self.error.trim().is_empty() {
            UNKNOWN_API_ERROR
        } else {
            &self.error
        }
    }
}
