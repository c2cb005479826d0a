use crate::api::{CuratedPlace, ExtensionUpdate, PlaceExtension, UpdateCuratedPlaceRequest};

pub const DEFAULT_BOOST: f64 = 1.0;

/// Raw text of the edit dialog. Numbers stay strings until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPlaceForm {
    pub name: String,
    pub category: String,
    pub activity_type: String,
    pub price_min: String,
    pub price_max: String,
    pub boosted_rate: String,
}

impl EditPlaceForm {
    pub fn from_place(place: &CuratedPlace) -> Self {
        let ext = place.extension.as_ref();
        Self {
            name: place.name.clone(),
            category: place.category.clone(),
            activity_type: place.activity_type.clone().unwrap_or_default(),
            price_min: ext
                .and_then(|e| e.price_min)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            price_max: ext
                .and_then(|e| e.price_max)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            boosted_rate: ext.map(|e| e.boosted_rate.to_string()).unwrap_or_default(),
        }
    }

    pub fn to_request(&self) -> UpdateCuratedPlaceRequest {
        let activity_type = self.activity_type.trim();
        UpdateCuratedPlaceRequest {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            activity_type: (!activity_type.is_empty()).then(|| activity_type.to_string()),
            extension: ExtensionUpdate {
                price_min: parse_price(&self.price_min),
                price_max: parse_price(&self.price_max),
                boosted_rate: parse_boost(&self.boosted_rate),
            },
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

/// Non-numeric and zero prices are cleared.
pub fn parse_price(raw: &str) -> Option<i64> {
    parse_number(raw).map(|value| value.round() as i64)
}

pub fn parse_boost(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(DEFAULT_BOOST)
}

/// Merges a saved payload into the row shown in the table.
pub fn apply_update(place: &mut CuratedPlace, update: &UpdateCuratedPlaceRequest) {
    place.name = update.name.clone();
    place.category = update.category.clone();
    place.activity_type = update.activity_type.clone();
    let ext = place.extension.get_or_insert_with(|| PlaceExtension {
        id: 0,
        price_min: None,
        price_max: None,
        boosted_rate: DEFAULT_BOOST,
        place_id: place.id,
    });
    ext.price_min = update.extension.price_min;
    ext.price_max = update.extension.price_max;
    ext.boosted_rate = update.extension.boosted_rate;
}
