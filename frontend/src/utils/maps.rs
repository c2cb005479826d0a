use crate::api::{Coordinates, PickedLocation};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// Same reserved set as `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: -6.2088,
    lng: 106.8456,
};

const STATIC_MAP_BASE: &str = "https://maps.googleapis.com/maps/api/staticmap";
const SEARCH_BASE: &str = "https://www.google.com/maps/search/";
pub const GEOCODE_BASE: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const GEOCODE_REGION: &str = "country:ID";

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

pub fn static_map_url(lat: f64, lng: f64, api_key: &str) -> String {
    format!(
        "{}?center={lat},{lng}&zoom=15&size=600x300&markers=color:red%7C{lat},{lng}&key={}",
        STATIC_MAP_BASE,
        api_key,
        lat = lat,
        lng = lng,
    )
}

pub fn open_in_maps_url(name: &str, google_place_id: &str) -> String {
    format!(
        "{}?api=1&query={}&query_place_id={}",
        SEARCH_BASE,
        encode_component(name),
        google_place_id
    )
}

pub fn geocode_url(base: &str, address: &str, api_key: &str) -> String {
    format!(
        "{}?address={}&components={}&key={}",
        base,
        encode_component(address.trim()),
        GEOCODE_REGION,
        api_key
    )
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeGeometry {
    pub location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeLocation {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResponse {
    /// Valid candidates. `ZERO_RESULTS` is an empty list, any other non-OK
    /// status is an error.
    pub fn into_locations(self) -> Result<Vec<PickedLocation>, String> {
        match self.status.as_str() {
            "OK" => Ok(self
                .results
                .into_iter()
                .filter_map(|r| {
                    Coordinates::new(r.geometry.location.lat, r.geometry.location.lng).map(
                        |coordinates| PickedLocation {
                            coordinates,
                            address: r.formatted_address,
                        },
                    )
                })
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            other => Err(self
                .error_message
                .unwrap_or_else(|| format!("Geocoding failed: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn static_map_url_centres_and_marks_the_place() {
        assert_eq!(
            static_map_url(-6.2, 106.8, "KEY"),
            "https://maps.googleapis.com/maps/api/staticmap?center=-6.2,106.8&zoom=15&size=600x300&markers=color:red%7C-6.2,106.8&key=KEY"
        );
    }

    #[test]
    fn open_in_maps_url_encodes_the_name() {
        assert_eq!(
            open_in_maps_url("Kopi & Senja", "g-1"),
            "https://www.google.com/maps/search/?api=1&query=Kopi%20%26%20Senja&query_place_id=g-1"
        );
    }

    #[test]
    fn geocode_url_restricts_to_indonesia() {
        let url = geocode_url(GEOCODE_BASE, " Monas, Jakarta ", "k");
        assert!(url.starts_with("https://maps.googleapis.com/maps/api/geocode/json?"));
        assert!(url.contains("address=Monas%2C%20Jakarta"));
        assert!(url.contains("components=country:ID"));
        assert!(url.ends_with("key=k"));
    }

    #[test]
    fn geocode_response_yields_picked_locations() {
        let response: GeocodeResponse = serde_json::from_value(json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Monas, Jakarta",
                    "geometry": { "location": { "lat": -6.1754, "lng": 106.8272 } }
                },
                {
                    "formatted_address": "Broken",
                    "geometry": { "location": { "lat": 123.0, "lng": 0.0 } }
                }
            ]
        }))
        .unwrap();
        let locations = response.into_locations().unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].address, "Monas, Jakarta");
        assert_eq!(locations[0].coordinates.lat, -6.1754);
    }

    #[test]
    fn geocode_errors_surface_provider_message() {
        let empty: GeocodeResponse =
            serde_json::from_value(json!({ "status": "ZERO_RESULTS", "results": [] })).unwrap();
        assert!(empty.into_locations().unwrap().is_empty());

        let denied: GeocodeResponse = serde_json::from_value(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }))
        .unwrap();
        assert_eq!(denied.into_locations().unwrap_err(), "The provided API key is invalid.");
    }
}
