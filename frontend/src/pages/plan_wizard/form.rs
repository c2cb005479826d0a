use crate::api::{ApiError, Coordinates, GeneratePlanRequest, PlaceCategory};

pub const LOCATION_REQUIRED: &str = "Please select a location.";

/// Raw wizard form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanForm {
    pub location: Option<Coordinates>,
    pub category: PlaceCategory,
    pub budget: String,
}

impl PlanForm {
    /// Empty, non-numeric and zero budgets mean "no limit".
    pub fn budget_value(&self) -> Option<u64> {
        let raw = self.budget.trim();
        if raw.is_empty() {
            return None;
        }
        let value: f64 = raw.parse().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        Some(value.round() as u64).filter(|rounded| *rounded > 0)
    }

    pub fn to_request(&self) -> Result<GeneratePlanRequest, ApiError> {
        let location = self
            .location
            .and_then(|c| Coordinates::new(c.lat, c.lng))
            .ok_or_else(|| ApiError::validation(LOCATION_REQUIRED))?;
        Ok(GeneratePlanRequest {
            category: self.category,
            lat: location.lat,
            lng: location.lng,
            budget: self.budget_value(),
        })
    }
}

/// Parses the manual latitude/longitude inputs of the map picker. Both are
/// required and must be in range.
pub fn parse_manual_location(lat: &str, lng: &str) -> Result<Coordinates, String> {
    let (lat, lng) = (lat.trim(), lng.trim());
    if lat.is_empty() || lng.is_empty() {
        return Err("Both latitude and longitude are required.".into());
    }
    let lat: f64 = lat
        .parse()
        .map_err(|_| "Latitude must be a number.".to_string())?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| "Longitude must be a number.".to_string())?;
    Coordinates::new(lat, lng)
        .ok_or_else(|| "Latitude must be within ±90 and longitude within ±180.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(budget: &str) -> PlanForm {
        PlanForm {
            location: Coordinates::new(-6.2, 106.8),
            category: PlaceCategory::Foodie,
            budget: budget.into(),
        }
    }

    #[test]
    fn budget_is_coerced_like_a_number_field() {
        assert_eq!(form("").budget_value(), None);
        assert_eq!(form("abc").budget_value(), None);
        assert_eq!(form("0").budget_value(), None);
        assert_eq!(form("-5").budget_value(), None);
        assert_eq!(form(" 250000 ").budget_value(), Some(250000));
        assert_eq!(form("99.6").budget_value(), Some(100));
        assert_eq!(form("0.4").budget_value(), None);
        assert_eq!(form("0.5").budget_value(), Some(1));
    }

    #[test]
    fn request_requires_a_location() {
        let mut missing = form("");
        missing.location = None;
        let err = missing.to_request().unwrap_err();
        assert_eq!(err.error, LOCATION_REQUIRED);
        assert_eq!(err.code, "VALIDATION_ERROR");

        let request = form("150000").to_request().unwrap();
        assert_eq!(request.category, PlaceCategory::Foodie);
        assert_eq!((request.lat, request.lng), (-6.2, 106.8));
        assert_eq!(request.budget, Some(150000));
    }

    #[test]
    fn manual_location_needs_both_coordinates() {
        assert!(parse_manual_location("-6.2", "").is_err());
        assert!(parse_manual_location("", "106.8").is_err());
        assert!(parse_manual_location("north", "106.8").is_err());
        assert!(parse_manual_location("-91", "106.8").is_err());
        let picked = parse_manual_location(" -6.2 ", "106.8").unwrap();
        assert_eq!((picked.lat, picked.lng), (-6.2, 106.8));
    }
}
