//! Wizard stage transitions, free of any browser or network access.

use crate::{
    api::{ApiError, Coordinates, GeneratePlanRequest, PickedLocation},
    router::plan_detail_path,
};

use super::form::PlanForm;

pub const INITIAL_REMAINING: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStage {
    #[default]
    Idle,
    FetchingLocation,
    MapPicker,
    Options,
    FetchingPlan,
    Results,
}

/// A toast the view should raise after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    fn new(title: &str, description: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    pub stage: WizardStage,
    pub form: PlanForm,
    pub address: Option<String>,
    pub api_error: Option<String>,
    pub remaining: u32,
    pub plan_id: Option<i64>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            stage: WizardStage::Idle,
            form: PlanForm::default(),
            address: None,
            api_error: None,
            remaining: INITIAL_REMAINING,
            plan_id: None,
        }
    }
}

impl WizardState {
    pub fn is_busy(&self) -> bool {
        matches!(
            self.stage,
            WizardStage::FetchingLocation | WizardStage::FetchingPlan
        )
    }

    pub fn shows_options(&self) -> bool {
        matches!(self.stage, WizardStage::Options | WizardStage::FetchingPlan)
    }

    pub fn out_of_plans(&self) -> bool {
        self.remaining == 0
    }

    /// Returns false when a lookup or submission is already running.
    pub fn start(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.stage = WizardStage::FetchingLocation;
        self.api_error = None;
        true
    }

    pub fn location_found(&mut self, coordinates: Coordinates) {
        if self.stage != WizardStage::FetchingLocation {
            return;
        }
        self.form.location = Some(coordinates);
        self.stage = WizardStage::Options;
    }

    pub fn location_failed(&mut self) -> Option<Notice> {
        if self.stage != WizardStage::FetchingLocation {
            return None;
        }
        self.stage = WizardStage::MapPicker;
        Some(Notice::new(
            "Automatic location failed.",
            Some("Please pick a location manually to continue.".into()),
        ))
    }

    pub fn location_picked(&mut self, picked: PickedLocation) {
        if self.is_busy() {
            return;
        }
        self.form.location = Some(picked.coordinates);
        self.address = Some(picked.address);
        self.api_error = None;
        self.stage = WizardStage::Options;
    }

    /// Validates the form and enters `FetchingPlan`. `None` means the
    /// submission is ignored or invalid; invalid forms record the message.
    pub fn begin_submit(&mut self) -> Option<GeneratePlanRequest> {
        if self.stage != WizardStage::Options || self.out_of_plans() {
            return None;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.stage = WizardStage::FetchingPlan;
                self.api_error = None;
                Some(request)
            }
            Err(err) => {
                self.api_error = Some(err.error);
                None
            }
        }
    }

    /// Records a generated plan and returns the page to open.
    pub fn plan_generated(&mut self, plan_id: i64, remaining: Option<u32>) -> String {
        if let Some(remaining) = remaining {
            self.remaining = remaining;
        }
        self.plan_id = Some(plan_id);
        self.stage = WizardStage::Results;
        plan_detail_path(plan_id)
    }

    pub fn plan_failed(&mut self, error: &ApiError) -> Notice {
        let message = error.message_or_default().to_string();
        self.api_error = Some(message.clone());
        self.stage = WizardStage::Options;
        if error.is_rate_limited() {
            self.remaining = 0;
        }
        if self.out_of_plans() {
            Notice::new(
                "You have reached your request limit. Please sign in for more access.",
                None,
            )
        } else {
            Notice::new("Sorry! Failed to create a date plan.", Some(message))
        }
    }

    pub fn remaining_loaded(&mut self, remaining: u32) {
        self.remaining = remaining;
    }

    /// Back to the picker from the options card.
    pub fn change_location(&mut self) {
        if self.stage == WizardStage::Options {
            self.stage = WizardStage::MapPicker;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jakarta() -> Coordinates {
        Coordinates::new(-6.2088, 106.8456).unwrap()
    }

    fn at_options() -> WizardState {
        let mut state = WizardState::default();
        assert!(state.start());
        state.location_found(jakarta());
        state
    }

    #[test]
    fn starts_idle_with_five_free_plans() {
        let state = WizardState::default();
        assert_eq!(state.stage, WizardStage::Idle);
        assert_eq!(state.remaining, INITIAL_REMAINING);
    }

    #[test]
    fn start_clears_previous_error() {
        let mut state = WizardState {
            api_error: Some("old".into()),
            ..Default::default()
        };
        assert!(state.start());
        assert_eq!(state.stage, WizardStage::FetchingLocation);
        assert!(state.api_error.is_none());
        assert!(!state.start());
    }

    #[test]
    fn geolocation_success_goes_to_options() {
        let state = at_options();
        assert_eq!(state.stage, WizardStage::Options);
        assert_eq!(state.form.location, Some(jakarta()));
    }

    #[test]
    fn geolocation_failure_always_lands_on_map_picker() {
        let mut state = WizardState::default();
        state.start();
        let notice = state.location_failed().unwrap();
        assert_eq!(state.stage, WizardStage::MapPicker);
        assert_eq!(notice.title, "Automatic location failed.");
        assert!(state.form.location.is_none());
        // No way to reach results without a location and a submission.
        assert!(state.begin_submit().is_none());
        assert_ne!(state.stage, WizardStage::Results);
    }

    #[test]
    fn every_failure_sequence_avoids_results() {
        for failures in 1..4 {
            let mut state = WizardState::default();
            for _ in 0..failures {
                assert!(state.start());
                state.location_failed();
                assert_eq!(state.stage, WizardStage::MapPicker);
            }
            assert!(state.plan_id.is_none());
        }
    }

    #[test]
    fn late_geolocation_results_are_ignored() {
        let mut state = WizardState::default();
        state.start();
        state.location_failed();
        state.location_found(jakarta());
        assert_eq!(state.stage, WizardStage::MapPicker);
        assert!(state.location_failed().is_none());
    }

    #[test]
    fn manual_pick_carries_both_coordinates_into_the_request() {
        let mut state = WizardState::default();
        state.start();
        state.location_failed();
        state.api_error = Some("stale".into());
        state.location_picked(PickedLocation {
            coordinates: Coordinates::new(-6.1754, 106.8272).unwrap(),
            address: "Monas, Jakarta".into(),
        });
        assert_eq!(state.stage, WizardStage::Options);
        assert!(state.api_error.is_none());
        assert_eq!(state.address.as_deref(), Some("Monas, Jakarta"));

        let request = state.begin_submit().unwrap();
        assert_eq!((request.lat, request.lng), (-6.1754, 106.8272));
        assert_eq!(state.stage, WizardStage::FetchingPlan);
    }

    #[test]
    fn submit_while_fetching_is_ignored() {
        let mut state = at_options();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.stage, WizardStage::FetchingPlan);
    }

    #[test]
    fn submit_without_location_reports_validation_message() {
        let mut state = WizardState {
            stage: WizardStage::Options,
            ..Default::default()
        };
        assert!(state.begin_submit().is_none());
        assert_eq!(state.api_error.as_deref(), Some("Please select a location."));
        assert_eq!(state.stage, WizardStage::Options);
    }

    #[test]
    fn success_records_remaining_and_targets_plan_page() {
        let mut state = at_options();
        state.begin_submit();
        let path = state.plan_generated(42, Some(3));
        assert_eq!(path, "/app/plan/42");
        assert_eq!(state.stage, WizardStage::Results);
        assert_eq!(state.remaining, 3);

        let mut state = at_options();
        state.begin_submit();
        state.plan_generated(7, None);
        assert_eq!(state.remaining, INITIAL_REMAINING);
    }

    #[test]
    fn rate_limited_failure_exhausts_remaining() {
        let mut state = at_options();
        state.begin_submit();
        let notice = state.plan_failed(&ApiError::from_status(429, None));
        assert_eq!(state.stage, WizardStage::Options);
        assert_eq!(state.remaining, 0);
        assert!(state.out_of_plans());
        assert_eq!(
            notice.title,
            "You have reached your request limit. Please sign in for more access."
        );
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn other_failures_keep_remaining_and_describe_error() {
        let mut state = at_options();
        state.begin_submit();
        let notice = state.plan_failed(&ApiError::from_status(
            500,
            Some(&serde_json::json!({ "message": "No places found" })),
        ));
        assert_eq!(state.remaining, INITIAL_REMAINING);
        assert_eq!(state.api_error.as_deref(), Some("No places found"));
        assert_eq!(notice.title, "Sorry! Failed to create a date plan.");
        assert_eq!(notice.description.as_deref(), Some("No places found"));
    }
}
