use super::{
    machine::{Notice, WizardState},
    repository::PlanWizardRepository,
};
use crate::{
    api::{ApiError, Coordinates, PickedLocation},
    state::{auth::use_api_client, toast::use_toaster},
    utils::{
        geolocation::{current_position, GeolocationError},
        navigation::use_app_navigate,
    },
};
use leptos::*;
use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Navigate(String),
    Failed(Notice),
}

/// Runs one geolocation lookup for a wizard that has just been started.
pub async fn locate<F>(state: RwSignal<WizardState>, lookup: F) -> Option<Notice>
where
    F: Future<Output = Result<Coordinates, GeolocationError>>,
{
    match lookup.await {
        Ok(coordinates) => {
            state.update(|s| s.location_found(coordinates));
            None
        }
        Err(err) => {
            log::info!("automatic location failed: {}", err);
            let mut notice = None;
            state.update(|s| notice = s.location_failed());
            notice
        }
    }
}

/// Validates the form, calls generate and applies the result to `state`.
pub async fn submit_plan(repo: &PlanWizardRepository, state: RwSignal<WizardState>) -> SubmitOutcome {
    let mut request = None;
    state.update(|s| request = s.begin_submit());
    let Some(request) = request else {
        return SubmitOutcome::Ignored;
    };
    match repo.generate(request).await {
        Ok(generated) => {
            let mut path = String::new();
            state.update(|s| path = s.plan_generated(generated.id, generated.remaining));
            SubmitOutcome::Navigate(path)
        }
        Err(err) => {
            log::error!("failed to generate date plan: {}", err);
            let mut notice = None;
            state.update(|s| notice = Some(s.plan_failed(&err)));
            notice.map(SubmitOutcome::Failed).unwrap_or(SubmitOutcome::Ignored)
        }
    }
}

pub async fn load_remaining(repo: &PlanWizardRepository, state: RwSignal<WizardState>) {
    match repo.remaining_plans().await {
        Ok(remaining) => state.update(|s| s.remaining_loaded(remaining)),
        Err(err) => log::error!("could not fetch rate limit status: {}", err),
    }
}

#[derive(Clone, Copy)]
pub struct PlanWizardViewModel {
    pub state: RwSignal<WizardState>,
    pub start_action: Action<(), ()>,
    pub submit_action: Action<(), ()>,
    pub search_action: Action<String, Result<Vec<PickedLocation>, ApiError>>,
}

impl PlanWizardViewModel {
    pub fn pick_location(&self, picked: PickedLocation) {
        self.state.update(|s| s.location_picked(picked));
    }

    pub fn change_location(&self) {
        self.state.update(|s| s.change_location());
    }
}

pub fn use_plan_wizard_view_model() -> PlanWizardViewModel {
    let repository = store_value(PlanWizardRepository::new(use_api_client()));
    let toaster = use_toaster();
    let navigate = store_value(use_app_navigate());
    let state = create_rw_signal(WizardState::default());

    create_effect(move |_| {
        let repo = repository.get_value();
        spawn_local(async move { load_remaining(&repo, state).await });
    });

    let start_action = create_action(move |_: &()| async move {
        let mut started = false;
        state.update(|s| started = s.start());
        if !started {
            return;
        }
        if let Some(notice) = locate(state, current_position()).await {
            show_notice(toaster, notice);
        }
    });

    let submit_action = create_action(move |_: &()| {
        let repo = repository.get_value();
        async move {
            match submit_plan(&repo, state).await {
                SubmitOutcome::Navigate(path) => navigate.with_value(|go| go(&path)),
                SubmitOutcome::Failed(notice) => show_notice(toaster, notice),
                SubmitOutcome::Ignored => {}
            }
        }
    });

    let search_action = create_action(move |query: &String| {
        let repo = repository.get_value();
        let query = query.clone();
        async move { repo.search_locations(&query).await }
    });

    PlanWizardViewModel {
        state,
        start_action,
        submit_action,
        search_action,
    }
}

fn show_notice(toaster: crate::state::toast::Toaster, notice: Notice) {
    match notice.description {
        Some(description) => toaster.error_with(&notice.title, &description),
        None => toaster.error(&notice.title),
    }
}
