use super::{
    form::{ProfileForm, ProfileFormErrors},
    repository::ProfileRepository,
};
use crate::{
    api::{ApiError, UserProfile},
    state::{
        auth::{refresh_profile, use_api_client, use_auth},
        toast::use_toaster,
    },
};
use leptos::*;

pub const SIGNED_OUT_MESSAGE: &str = "You must be logged in to update your profile.";

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Invalid(ProfileFormErrors),
    Saved(UserProfile),
    Failed(ApiError),
}

pub async fn save_profile(repo: &ProfileRepository, form: &ProfileForm) -> SaveOutcome {
    let payload = match form.to_request() {
        Ok(payload) => payload,
        Err(errors) => return SaveOutcome::Invalid(errors),
    };
    match repo.update(&payload).await {
        Ok(profile) => SaveOutcome::Saved(profile),
        Err(err) => SaveOutcome::Failed(err),
    }
}

#[derive(Clone, Copy)]
pub struct ProfileSettingsViewModel {
    pub form: RwSignal<ProfileForm>,
    pub errors: RwSignal<ProfileFormErrors>,
    pub save_action: Action<ProfileForm, SaveOutcome>,
    pub signed_in: Memo<bool>,
}

impl ProfileSettingsViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        let errors = form.errors();
        self.errors.set(errors);
        if errors.is_empty() {
            self.save_action.dispatch(form);
        }
    }
}

pub fn use_profile_settings_view_model() -> ProfileSettingsViewModel {
    let (auth, set_auth) = use_auth();
    let repository = store_value(ProfileRepository::new(use_api_client()));
    let toaster = use_toaster();

    let form = create_rw_signal(auth.with_untracked(|a| ProfileForm::from_profile(a.profile.as_ref())));
    let errors = create_rw_signal(ProfileFormErrors::default());
    let signed_in = create_memo(move |_| auth.with(|a| a.is_signed_in()));

    create_effect(move |_| {
        let seeded = auth.with(|a| ProfileForm::from_profile(a.profile.as_ref()));
        form.set(seeded);
    });

    let save_action = create_action(move |form: &ProfileForm| {
        let repo = repository.get_value();
        let form = form.clone();
        async move {
            let outcome = save_profile(&repo, &form).await;
            match &outcome {
                SaveOutcome::Saved(_) => {
                    toaster.success("Profile updated successfully!");
                    refresh_profile(repo.client(), set_auth).await;
                }
                SaveOutcome::Failed(err) => {
                    log::error!("profile update failed: {}", err);
                    toaster.error_with("Update failed", err.message_or_default());
                }
                SaveOutcome::Invalid(_) => {}
            }
            outcome
        }
    });

    create_effect(move |_| {
        if let Some(SaveOutcome::Invalid(found)) = save_action.value().get() {
            errors.set(found);
        }
    });

    ProfileSettingsViewModel {
        form,
        errors,
        save_action,
        signed_in,
    }
}
