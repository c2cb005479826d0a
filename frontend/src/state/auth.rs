use crate::{
    api::{ApiClient, UserProfile},
    components::layout::FullScreenLoader,
    identity::{default_identity, IdentityProvider, IdentityUser, SharedIdentity},
    router::paths,
    state::toast::{use_toaster, Toaster},
    utils::navigation::navigate_to,
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<IdentityUser>,
    pub profile: Option<UserProfile>,
    /// True once the first identity callback has been handled.
    pub is_ready: bool,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn uid(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.uid.as_str())
    }
}

pub fn use_identity() -> SharedIdentity {
    use_context::<SharedIdentity>().unwrap_or_else(default_identity)
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new().with_identity(use_identity()))
}

/// Applies one identity transition: mint or clear the session cookie, load or
/// drop the profile, then mark the context ready.
pub async fn sync_auth_state(
    api: &ApiClient,
    identity: &dyn IdentityProvider,
    user: Option<IdentityUser>,
    set_auth_state: WriteSignal<AuthState>,
) {
    set_auth_state.update(|state| state.user = user.clone());

    let profile = match user {
        Some(_) => establish_session(api, identity).await,
        None => {
            if let Err(err) = api.clear_session().await {
                log::warn!("failed to clear session cookie: {}", err);
            }
            None
        }
    };

    set_auth_state.update(|state| {
        state.profile = profile;
        state.is_ready = true;
    });
}

async fn establish_session(api: &ApiClient, identity: &dyn IdentityProvider) -> Option<UserProfile> {
    let token = match identity.id_token().await {
        Ok(token) => token,
        Err(err) => {
            log::error!("failed during user session/profile sync: {}", err);
            return None;
        }
    };

    let (session, profile) = futures::join!(
        api.create_session(&token),
        api.fetch_profile_with_token(&token)
    );
    if let Err(err) = session {
        log::warn!("failed to create session cookie: {}", err);
    }
    match profile {
        Ok(profile) => profile,
        Err(err) => {
            log::error!("failed during user session/profile sync: {}", err);
            None
        }
    }
}

/// Re-reads the profile after an edit.
pub async fn refresh_profile(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api.get_me().await {
        Ok(profile) => set_auth_state.update(|state| state.profile = Some(profile)),
        Err(err) => log::warn!("could not refresh profile: {}", err),
    }
}

pub const IDENTITY_UNAVAILABLE: &str = "Sign-in is unavailable.";

/// Tells the visitor when the identity provider never came up; returns
/// whether a notice was shown.
pub fn report_unavailable_identity(identity: &dyn IdentityProvider, toaster: Toaster) -> bool {
    if identity.is_available() {
        return false;
    }
    log::error!("identity provider is not available");
    toaster.error_with(
        IDENTITY_UNAVAILABLE,
        "The sign-in service could not be loaded. Please try again later.",
    );
    true
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let identity = use_identity();
    let api = use_api_client();
    report_unavailable_identity(identity.as_ref(), use_toaster());
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    provide_context::<AuthContext>((auth_state, set_auth_state));

    let listener_identity = identity.clone();
    let subscription = identity.on_auth_state_changed(Box::new(move |user| {
        let api = api.clone();
        let identity = listener_identity.clone();
        spawn_local(async move {
            sync_auth_state(&api, identity.as_ref(), user, set_auth_state).await;
        });
    }));
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <Show
            when=move || auth_state.get().is_ready
            fallback=|| view! { <FullScreenLoader /> }
        >
            {children()}
        </Show>
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn sign_in_with_google(identity: &dyn IdentityProvider) -> Result<(), String> {
    match identity.sign_in_with_google().await {
        Ok(_) => Ok(()),
        Err(err) => {
            log::error!("error signing in with Google: {}", err);
            Err(err.to_string())
        }
    }
}

/// Signs out, then clears the session cookie so the next page load is not
/// redirected by the server-side route guard.
pub async fn logout(identity: &dyn IdentityProvider, api: &ApiClient) -> Result<(), String> {
    identity.sign_out().await.map_err(|err| {
        log::error!("error signing out: {}", err);
        err.to_string()
    })?;
    if let Err(err) = api.clear_session().await {
        log::warn!("failed to clear session cookie: {}", err);
    }
    Ok(())
}

pub fn use_sign_in_action() -> Action<(), Result<(), String>> {
    let identity = use_identity();
    let toaster = use_toaster();
    create_action(move |_: &()| {
        let identity = identity.clone();
        async move {
            let result = sign_in_with_google(identity.as_ref()).await;
            match &result {
                Ok(()) => navigate_to(paths::APP),
                Err(message) => toaster.error_with("Sign-in failed.", message),
            }
            result
        }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), String>> {
    let identity = use_identity();
    let api = use_api_client();
    create_action(move |_: &()| {
        let identity = identity.clone();
        let api = api.clone();
        async move {
            let result = logout(identity.as_ref(), &api).await;
            navigate_to(paths::AUTH);
            result
        }
    })
}
