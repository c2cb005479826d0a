//! Identity-provider seam.
//!
//! The browser build talks to the provider SDK through a small JS shim
//! (`public/identity.js`, exposed as `window.kencanIdentity`). Host builds and
//! tests use [`StaticIdentity`], which keeps the signed-in user in memory and
//! notifies listeners synchronously.

use crate::config::FirebaseWebConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("no signed-in user")]
    NoUser,
    #[error("identity provider is unavailable")]
    Unavailable,
    #[error("identity provider is not configured")]
    NotConfigured,
    #[error("{0}")]
    Provider(String),
}

pub type AuthStateListener = Box<dyn Fn(Option<IdentityUser>)>;

/// Handle returned by [`IdentityProvider::on_auth_state_changed`].
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// False when the provider SDK could not be loaded or configured.
    fn is_available(&self) -> bool {
        true
    }

    fn current_user(&self) -> Option<IdentityUser>;

    async fn id_token(&self) -> Result<String, IdentityError>;

    /// Registers `listener`; it fires once with the current state and then on
    /// every sign-in or sign-out.
    fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription;

    async fn sign_in_with_google(&self) -> Result<IdentityUser, IdentityError>;

    async fn sign_out(&self) -> Result<(), IdentityError>;
}

pub type SharedIdentity = Rc<dyn IdentityProvider>;

#[derive(Default)]
struct StaticInner {
    user: Option<IdentityUser>,
    token: Option<String>,
    next_id: usize,
    unavailable: bool,
    listeners: Vec<(usize, Rc<dyn Fn(Option<IdentityUser>)>)>,
}

/// In-memory provider used on host builds.
#[derive(Clone, Default)]
pub struct StaticIdentity {
    inner: Rc<RefCell<StaticInner>>,
}

impl StaticIdentity {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: IdentityUser, token: impl Into<String>) -> Self {
        let identity = Self::default();
        {
            let mut inner = identity.inner.borrow_mut();
            inner.user = Some(user);
            inner.token = Some(token.into());
        }
        identity
    }

    /// A provider whose SDK failed to load: always signed out.
    pub fn unavailable() -> Self {
        let identity = Self::default();
        identity.inner.borrow_mut().unavailable = true;
        identity
    }

    pub fn set_user(&self, user: Option<IdentityUser>, token: Option<String>) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.user = user.clone();
            inner.token = token;
            inner
                .listeners
                .iter()
                .map(|(_, l)| l.clone())
                .collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(user.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for StaticIdentity {
    fn is_available(&self) -> bool {
        !self.inner.borrow().unavailable
    }

    fn current_user(&self) -> Option<IdentityUser> {
        self.inner.borrow().user.clone()
    }

    async fn id_token(&self) -> Result<String, IdentityError> {
        let inner = self.inner.borrow();
        if inner.user.is_none() {
            return Err(IdentityError::NoUser);
        }
        inner.token.clone().ok_or(IdentityError::NoUser)
    }

    fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription {
        let listener: Rc<dyn Fn(Option<IdentityUser>)> = Rc::from(listener);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.user.clone())
        };
        listener(current);
        let inner = self.inner.clone();
        Subscription::new(move || {
            inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
        })
    }

    async fn sign_in_with_google(&self) -> Result<IdentityUser, IdentityError> {
        if !self.is_available() {
            return Err(IdentityError::NotConfigured);
        }
        self.current_user().ok_or(IdentityError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        self.set_user(None, None);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = kencanIdentity, js_name = init)]
        fn js_init(config_json: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = kencanIdentity, js_name = currentUser)]
        fn js_current_user() -> JsValue;

        #[wasm_bindgen(catch, js_namespace = kencanIdentity, js_name = getIdToken)]
        fn js_get_id_token() -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(js_namespace = kencanIdentity, js_name = onAuthStateChanged)]
        fn js_on_auth_state_changed(cb: &Closure<dyn FnMut(JsValue)>) -> js_sys::Function;

        #[wasm_bindgen(catch, js_namespace = kencanIdentity, js_name = signInWithGoogle)]
        fn js_sign_in_with_google() -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = kencanIdentity, js_name = signOut)]
        fn js_sign_out() -> Result<js_sys::Promise, JsValue>;
    }

    fn string_field(value: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(value, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    }

    fn user_from_js(value: &JsValue) -> Option<IdentityUser> {
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(IdentityUser {
            uid: string_field(value, "uid")?,
            email: string_field(value, "email"),
            display_name: string_field(value, "displayName"),
        })
    }

    fn provider_error(err: JsValue) -> IdentityError {
        let message = string_field(&err, "message")
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "identity provider error".to_string());
        IdentityError::Provider(message)
    }

    fn shim() -> Option<JsValue> {
        web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &"kencanIdentity".into()).ok())
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    /// True once `configure` has initialised the SDK behind the shim.
    fn shim_present() -> bool {
        shim()
            .and_then(|shim| js_sys::Reflect::get(&shim, &"ready".into()).ok())
            .and_then(|ready| ready.as_bool())
            .unwrap_or(false)
    }

    pub fn configure(config: Option<&FirebaseWebConfig>) -> Result<(), IdentityError> {
        let config = config.ok_or(IdentityError::NotConfigured)?;
        if shim().is_none() {
            return Err(IdentityError::Unavailable);
        }
        let json = serde_json::to_string(config)
            .map_err(|err| IdentityError::Provider(err.to_string()))?;
        js_init(&json).map_err(provider_error)?;
        Ok(())
    }

    #[derive(Clone, Copy, Default)]
    pub struct BrowserIdentity;

    #[async_trait(?Send)]
    impl IdentityProvider for BrowserIdentity {
        fn is_available(&self) -> bool {
            shim_present()
        }

        fn current_user(&self) -> Option<IdentityUser> {
            if !shim_present() {
                return None;
            }
            user_from_js(&js_current_user())
        }

        async fn id_token(&self) -> Result<String, IdentityError> {
            if !shim_present() {
                return Err(IdentityError::Unavailable);
            }
            let promise = js_get_id_token().map_err(provider_error)?;
            let value = JsFuture::from(promise).await.map_err(provider_error)?;
            value.as_string().ok_or(IdentityError::NoUser)
        }

        fn on_auth_state_changed(&self, listener: AuthStateListener) -> Subscription {
            if !shim_present() {
                log::error!("identity provider unavailable; treating visitor as signed out");
                listener(None);
                return Subscription::new(|| {});
            }
            let closure = Closure::wrap(Box::new(move |value: JsValue| {
                listener(user_from_js(&value));
            }) as Box<dyn FnMut(JsValue)>);
            let unsubscribe = js_on_auth_state_changed(&closure);
            Subscription::new(move || {
                let _ = unsubscribe.call0(&JsValue::NULL);
                drop(closure);
            })
        }

        async fn sign_in_with_google(&self) -> Result<IdentityUser, IdentityError> {
            if !shim_present() {
                return Err(IdentityError::NotConfigured);
            }
            let promise = js_sign_in_with_google().map_err(provider_error)?;
            let value = JsFuture::from(promise).await.map_err(provider_error)?;
            user_from_js(&value).ok_or(IdentityError::NoUser)
        }

        async fn sign_out(&self) -> Result<(), IdentityError> {
            if !shim_present() {
                return Ok(());
            }
            let promise = js_sign_out().map_err(provider_error)?;
            JsFuture::from(promise).await.map_err(provider_error)?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{configure, BrowserIdentity};

/// Host builds have no SDK to initialise.
#[cfg(not(target_arch = "wasm32"))]
pub fn configure(config: Option<&FirebaseWebConfig>) -> Result<(), IdentityError> {
    config.map(|_| ()).ok_or(IdentityError::NotConfigured)
}

pub fn default_identity() -> SharedIdentity {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserIdentity)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(StaticIdentity::signed_out())
    }
}
