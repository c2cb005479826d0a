use leptos::use_context;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};
use std::rc::Rc;

/// Full-page navigation.
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    log::debug!("navigate to {}", path);
}

/// `window.location.origin`, when running in a browser.
#[cfg(target_arch = "wasm32")]
pub fn current_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_origin() -> Option<String> {
    None
}

/// Client-side navigation when a router is mounted, full-page otherwise.
pub fn use_app_navigate() -> Rc<dyn Fn(&str)> {
    if use_context::<RouterContext>().is_some() {
        let navigate = use_navigate();
        Rc::new(move |path: &str| navigate(path, NavigateOptions::default()))
    } else {
        Rc::new(navigate_to)
    }
}
