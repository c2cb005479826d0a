pub mod api;
pub mod components;
pub mod config;
pub mod identity;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Browser entry point: installs the panic hook and console logger, resolves
/// runtime config, then mounts the router.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::set_max_level(log::LevelFilter::Info);
    log::info!("starting KencanKuy frontend");

    leptos::spawn_local(async move {
        let config = config::init().await;
        log::set_max_level(config.log_level.to_level_filter());
        log::debug!("runtime config resolved: api_base_url={}", config.api_base_url);
        if let Err(err) = identity::configure(config.firebase.as_ref()) {
            log::error!("sign-in disabled: {}", err);
        }
        router::mount_app();
    });
}
