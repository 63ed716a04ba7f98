use leptos::*;

mod actions;
pub mod api;
mod components;
pub mod config;
pub mod form_action;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", err).into());
    }
    log::info!("Starting Staffdesk frontend");

    // window.__STAFFDESK_ENV (env.js) takes precedence over ./config.json.
    spawn_local(async move {
        config::init().await;
    });

    #[cfg(target_arch = "wasm32")]
    router::mount_app();
}
