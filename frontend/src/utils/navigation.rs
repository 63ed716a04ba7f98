/// Full-page navigation to `path`.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(path) {
        log::warn!("navigation to {} failed: {:?}", path, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}
