use leptos::*;

pub use super::helpers::with_runtime;

/// Runs `f` inside a tokio `LocalSet` so that `spawn_local` (resources,
/// session checks) has somewhere to go.
pub fn with_local_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, async move { with_runtime(f) })
}

/// Async variant of [`with_local_runtime`] for tests that await real I/O.
pub async fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let runtime = leptos::create_runtime();
            let result = f().await;
            runtime.dispose();
            result
        })
        .await
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
