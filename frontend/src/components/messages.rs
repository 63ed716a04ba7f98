use crate::form_action::ActionResult;
use leptos::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: MaybeSignal<Option<String>>) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div
                role="alert"
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4"
            >
                <p class="text-sm">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: MaybeSignal<Option<String>>) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
                <p class="text-sm">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

/// Error text of a form result, for binding to [`ErrorMessage`].
pub fn error_text<T: Clone + 'static>(result: Signal<ActionResult<T>>) -> Signal<Option<String>> {
    Signal::derive(move || result.with(|result| result.error().map(str::to_string)))
}
