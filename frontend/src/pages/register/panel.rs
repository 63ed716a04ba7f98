use crate::{
    actions::MIN_PASSWORD_LENGTH,
    components::messages::{error_text, ErrorMessage},
    pages::register::view_model::use_register_view_model,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md sm:text-sm";

#[component]
fn Field(
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            id=name
            name=name
            type=kind
            class=INPUT_CLASS
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let register_action = vm.register_action;
    let pending = register_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        register_action.dispatch(form.fields());
    };

    view! {
        <Title text="Create account | Staffdesk"/>
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Create your account"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <Field name="username" kind="text" placeholder="Username" value=form.username />
                    <Field name="full_name" kind="text" placeholder="Full name" value=form.full_name />
                    <Field name="password" kind="password" placeholder="Password" value=form.password />
                    <Field
                        name="confirm_password"
                        kind="password"
                        placeholder="Confirm password"
                        value=form.confirm_password
                    />
                    <p class="text-xs text-fg-muted">
                        {format!("At least {} characters.", MIN_PASSWORD_LENGTH)}
                    </p>
                    <ErrorMessage message=error_text(register_action.result()) />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Already registered? "
                    <a href="/login" class="underline">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_panel_renders_all_fields() {
        let html = render_to_string(move || view! { <RegisterPanel /> });
        for name in ["username", "full_name", "password", "confirm_password"] {
            assert!(html.contains(&format!("name=\"{}\"", name)), "missing {}", name);
        }
        assert!(html.contains("At least 8 characters."));
    }
}
