use crate::{
    components::messages::{error_text, ErrorMessage},
    pages::login::view_model::use_login_view_model,
};
use leptos::{ev::SubmitEvent, *};
use leptos_meta::Title;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-bg sm:text-sm";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let login_action = vm.login_action;
    let pending = login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        login_action.dispatch(form.fields());
    };

    view! {
        <Title text="Sign in | Staffdesk"/>
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Sign in to Staffdesk"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <input
                        id="username"
                        name="username"
                        type="text"
                        autocomplete="username"
                        class=INPUT_CLASS
                        placeholder="Username"
                        prop:value=move || form.username.get()
                        on:input=move |ev| form.username.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        class=INPUT_CLASS
                        placeholder="Password"
                        prop:value=move || form.password.get()
                        on:input=move |ev| form.password.set(event_target_value(&ev))
                    />
                    <ErrorMessage message=error_text(login_action.result()) />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "No account yet? "
                    <a href="/register" class="underline">"Register"</a>
                </p>
            </div>
        </div>
    }
}
