use crate::{
    api::{UserResponse, UserRole},
    pages::admin_users::utils::{can_delete, joined_label, UserFormState},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full border rounded px-2 py-1";

#[component]
pub fn CreateUserForm(
    state: UserFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <h3 class="text-lg font-medium text-fg">"Add user"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <label class="block text-sm text-fg">
                    "Username"
                    <input
                        name="username"
                        class=INPUT_CLASS
                        prop:value=move || state.username.get()
                        on:input=move |ev| state.username.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Full name"
                    <input
                        name="full_name"
                        class=INPUT_CLASS
                        prop:value=move || state.full_name.get()
                        on:input=move |ev| state.full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Initial password"
                    <input
                        name="password"
                        type="password"
                        class=INPUT_CLASS
                        prop:value=move || state.password.get()
                        on:input=move |ev| state.password.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "Role"
                    <select
                        name="role"
                        class=INPUT_CLASS
                        prop:value=move || state.role.get()
                        on:change=move |ev| state.role.set(event_target_value(&ev))
                    >
                        {[UserRole::Employee, UserRole::Admin]
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <button
                type="submit"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Creating..." } else { "Create user" }}
            </button>
        </form>
    }
}

#[component]
pub fn UserList(
    #[prop(into)] users: Signal<Vec<UserResponse>>,
    #[prop(into)] current_user: Signal<Option<UserResponse>>,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead>
                <tr class="text-left text-fg-muted">
                    <th class="py-2">"Username"</th>
                    <th class="py-2">"Name"</th>
                    <th class="py-2">"Role"</th>
                    <th class="py-2">"Joined"</th>
                    <th class="py-2"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                <For
                    each=move || users.get()
                    key=|user| user.id.clone()
                    children=move |user| {
                        let deletable = {
                            let user = user.clone();
                            move || current_user.with(|current| can_delete(current.as_ref(), &user))
                        };
                        let id = user.id.clone();
                        view! {
                            <tr>
                                <td class="py-2 font-mono">{user.username.clone()}</td>
                                <td class="py-2">{user.full_name.clone()}</td>
                                <td class="py-2">{user.role.label()}</td>
                                <td class="py-2">{joined_label(&user)}</td>
                                <td class="py-2 text-right">
                                    <Show when=deletable.clone()>
                                        <button
                                            class="text-status-error-text underline disabled:opacity-50"
                                            disabled=move || deleting.get()
                                            on:click={
                                                let id = id.clone();
                                                move |_| on_delete.call(id.clone())
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </Show>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
