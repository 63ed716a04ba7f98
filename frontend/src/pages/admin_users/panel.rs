use crate::{
    components::{
        layout::{Layout, LoadingSpinner, PageHeader},
        messages::{ErrorMessage, SuccessMessage},
    },
    pages::admin_users::{
        components::{CreateUserForm, UserList},
        view_model::use_admin_users_view_model,
    },
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Users" subtitle="Create and remove staff accounts." />
            <AdminUsersPanel />
        </Layout>
    }
}

#[component]
pub fn AdminUsersPanel() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let (auth, _) = use_auth();
    let resource = vm.users_resource;
    let create_action = vm.create_action;
    let delete_action = vm.delete_action;
    let form = vm.form;

    let users = Signal::derive(move || resource.get().and_then(Result::ok));
    let load_error = Signal::derive(move || resource.get().and_then(Result::err).map(|e| e.error));
    let current_user = Signal::derive(move || auth.get().user);

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        create_action.dispatch(form.fields());
    });
    let on_delete = Callback::new(move |id: String| delete_action.dispatch(id));

    view! {
        <div class="space-y-6">
            <SuccessMessage message=vm.message />
            <ErrorMessage message=vm.error />
            <CreateUserForm state=form pending=create_action.pending() on_submit=on_submit />
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <ErrorMessage message=load_error />
                <Show when=move || users.with(Option::is_some) fallback=|| view! { <LoadingSpinner /> }>
                    <UserList
                        users=Signal::derive(move || users.get().unwrap_or_default())
                        current_user=current_user
                        deleting=delete_action.pending()
                        on_delete=on_delete
                    />
                </Show>
            </section>
        </div>
    }
}
