use crate::{
    components::{
        layout::{Layout, LoadingSpinner, PageHeader},
        messages::{ErrorMessage, SuccessMessage},
        nav_pills::NavPills,
    },
    pages::{
        admin_requests::{
            components::PendingDecisionList, view_model::use_admin_requests_view_model,
        },
        requests::utils::{status_pills, LeaveStatusFilter},
    },
};
use leptos::*;

#[component]
pub fn AdminRequestsPage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Leave approvals" subtitle="Review leave requests from your team." />
            <AdminRequestsPanel />
        </Layout>
    }
}

#[component]
pub fn AdminRequestsPanel() -> impl IntoView {
    let vm = use_admin_requests_view_model();
    let resource = vm.requests_resource;
    let filter = vm.filter;
    let comment = vm.comment;

    let requests = Signal::derive(move || resource.get().and_then(Result::ok));
    let load_error = Signal::derive(move || resource.get().and_then(Result::err).map(|e| e.error));
    let on_select = Callback::new(move |key: &'static str| {
        filter.set(LeaveStatusFilter::parse(key).unwrap_or_default());
    });
    let on_decide = Callback::new(move |(id, approve): (String, bool)| vm.decide(id, approve));

    view! {
        <div class="space-y-6">
            <SuccessMessage message=vm.message />
            <ErrorMessage message=vm.error />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <NavPills
                    pills=status_pills(None)
                    active=Signal::derive(move || filter.get().as_str())
                    on_select=on_select
                />
                <label class="block text-sm text-fg">
                    "Decision comment (optional)"
                    <input
                        name="comment"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    />
                </label>
                <ErrorMessage message=load_error />
                <Show when=move || requests.with(Option::is_some) fallback=|| view! { <LoadingSpinner /> }>
                    <PendingDecisionList
                        requests=Signal::derive(move || requests.get().unwrap_or_default())
                        busy=vm.any_pending()
                        on_decide=on_decide
                    />
                </Show>
            </section>
        </div>
    }
}
