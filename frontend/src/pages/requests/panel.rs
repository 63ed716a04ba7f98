use crate::{
    components::{
        layout::{Layout, LoadingSpinner, PageHeader},
        messages::{error_text, ErrorMessage, SuccessMessage},
        nav_pills::NavPills,
    },
    pages::requests::{
        components::{LeaveRequestForm, MyLeaveRequestList},
        utils::{filter_by_status, status_pills, LeaveStatusFilter},
        view_model::{use_requests_view_model, RequestsViewModel},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Leave requests" subtitle="Request time off and follow its approval." />
            <RequestsPanel />
        </Layout>
    }
}

#[component]
pub fn RequestsPanel() -> impl IntoView {
    let vm: RequestsViewModel = use_requests_view_model();
    let resource = vm.requests_resource;
    let filter = vm.filter;

    let loaded = Signal::derive(move || resource.get().and_then(Result::ok));
    let load_error = Signal::derive(move || {
        resource
            .get()
            .and_then(Result::err)
            .map(|err| err.error)
    });
    let pills = Signal::derive(move || loaded.with(|list| status_pills(list.as_deref())));
    let visible = Signal::derive(move || {
        loaded.with(|list| {
            list.as_deref()
                .map(|list| filter_by_status(list, filter.get()))
                .unwrap_or_default()
        })
    });
    let on_select = Callback::new(move |key: &'static str| {
        filter.set(LeaveStatusFilter::parse(key).unwrap_or_default());
    });
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <div class="space-y-6">
            <SuccessMessage message=vm.success />
            <LeaveRequestForm
                state=vm.form
                pending=vm.submit_action.pending()
                error=error_text(vm.submit_action.result())
                on_submit=on_submit
            />
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">"My requests"</h3>
                <NavPills
                    pills=pills
                    active=Signal::derive(move || filter.get().as_str())
                    on_select=on_select
                />
                <ErrorMessage message=load_error />
                <Show when=move || loaded.with(Option::is_some) fallback=|| view! { <LoadingSpinner /> }>
                    <MyLeaveRequestList requests=visible />
                </Show>
            </section>
        </div>
    }
}
