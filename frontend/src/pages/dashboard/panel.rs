use crate::{
    components::{
        layout::{Layout, PageHeader},
        messages::ErrorMessage,
    },
    pages::{
        attendance::utils::record_for_day,
        dashboard::{
            utils::{greeting, pending_leave_count, today_summary},
            view_model::use_dashboard_view_model,
        },
    },
    state::auth::use_auth,
    utils::time::today,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let title = auth.with_untracked(|state| greeting(state.user.as_ref()));
    view! {
        <Layout>
            <PageHeader title=title subtitle="Here is your day at a glance." />
            <DashboardPanel />
        </Layout>
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-5">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let attendance = vm.attendance_resource;
    let leave = vm.leave_resource;

    let summary = Signal::derive(move || {
        let records = attendance.get().and_then(Result::ok).unwrap_or_default();
        today_summary(record_for_day(&records, today()))
    });
    let pending_leave = Signal::derive(move || match leave.get() {
        Some(Ok(requests)) => pending_leave_count(&requests).to_string(),
        _ => "-".to_string(),
    });
    let load_error = Signal::derive(move || {
        attendance
            .get()
            .and_then(Result::err)
            .or_else(|| leave.get().and_then(Result::err))
            .map(|err| err.error)
    });

    view! {
        <div class="space-y-6">
            <ErrorMessage message=load_error />
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard label="Status" value=Signal::derive(move || summary.get().state.label().to_string()) />
                <StatCard label="Clocked in" value=Signal::derive(move || summary.get().clock_in) />
                <StatCard label="Worked today" value=Signal::derive(move || summary.get().worked) />
                <StatCard label="Pending leave" value=pending_leave />
            </div>
            <div class="flex gap-4 text-sm">
                <a href="/attendance" class="underline text-fg">"Go to attendance"</a>
                <a href="/requests" class="underline text-fg">"Request leave"</a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{provide_auth, regular_user},
        ssr::render_to_string,
    };

    #[test]
    fn dashboard_greets_user_and_shows_cards() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Hello, Regular User"));
        assert!(html.contains("Pending leave"));
        assert!(html.contains("Not clocked in"));
    }
}
