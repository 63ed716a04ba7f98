use crate::{
    components::{
        layout::{Layout, LoadingSpinner, PageHeader},
        messages::{ErrorMessage, SuccessMessage},
    },
    pages::attendance::{
        components::{ClockCard, HistoryTable},
        utils::{attendance_rows, clock_state, record_for_day},
        view_model::use_attendance_view_model,
    },
    utils::time::today,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Attendance" subtitle="Clock in when you start and out when you finish." />
            <AttendancePanel />
        </Layout>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let history = vm.history_resource;

    let records = Signal::derive(move || history.get().and_then(Result::ok));
    let load_error = Signal::derive(move || history.get().and_then(Result::err).map(|e| e.error));
    let state = Signal::derive(move || {
        records.with(|records| {
            clock_state(
                records
                    .as_deref()
                    .and_then(|records| record_for_day(records, today())),
            )
        })
    });
    let rows = Signal::derive(move || {
        records.with(|records| records.as_deref().map(attendance_rows).unwrap_or_default())
    });

    let clock_in = vm.clock_in_action;
    let clock_out = vm.clock_out_action;

    view! {
        <div class="space-y-6">
            <SuccessMessage message=vm.message />
            <ErrorMessage message=vm.error />
            <ClockCard
                state=state
                pending=vm.any_pending()
                on_clock_in=Callback::new(move |_| clock_in.dispatch(()))
                on_clock_out=Callback::new(move |_| clock_out.dispatch(()))
            />
            <section class="bg-surface-elevated shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-fg mb-4">"History"</h3>
                <ErrorMessage message=load_error />
                <Show when=move || records.with(Option::is_some) fallback=|| view! { <LoadingSpinner /> }>
                    <HistoryTable rows=rows />
                </Show>
            </section>
        </div>
    }
}
