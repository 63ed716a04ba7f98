use crate::{
    api::{LeaveRequestResponse, LeaveStatus, LeaveType},
    components::messages::ErrorMessage,
    pages::requests::utils::{format_period, status_badge_class, LeaveFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", status_badge_class(status))>
            {status.label()}
        </span>
    }
}

#[component]
pub fn LeaveRequestForm(
    state: LeaveFormState,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let leave_type = state.leave_type_signal();
    let start = state.start_signal();
    let end = state.end_signal();
    let reason = state.reason_signal();
    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <h3 class="text-lg font-medium text-fg">"New leave request"</h3>
            <ErrorMessage message=error />
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <label class="block text-sm text-fg">
                    "Type"
                    <select
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        {LeaveType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="block text-sm text-fg">
                    "From"
                    <input
                        type="date"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label class="block text-sm text-fg">
                    "To"
                    <input
                        type="date"
                        class="mt-1 w-full border rounded px-2 py-1"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <label class="block text-sm text-fg">
                "Reason (optional)"
                <textarea
                    class="mt-1 w-full border rounded px-2 py-1"
                    rows="2"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button
                type="submit"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Submitting..." } else { "Submit request" }}
            </button>
        </form>
    }
}

#[component]
pub fn MyLeaveRequestList(#[prop(into)] requests: Signal<Vec<LeaveRequestResponse>>) -> impl IntoView {
    view! {
        <Show
            when=move || requests.with(|list| !list.is_empty())
            fallback=|| view! { <p class="text-sm text-fg-muted py-4">"No leave requests to show."</p> }
        >
            <ul class="divide-y divide-border">
                <For
                    each=move || requests.get()
                    key=|request| (request.id.clone(), request.status)
                    children=move |request| {
                        let days = request.day_count();
                        view! {
                            <li class="py-3 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-fg">
                                        {request.leave_type.label()}
                                        " · "
                                        {format_period(&request)}
                                        {format!(" ({} day{})", days, if days == 1 { "" } else { "s" })}
                                    </p>
                                    {request.reason.clone().map(|reason| view! {
                                        <p class="text-xs text-fg-muted">{reason}</p>
                                    })}
                                    {request.decision_comment.clone().map(|comment| view! {
                                        <p class="text-xs text-fg-muted italic">{comment}</p>
                                    })}
                                </div>
                                <StatusBadge status=request.status />
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
