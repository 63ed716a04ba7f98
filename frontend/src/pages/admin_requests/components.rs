use crate::{
    api::LeaveRequestResponse,
    pages::requests::{components::StatusBadge, utils::format_period},
};
use leptos::*;

#[component]
pub fn PendingDecisionList(
    #[prop(into)] requests: Signal<Vec<LeaveRequestResponse>>,
    #[prop(into)] busy: Signal<bool>,
    on_decide: Callback<(String, bool)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || requests.with(|list| !list.is_empty())
            fallback=|| view! { <p class="text-sm text-fg-muted py-4">"Nothing to review."</p> }
        >
            <ul class="divide-y divide-border">
                <For
                    each=move || requests.get()
                    key=|request| (request.id.clone(), request.status)
                    children=move |request| {
                        let requester = request
                            .user_name
                            .clone()
                            .unwrap_or_else(|| request.user_id.clone());
                        let undecided = !request.status.is_final();
                        let approve_id = request.id.clone();
                        let reject_id = request.id.clone();
                        view! {
                            <li class="py-3 flex items-center justify-between gap-4">
                                <div>
                                    <p class="text-sm font-medium text-fg">{requester}</p>
                                    <p class="text-xs text-fg-muted">
                                        {request.leave_type.label()}
                                        " · "
                                        {format_period(&request)}
                                    </p>
                                    {request.reason.clone().map(|reason| view! {
                                        <p class="text-xs text-fg-muted">{reason}</p>
                                    })}
                                </div>
                                <div class="flex items-center gap-2">
                                    <StatusBadge status=request.status />
                                    <Show when=move || undecided>
                                        <button
                                            class="px-3 py-1 rounded bg-action-primary-bg text-action-primary-text text-sm disabled:opacity-50"
                                            disabled=move || busy.get()
                                            on:click={
                                                let id = approve_id.clone();
                                                move |_| on_decide.call((id.clone(), true))
                                            }
                                        >
                                            "Approve"
                                        </button>
                                        <button
                                            class="px-3 py-1 rounded border border-border text-sm disabled:opacity-50"
                                            disabled=move || busy.get()
                                            on:click={
                                                let id = reject_id.clone();
                                                move |_| on_decide.call((id.clone(), false))
                                            }
                                        >
                                            "Reject"
                                        </button>
                                    </Show>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
