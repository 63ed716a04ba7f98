use crate::pages::attendance::utils::{AttendanceRow, ClockState};
use leptos::*;

#[component]
pub fn ClockCard(
    #[prop(into)] state: Signal<ClockState>,
    #[prop(into)] pending: Signal<bool>,
    on_clock_in: Callback<()>,
    on_clock_out: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 flex items-center justify-between">
            <div>
                <p class="text-sm text-fg-muted">"Today"</p>
                <p class="text-lg font-semibold text-fg">{move || state.get().label()}</p>
            </div>
            <div class="flex gap-3">
                <button
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get() || !state.get().can_clock_in()
                    on:click=move |_| on_clock_in.call(())
                >
                    "Clock in"
                </button>
                <button
                    class="px-4 py-2 rounded border border-border text-fg disabled:opacity-50"
                    disabled=move || pending.get() || !state.get().can_clock_out()
                    on:click=move |_| on_clock_out.call(())
                >
                    "Clock out"
                </button>
            </div>
        </section>
    }
}

#[component]
pub fn HistoryTable(#[prop(into)] rows: Signal<Vec<AttendanceRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <p class="text-sm text-fg-muted py-4">"No attendance recorded yet."</p> }
        >
            <table class="min-w-full divide-y divide-border text-sm">
                <thead>
                    <tr class="text-left text-fg-muted">
                        <th class="py-2">"Date"</th>
                        <th class="py-2">"In"</th>
                        <th class="py-2">"Out"</th>
                        <th class="py-2">"Worked"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || rows.get()
                        key=|row| row.id.clone()
                        children=move |row| view! {
                            <tr>
                                <td class="py-2">{row.date}</td>
                                <td class="py-2">{row.clock_in}</td>
                                <td class="py-2">{row.clock_out}</td>
                                <td class="py-2">{row.duration}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
