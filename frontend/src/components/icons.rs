use leptos::*;

const ICON_CLASS: &str = "h-5 w-5";

#[component]
fn Icon(path: &'static str) -> impl IntoView {
    view! {
        <svg
            class=ICON_CLASS
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path />
        </svg>
    }
}

#[component]
pub fn HomeIcon() -> impl IntoView {
    view! { <Icon path="M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10" /> }
}

#[component]
pub fn ClockIcon() -> impl IntoView {
    view! { <Icon path="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" /> }
}

#[component]
pub fn CalendarIcon() -> impl IntoView {
    view! { <Icon path="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z" /> }
}

#[component]
pub fn FolderIcon() -> impl IntoView {
    view! { <Icon path="M3 7a2 2 0 012-2h4l2 2h8a2 2 0 012 2v8a2 2 0 01-2 2H5a2 2 0 01-2-2V7z" /> }
}

#[component]
pub fn ChartIcon() -> impl IntoView {
    view! { <Icon path="M9 19v-6m4 6V9m4 10V5M5 19h14" /> }
}

#[component]
pub fn UsersIcon() -> impl IntoView {
    view! { <Icon path="M17 20h5v-2a3 3 0 00-5.36-1.86M9 20H4v-2a3 3 0 015.36-1.86M15 7a3 3 0 11-6 0 3 3 0 016 0z" /> }
}

#[component]
pub fn CheckIcon() -> impl IntoView {
    view! { <Icon path="M5 13l4 4L19 7" /> }
}

#[component]
pub fn LogoutIcon() -> impl IntoView {
    view! { <Icon path="M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1" /> }
}
