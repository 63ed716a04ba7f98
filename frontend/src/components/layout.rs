use crate::{
    components::{guard::is_admin_user, icons::*},
    state::auth::{self, use_auth},
    utils::navigation::redirect,
};
use leptos::*;
use leptos_meta::Title;

pub const APP_NAME: &str = "Staffdesk";

const LINK_CLASS: &str = "flex items-center gap-3 text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let can_access_admin = move || is_admin_user(auth.get().user.as_ref());
    let display_name = move || {
        auth.get()
            .user
            .map(|user| user.full_name)
            .unwrap_or_default()
    };

    let logout = auth::use_logout_action()
        .on_success(|_| redirect("/login"))
        .on_error(|_| redirect("/login"));
    let logout_pending = logout.pending();
    let on_logout = move |_| logout.dispatch(());

    view! {
        <aside class="w-56 shrink-0 bg-surface-elevated border-r border-border min-h-screen flex flex-col">
            <div class="px-4 py-5">
                <h1 class="text-xl font-semibold text-fg">{APP_NAME}</h1>
                <p class="text-xs text-fg-muted mt-1">{display_name}</p>
            </div>
            <nav class="flex-1 px-2 space-y-1">
                <a href="/dashboard" class=LINK_CLASS><HomeIcon/>"Dashboard"</a>
                <a href="/attendance" class=LINK_CLASS><ClockIcon/>"Attendance"</a>
                <a href="/requests" class=LINK_CLASS><CalendarIcon/>"Leave requests"</a>
                <a href="/projects" class=LINK_CLASS><FolderIcon/>"Projects"</a>
                <a href="/reports" class=LINK_CLASS><ChartIcon/>"Reports"</a>
                <Show when=can_access_admin>
                    <p class="px-3 pt-4 text-xs uppercase tracking-wide text-fg-muted">"Admin"</p>
                    <a href="/admin/users" class=LINK_CLASS><UsersIcon/>"Users"</a>
                    <a href="/admin/requests" class=LINK_CLASS><CheckIcon/>"Leave approvals"</a>
                </Show>
            </nav>
            <div class="px-2 py-4 border-t border-border">
                <button
                    class=format!("w-full disabled:opacity-50 {}", LINK_CLASS)
                    on:click=on_logout
                    disabled=move || logout_pending.get()
                >
                    <LogoutIcon/>
                    {move || if logout_pending.get() { "Signing out..." } else { "Sign out" }}
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex">
            <Sidebar/>
            <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let document_title = format!("{} | {}", title, APP_NAME);
    view! {
        <Title text=document_title/>
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            {subtitle.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" aria-busy="true">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_shows_admin_links_to_admins() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Sidebar /> }
        });
        assert!(html.contains("Leave approvals"));
        assert!(html.contains("/admin/users"));
        assert!(html.contains("Admin User"));
    }

    #[test]
    fn sidebar_hides_admin_links_from_employees() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Sidebar /> }
        });
        assert!(html.contains("Attendance"));
        assert!(!html.contains("/admin/users"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn page_header_renders_subtitle() {
        let html = render_to_string(move || {
            view! { <PageHeader title="Attendance" subtitle="Clock in and out" /> }
        });
        assert!(html.contains("Attendance"));
        assert!(html.contains("Clock in and out"));
    }
}
