use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        AdminRequestsPage, AdminUsersPage, AttendancePage, DashboardPage, HomePage, LoginPage,
        ProjectsPage, RegisterPage, ReportsPage, RequestsPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/dashboard",
    "/attendance",
    "/requests",
    "/projects",
    "/reports",
    "/admin/users",
    "/admin/requests",
];

/// Routes behind [`RequireAuth`].
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/attendance",
    "/requests",
    "/projects",
    "/reports",
];

/// Routes behind [`RequireAdmin`].
pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/users", "/admin/requests"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/attendance" view=ProtectedAttendance/>
                    <Route path="/requests" view=ProtectedRequests/>
                    <Route path="/projects" view=ProtectedProjects/>
                    <Route path="/reports" view=ProtectedReports/>
                    <Route path="/admin/users" view=ProtectedAdminUsers/>
                    <Route path="/admin/requests" view=ProtectedAdminRequests/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendance() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedRequests() -> impl IntoView {
    view! { <RequireAuth><RequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedProjects() -> impl IntoView {
    view! { <RequireAuth><ProjectsPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn ProtectedAdminUsers() -> impl IntoView {
    view! { <RequireAdmin><AdminUsersPage/></RequireAdmin> }
}

#[component]
fn ProtectedAdminRequests() -> impl IntoView {
    view! { <RequireAdmin><AdminRequestsPage/></RequireAdmin> }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{provide_auth, regular_user},
        ssr::render_to_string,
    };

    #[test]
    fn admin_wrappers_hide_pages_from_employees() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <ProtectedAdminUsers /> }
        });
        assert!(!html.contains("Add user"));
    }

    #[test]
    fn protected_wrappers_render_for_signed_in_users() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <ProtectedProjects /> }
        });
        assert!(html.contains("Projects are coming soon"));
    }
}
