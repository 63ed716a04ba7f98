use crate::components::{
    empty_state::EmptyState,
    icons::{ChartIcon, FolderIcon},
    layout::{Layout, PageHeader},
};
use leptos::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Projects" />
            <EmptyState
                title="Projects are coming soon"
                description="Project tracking is not available yet."
                icon=view! { <FolderIcon/> }.into_view()
            />
        </Layout>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <Layout>
            <PageHeader title="Reports" />
            <EmptyState
                title="Reports are coming soon"
                description="Attendance and leave reports are not available yet."
                icon=view! { <ChartIcon/> }.into_view()
            />
        </Layout>
    }
}
