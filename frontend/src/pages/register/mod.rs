use leptos::*;

pub mod panel;
pub mod view_model;

pub use panel::RegisterPanel;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <RegisterPanel /> }
}
