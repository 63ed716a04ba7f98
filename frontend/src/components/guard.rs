use crate::{
    api::UserResponse, components::layout::LoadingSpinner, state::auth::use_auth,
    utils::navigation::redirect,
};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        redirect(LOGIN_PATH);
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if let Some(target) = admin_redirect_target(
            state.loading,
            state.is_authenticated,
            is_admin_user(state.user.as_ref()),
        ) {
            redirect(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

pub fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(UserResponse::is_admin).unwrap_or(false)
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

fn admin_redirect_target(
    is_loading: bool,
    is_authenticated: bool,
    is_admin: bool,
) -> Option<&'static str> {
    if is_loading {
        None
    } else if !is_authenticated {
        Some(LOGIN_PATH)
    } else if !is_admin {
        Some(DASHBOARD_PATH)
    } else {
        None
    }
}
