use crate::{
    api::{ApiClient, ApiError, UserResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Signed-in identity as reported by the backend session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        match check_auth_status(&api_client).await {
            Ok(user) => apply_session(set_auth_state, user),
            Err(err) => {
                if !err.is_unauthorized() {
                    log::warn!("session check failed: {}", err);
                }
                clear_session(set_auth_state);
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

async fn check_auth_status(api_client: &ApiClient) -> Result<UserResponse, ApiError> {
    api_client.get_me().await
}

pub fn apply_session(set_auth_state: WriteSignal<AuthState>, user: UserResponse) {
    log::debug!("session established for {}", user.username);
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
        state.loading = false;
    });
}

pub fn clear_session(set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

/// Ends the backend session; local state is cleared whatever the backend says.
pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> ActionResult<()> {
    let result = api_client.logout().await;
    if let Err(err) = &result {
        log::warn!("logout request failed: {}", err);
    }
    clear_session(set_auth_state);
    result.into()
}

pub fn use_logout_action() -> FormActionController<(), ()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    use_form_action(
        move |_previous, ()| {
            let api = api.clone();
            async move { logout(&api, set_auth).await }
        },
        ActionResult::Idle,
    )
}
