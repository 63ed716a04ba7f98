#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{UserResponse, UserRole};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            username: "admin".into(),
            full_name: "Admin User".into(),
            role: UserRole::Admin,
            created_at: None,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            username: "member".into(),
            full_name: "Regular User".into(),
            role: UserRole::Employee,
            created_at: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
