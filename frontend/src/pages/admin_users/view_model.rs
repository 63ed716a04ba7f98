use crate::{
    actions::{self, NewUserFields},
    api::{ApiClient, ApiError, UserResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    pages::admin_users::utils::UserFormState,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub form: UserFormState,
    pub message: RwSignal<Option<String>>,
    /// Failure of the most recent create or delete.
    pub error: RwSignal<Option<String>>,
    pub users_resource: Resource<u32, Result<Vec<UserResponse>, ApiError>>,
    pub create_action: FormActionController<NewUserFields, UserResponse>,
    pub delete_action: FormActionController<String, String>,
}

fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

fn show_failure<T>(
    message: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) -> impl Fn(ActionResult<T>) {
    move |result| {
        message.set(None);
        error.set(result.error().map(str::to_string));
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let form = UserFormState::default();
    let message = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let list_api = api.clone();
    let users_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.list_users().await }
        },
    );

    let create_api = api.clone();
    let create_action = use_form_action(
        move |_previous, fields: NewUserFields| actions::create_user(create_api.clone(), fields),
        ActionResult::Idle,
    )
    .on_success(move |result| {
        if let Some(user) = result.value() {
            message.set(Some(format!("Created {} ({}).", user.username, user.role.label())));
        }
        error.set(None);
        form.reset();
        bump(reload);
    })
    .on_error(show_failure(message, error));

    let delete_action = use_form_action(
        move |_previous, id: String| actions::delete_user(api.clone(), id),
        ActionResult::Idle,
    )
    .on_success(move |_| {
        message.set(Some("User deleted.".to_string()));
        error.set(None);
        bump(reload);
    })
    .on_error(show_failure(message, error));

    AdminUsersViewModel {
        form,
        message,
        error,
        users_resource,
        create_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn creating_a_user_resets_the_form() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/admin/users")
                .json_body(json!({
                    "username": "dave",
                    "password": "secret-pass",
                    "full_name": "Dave Example",
                    "role": "admin"
                }));
            then.status(201).json_body(json!({
                "id": "u9",
                "username": "dave",
                "full_name": "Dave Example",
                "role": "admin"
            }));
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_users_view_model();
            vm.form.username.set("dave".into());
            vm.form.full_name.set("Dave Example".into());
            vm.form.password.set("secret-pass".into());
            vm.form.role.set("admin".into());

            vm.create_action.submit(vm.form.fields()).await;

            assert_eq!(
                vm.message.get_untracked().as_deref(),
                Some("Created dave (Administrator).")
            );
            assert!(vm.form.username.get_untracked().is_empty());
            assert_eq!(vm.form.role.get_untracked(), "employee");
            assert!(vm.error.get_untracked().is_none());
        })
        .await;
        create.assert();
    }

    #[tokio::test]
    async fn short_password_is_reported_without_request() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/admin/users");
            then.status(201);
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_users_view_model();
            vm.form.username.set("erin".into());
            vm.form.full_name.set("Erin Example".into());
            vm.form.password.set("short".into());

            vm.create_action.submit(vm.form.fields()).await;

            assert!(vm
                .error
                .get_untracked()
                .is_some_and(|message| message.contains("at least 8")));
            assert_eq!(vm.form.username.get_untracked(), "erin");
        })
        .await;
        create.assert_hits(0);
    }

    #[tokio::test]
    async fn successful_delete_clears_create_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/admin/users");
            then.status(409)
                .json_body(json!({ "error": "Username already taken", "code": "CONFLICT" }));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/admin/users/u2");
            then.status(204);
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_users_view_model();
            vm.form.username.set("dave".into());
            vm.form.full_name.set("Dave Example".into());
            vm.form.password.set("secret-pass".into());

            vm.create_action.submit(vm.form.fields()).await;
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Username already taken")
            );

            vm.delete_action.submit("u2".into()).await;
            assert_eq!(vm.message.get_untracked().as_deref(), Some("User deleted."));
            assert!(vm.error.get_untracked().is_none());
        })
        .await;
    }
}
