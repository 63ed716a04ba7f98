use crate::{
    actions::{self, LoginFields},
    api::{ApiClient, UserResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    state::auth::{apply_session, use_auth},
    utils::navigation::redirect,
};
use leptos::*;

pub const AFTER_LOGIN_PATH: &str = "/dashboard";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn fields(&self) -> LoginFields {
        LoginFields {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub login_action: FormActionController<LoginFields, UserResponse>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let login_action = use_form_action(
        move |_previous, fields: LoginFields| actions::login(api.clone(), fields),
        ActionResult::Idle,
    )
    .on_success(move |result| {
        if let ActionResult::Ok(user) = result {
            apply_session(set_auth, user);
            form.password.set(String::new());
            redirect(AFTER_LOGIN_PATH);
        }
    })
    .on_error(move |_| form.password.set(String::new()));

    LoginViewModel { form, login_action }
}
