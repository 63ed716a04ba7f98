use crate::{
    actions::{self, RegisterFields},
    api::{ApiClient, UserResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    pages::login::view_model::AFTER_LOGIN_PATH,
    state::auth::{apply_session, use_auth},
    utils::navigation::redirect,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub username: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn fields(&self) -> RegisterFields {
        RegisterFields {
            username: self.username.get_untracked(),
            full_name: self.full_name.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    fn clear_passwords(&self) {
        self.password.set(String::new());
        self.confirm_password.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub register_action: FormActionController<RegisterFields, UserResponse>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::default();
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    let register_action = use_form_action(
        move |_previous, fields: RegisterFields| actions::register(api.clone(), fields),
        ActionResult::Idle,
    )
    .on_success(move |result| {
        if let ActionResult::Ok(user) = result {
            apply_session(set_auth, user);
            form.clear_passwords();
            redirect(AFTER_LOGIN_PATH);
        }
    })
    .on_error(move |_| form.clear_passwords());

    RegisterViewModel {
        form,
        register_action,
    }
}
