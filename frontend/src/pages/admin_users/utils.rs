use crate::{
    actions::NewUserFields,
    api::{UserResponse, UserRole},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct UserFormState {
    pub username: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<String>,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            role: create_rw_signal(UserRole::Employee.as_str().to_string()),
        }
    }
}

impl UserFormState {
    pub fn fields(&self) -> NewUserFields {
        NewUserFields {
            username: self.username.get_untracked(),
            full_name: self.full_name.get_untracked(),
            password: self.password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.username.set(String::new());
        self.full_name.set(String::new());
        self.password.set(String::new());
        self.role.set(UserRole::Employee.as_str().to_string());
    }
}

/// Admins cannot delete their own account from the list.
pub fn can_delete(current: Option<&UserResponse>, target: &UserResponse) -> bool {
    current.map_or(false, |current| current.id != target.id)
}

pub fn joined_label(user: &UserResponse) -> String {
    user.created_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
