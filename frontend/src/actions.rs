//! Server actions bound to the application's forms.
//!
//! Each action validates its fields locally, then calls the backend. Every
//! action resolves to an [`ActionResult`]; validation problems never reach the
//! network and come back as `VALIDATION_ERROR` failures.

use crate::{
    api::{
        ApiClient, ApiError, AttendanceResponse, CreateLeaveRequest, CreateUser, DecisionPayload,
        LeaveRequestResponse, LeaveType, LoginRequest, RegisterRequest, UserResponse, UserRole,
    },
    form_action::ActionResult,
};
use chrono::NaiveDate;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFields {
    pub username: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUserFields {
    pub username: String,
    pub full_name: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveFields {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionFields {
    pub id: String,
    pub comment: String,
}

fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(format!("{} is required", label)))
    } else {
        Ok(trimmed.to_string())
    }
}

fn check_password(password: &str) -> Result<(), ApiError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, ApiError> {
    let raw = required(raw, label)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ApiError::validation(format!("{} must be a date (YYYY-MM-DD)", label)))
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn validate_login(fields: &LoginFields) -> Result<LoginRequest, ApiError> {
    let username = required(&fields.username, "Username")?;
    if fields.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(LoginRequest {
        username,
        password: fields.password.clone(),
    })
}

pub fn validate_registration(fields: &RegisterFields) -> Result<RegisterRequest, ApiError> {
    let username = required(&fields.username, "Username")?;
    let full_name = required(&fields.full_name, "Full name")?;
    check_password(&fields.password)?;
    if fields.password != fields.confirm_password {
        return Err(ApiError::validation("Passwords do not match"));
    }
    Ok(RegisterRequest {
        username,
        password: fields.password.clone(),
        full_name,
    })
}

pub fn validate_new_user(fields: &NewUserFields) -> Result<CreateUser, ApiError> {
    let username = required(&fields.username, "Username")?;
    let full_name = required(&fields.full_name, "Full name")?;
    check_password(&fields.password)?;
    let role = if fields.role.trim().is_empty() {
        UserRole::Employee
    } else {
        UserRole::parse(&fields.role)
            .ok_or_else(|| ApiError::validation(format!("Unknown role: {}", fields.role)))?
    };
    Ok(CreateUser {
        username,
        password: fields.password.clone(),
        full_name,
        role,
    })
}

pub fn validate_leave(fields: &LeaveFields) -> Result<CreateLeaveRequest, ApiError> {
    let leave_type = LeaveType::parse(&fields.leave_type)
        .ok_or_else(|| ApiError::validation("Choose a leave type"))?;
    let start_date = parse_date(&fields.start_date, "Start date")?;
    let end_date = parse_date(&fields.end_date, "End date")?;
    if end_date < start_date {
        return Err(ApiError::validation("End date must not be before start date"));
    }
    Ok(CreateLeaveRequest {
        leave_type,
        start_date,
        end_date,
        reason: optional_text(&fields.reason),
    })
}

fn validate_decision(fields: &DecisionFields) -> Result<(String, DecisionPayload), ApiError> {
    let id = required(&fields.id, "Request id")?;
    Ok((
        id,
        DecisionPayload {
            comment: optional_text(&fields.comment),
        },
    ))
}

pub async fn login(api: ApiClient, fields: LoginFields) -> ActionResult<UserResponse> {
    let request = match validate_login(&fields) {
        Ok(request) => request,
        Err(err) => return ActionResult::failed(err),
    };
    api.login(&request)
        .await
        .map(|session| session.user)
        .into()
}

pub async fn register(api: ApiClient, fields: RegisterFields) -> ActionResult<UserResponse> {
    let request = match validate_registration(&fields) {
        Ok(request) => request,
        Err(err) => return ActionResult::failed(err),
    };
    api.register(&request)
        .await
        .map(|session| session.user)
        .into()
}

pub async fn create_user(api: ApiClient, fields: NewUserFields) -> ActionResult<UserResponse> {
    match validate_new_user(&fields) {
        Ok(payload) => api.create_user(&payload).await.into(),
        Err(err) => ActionResult::failed(err),
    }
}

/// Resolves to the id of the deleted user.
pub async fn delete_user(api: ApiClient, id: String) -> ActionResult<String> {
    let id = match required(&id, "User id") {
        Ok(id) => id,
        Err(err) => return ActionResult::failed(err),
    };
    api.delete_user(&id).await.map(|_| id).into()
}

pub async fn clock_in(api: ApiClient) -> ActionResult<AttendanceResponse> {
    api.clock_in().await.into()
}

pub async fn clock_out(api: ApiClient) -> ActionResult<AttendanceResponse> {
    api.clock_out().await.into()
}

pub async fn submit_leave_request(
    api: ApiClient,
    fields: LeaveFields,
) -> ActionResult<LeaveRequestResponse> {
    match validate_leave(&fields) {
        Ok(payload) => api.create_leave_request(&payload).await.into(),
        Err(err) => ActionResult::failed(err),
    }
}

pub async fn approve_leave(
    api: ApiClient,
    fields: DecisionFields,
) -> ActionResult<LeaveRequestResponse> {
    match validate_decision(&fields) {
        Ok((id, payload)) => api.admin_approve_leave_request(&id, &payload).await.into(),
        Err(err) => ActionResult::failed(err),
    }
}

pub async fn reject_leave(
    api: ApiClient,
    fields: DecisionFields,
) -> ActionResult<LeaveRequestResponse> {
    match validate_decision(&fields) {
        Ok((id, payload)) => api.admin_reject_leave_request(&id, &payload).await.into(),
        Err(err) => ActionResult::failed(err),
    }
}
