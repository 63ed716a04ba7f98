use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Employee,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "employee",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Admin => "Administrator",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "employee" => Some(UserRole::Employee),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserResponse {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub clock_in_time: Option<NaiveDateTime>,
    pub clock_out_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_work_hours: Option<f64>,
}

impl AttendanceResponse {
    pub fn is_clocked_in(&self) -> bool {
        self.clock_in_time.is_some() && self.clock_out_time.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Personal,
    Other,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual leave",
            LeaveType::Sick => "Sick leave",
            LeaveType::Personal => "Personal leave",
            LeaveType::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 4] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub decision_comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequestResponse {
    /// Inclusive number of calendar days covered by the request.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized("expired").is_unauthorized());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_deserializes_without_code() {
        let error: ApiError = serde_json::from_value(json!({ "error": "invalid credentials" }))
            .expect("error payload");
        assert_eq!(error.error, "invalid credentials");
        assert!(error.code.is_empty());
    }

    #[test]
    fn user_role_parses_legacy_casing() {
        assert_eq!(UserRole::parse("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse(" employee "), Some(UserRole::Employee));
        assert_eq!(UserRole::parse("owner"), None);
    }

    #[test]
    fn leave_request_deserializes_and_counts_days() {
        let raw = json!({
            "id": "lr-1",
            "user_id": "u1",
            "user_name": "Alice Example",
            "leave_type": "sick",
            "start_date": "2025-03-03",
            "end_date": "2025-03-05",
            "reason": null,
            "status": "approved",
            "decision_comment": "Get well soon",
            "created_at": "2025-03-01T08:00:00Z"
        });
        let request: LeaveRequestResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(request.leave_type, LeaveType::Sick);
        assert_eq!(request.status, LeaveStatus::Approved);
        assert_eq!(request.day_count(), 3);
    }

    #[test]
    fn leave_status_parse_is_case_insensitive() {
        assert_eq!(LeaveStatus::parse("Pending"), Some(LeaveStatus::Pending));
        assert_eq!(LeaveStatus::parse("cancelled"), Some(LeaveStatus::Cancelled));
        assert_eq!(LeaveStatus::parse("archived"), None);
        assert!(LeaveStatus::Rejected.is_final());
        assert!(!LeaveStatus::Pending.is_final());
    }

    #[test]
    fn create_leave_request_omits_empty_reason() {
        let payload = CreateLeaveRequest {
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
            reason: None,
        };
        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["leave_type"], "annual");
        assert!(value.get("reason").is_none());
    }
}
