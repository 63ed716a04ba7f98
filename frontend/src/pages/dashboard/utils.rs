use crate::{
    api::{AttendanceResponse, LeaveRequestResponse, LeaveStatus, UserResponse},
    pages::{
        attendance::utils::{clock_state, ClockState},
        requests::utils::count_by_status,
    },
    utils::time::{duration_label, format_clock_time},
};

pub fn greeting(user: Option<&UserResponse>) -> String {
    match user {
        Some(user) if !user.full_name.trim().is_empty() => format!("Hello, {}", user.full_name),
        Some(user) => format!("Hello, {}", user.username),
        None => "Hello".to_string(),
    }
}

pub fn pending_leave_count(requests: &[LeaveRequestResponse]) -> usize {
    count_by_status(requests)
        .get(&LeaveStatus::Pending)
        .copied()
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary {
    pub state: ClockState,
    pub clock_in: String,
    pub clock_out: String,
    pub worked: String,
}

pub fn today_summary(record: Option<&AttendanceResponse>) -> TodaySummary {
    TodaySummary {
        state: clock_state(record),
        clock_in: format_clock_time(record.and_then(|r| r.clock_in_time)),
        clock_out: format_clock_time(record.and_then(|r| r.clock_out_time)),
        worked: duration_label(
            record.and_then(|r| r.clock_in_time),
            record.and_then(|r| r.clock_out_time),
        ),
    }
}
