use crate::{
    api::AttendanceResponse,
    utils::time::{duration_label, format_clock_time},
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    NotStarted,
    Working,
    Finished,
}

impl ClockState {
    pub fn label(&self) -> &'static str {
        match self {
            ClockState::NotStarted => "Not clocked in",
            ClockState::Working => "Working",
            ClockState::Finished => "Done for today",
        }
    }

    pub fn can_clock_in(&self) -> bool {
        matches!(self, ClockState::NotStarted)
    }

    pub fn can_clock_out(&self) -> bool {
        matches!(self, ClockState::Working)
    }
}

pub fn record_for_day(records: &[AttendanceResponse], day: NaiveDate) -> Option<&AttendanceResponse> {
    records.iter().find(|record| record.date == day)
}

pub fn clock_state(today: Option<&AttendanceResponse>) -> ClockState {
    match today {
        Some(record) if record.is_clocked_in() => ClockState::Working,
        Some(record) if record.clock_in_time.is_some() => ClockState::Finished,
        _ => ClockState::NotStarted,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    pub id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub duration: String,
}

impl From<&AttendanceResponse> for AttendanceRow {
    fn from(record: &AttendanceResponse) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            clock_in: format_clock_time(record.clock_in_time),
            clock_out: format_clock_time(record.clock_out_time),
            duration: duration_label(record.clock_in_time, record.clock_out_time),
        }
    }
}

/// History rows, most recent day first.
pub fn attendance_rows(records: &[AttendanceResponse]) -> Vec<AttendanceRow> {
    let mut sorted: Vec<&AttendanceResponse> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().map(AttendanceRow::from).collect()
}
