use crate::{
    actions::LeaveFields,
    api::{LeaveRequestResponse, LeaveStatus, LeaveType},
    components::nav_pills::NavPill,
};
use leptos::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaveStatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl LeaveStatusFilter {
    pub const ALL: [LeaveStatusFilter; 5] = [
        LeaveStatusFilter::All,
        LeaveStatusFilter::Pending,
        LeaveStatusFilter::Approved,
        LeaveStatusFilter::Rejected,
        LeaveStatusFilter::Cancelled,
    ];

    /// The status sent to the backend; `None` means unfiltered.
    pub fn status(&self) -> Option<LeaveStatus> {
        match self {
            LeaveStatusFilter::All => None,
            LeaveStatusFilter::Pending => Some(LeaveStatus::Pending),
            LeaveStatusFilter::Approved => Some(LeaveStatus::Approved),
            LeaveStatusFilter::Rejected => Some(LeaveStatus::Rejected),
            LeaveStatusFilter::Cancelled => Some(LeaveStatus::Cancelled),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.status().map(|status| status.as_str()).unwrap_or("all")
    }

    pub fn label(&self) -> &'static str {
        self.status().map(|status| status.label()).unwrap_or("All")
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.as_str() == raw)
    }

    pub fn matches(&self, status: LeaveStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }
}

/// Requests matching `filter`, in their original order.
pub fn filter_by_status(
    requests: &[LeaveRequestResponse],
    filter: LeaveStatusFilter,
) -> Vec<LeaveRequestResponse> {
    requests
        .iter()
        .filter(|request| filter.matches(request.status))
        .cloned()
        .collect()
}

pub fn count_by_status(requests: &[LeaveRequestResponse]) -> HashMap<LeaveStatus, usize> {
    let mut counts = HashMap::new();
    for request in requests {
        *counts.entry(request.status).or_insert(0) += 1;
    }
    counts
}

/// One pill per filter; counts are attached when `requests` is known.
pub fn status_pills(requests: Option<&[LeaveRequestResponse]>) -> Vec<NavPill> {
    let counts = requests.map(count_by_status);
    LeaveStatusFilter::ALL
        .into_iter()
        .map(|filter| {
            let pill = NavPill::new(filter.as_str(), filter.label());
            match (&counts, requests, filter.status()) {
                (Some(counts), _, Some(status)) => {
                    pill.with_count(counts.get(&status).copied().unwrap_or(0))
                }
                (_, Some(requests), None) => pill.with_count(requests.len()),
                _ => pill,
            }
        })
        .collect()
}

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Cancelled => "bg-surface-muted text-fg-muted",
    }
}

pub fn format_period(request: &LeaveRequestResponse) -> String {
    if request.start_date == request.end_date {
        request.start_date.format("%Y-%m-%d").to_string()
    } else {
        format!(
            "{} - {}",
            request.start_date.format("%Y-%m-%d"),
            request.end_date.format("%Y-%m-%d")
        )
    }
}

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::default().as_str().to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn fields(&self) -> LeaveFields {
        LeaveFields {
            leave_type: self.leave_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.leave_type.set(LeaveType::default().as_str().into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }
}
