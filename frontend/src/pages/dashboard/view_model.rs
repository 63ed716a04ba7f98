use crate::api::{ApiClient, ApiError, AttendanceResponse, LeaveRequestResponse};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub attendance_resource: Resource<(), Result<Vec<AttendanceResponse>, ApiError>>,
    pub leave_resource: Resource<(), Result<Vec<LeaveRequestResponse>, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();

    let attendance_api = api.clone();
    let attendance_resource = create_resource(
        || (),
        move |_| {
            let api = attendance_api.clone();
            async move { api.get_my_attendance().await }
        },
    );
    let leave_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_my_leave_requests().await }
        },
    );

    DashboardViewModel {
        attendance_resource,
        leave_resource,
    }
}
