use crate::{
    actions,
    api::{ApiClient, ApiError, AttendanceResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    utils::time::format_clock_time,
};
use chrono::NaiveDateTime;
use leptos::*;

pub type ClockController = FormActionController<(), AttendanceResponse>;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub history_resource: Resource<u32, Result<Vec<AttendanceResponse>, ApiError>>,
    pub clock_in_action: ClockController,
    pub clock_out_action: ClockController,
    pub message: RwSignal<Option<String>>,
    /// Failure of the most recent clock action.
    pub error: RwSignal<Option<String>>,
}

/// Which side of the record a clock button writes.
#[derive(Clone, Copy)]
struct ClockEdge {
    label: &'static str,
    stamp: fn(&AttendanceResponse) -> Option<NaiveDateTime>,
}

const CLOCK_IN: ClockEdge = ClockEdge {
    label: "in",
    stamp: |record: &AttendanceResponse| record.clock_in_time,
};

const CLOCK_OUT: ClockEdge = ClockEdge {
    label: "out",
    stamp: |record: &AttendanceResponse| record.clock_out_time,
};

fn clock_controller<Fut>(
    action: impl Fn(ApiClient) -> Fut + 'static,
    api: ApiClient,
    edge: ClockEdge,
    message: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    reload: RwSignal<u32>,
) -> ClockController
where
    Fut: std::future::Future<Output = ActionResult<AttendanceResponse>> + 'static,
{
    use_form_action(move |_previous, ()| action(api.clone()), ActionResult::Idle)
        .on_success(move |result| {
            if let Some(record) = result.value() {
                let time = format_clock_time((edge.stamp)(record));
                message.set(Some(format!("Clocked {} at {}.", edge.label, time)));
            }
            error.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        })
        .on_error(move |result| {
            message.set(None);
            error.set(result.error().map(str::to_string));
        })
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let message = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let history_api = api.clone();
    let history_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = history_api.clone();
            async move { api.get_my_attendance().await }
        },
    );

    let clock_in_action =
        clock_controller(actions::clock_in, api.clone(), CLOCK_IN, message, error, reload);
    let clock_out_action =
        clock_controller(actions::clock_out, api, CLOCK_OUT, message, error, reload);

    AttendanceViewModel {
        history_resource,
        clock_in_action,
        clock_out_action,
        message,
        error,
    }
}

impl AttendanceViewModel {
    pub fn any_pending(&self) -> Signal<bool> {
        let clock_in = self.clock_in_action.pending();
        let clock_out = self.clock_out_action.pending();
        Signal::derive(move || clock_in.get() || clock_out.get())
    }
}
