use crate::{
    actions::{self, LeaveFields},
    api::{ApiClient, ApiError, LeaveRequestResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    pages::requests::utils::{LeaveFormState, LeaveStatusFilter},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub form: LeaveFormState,
    pub filter: RwSignal<LeaveStatusFilter>,
    pub success: RwSignal<Option<String>>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub submit_action: FormActionController<LeaveFields, LeaveRequestResponse>,
}

pub fn use_requests_view_model() -> RequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let form = LeaveFormState::default();
    let filter = create_rw_signal(LeaveStatusFilter::All);
    let success = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let list_api = api.clone();
    let requests_resource = create_resource(
        move || reload.get(),
        move |_| {
            let api = list_api.clone();
            async move { api.get_my_leave_requests().await }
        },
    );

    let submit_action = use_form_action(
        move |_previous, fields: LeaveFields| actions::submit_leave_request(api.clone(), fields),
        ActionResult::Idle,
    )
    .on_success(move |result| {
        if let Some(created) = result.value() {
            success.set(Some(format!(
                "{} request submitted for {} day(s).",
                created.leave_type.label(),
                created.day_count()
            )));
        }
        form.reset();
        reload.update(|value| *value = value.wrapping_add(1));
    })
    .on_error(move |_| success.set(None));

    RequestsViewModel {
        form,
        filter,
        success,
        requests_resource,
        submit_action,
    }
}

impl RequestsViewModel {
    pub fn submit(&self) {
        self.submit_action.dispatch(self.form.fields());
    }
}
