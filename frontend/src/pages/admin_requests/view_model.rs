use crate::{
    actions::{self, DecisionFields},
    api::{ApiClient, ApiError, LeaveRequestResponse},
    form_action::{use_form_action, ActionResult, FormActionController},
    pages::requests::utils::LeaveStatusFilter,
};
use leptos::*;

pub type DecisionController = FormActionController<DecisionFields, LeaveRequestResponse>;

#[derive(Clone, Copy)]
pub struct AdminRequestsViewModel {
    pub filter: RwSignal<LeaveStatusFilter>,
    pub comment: RwSignal<String>,
    pub message: RwSignal<Option<String>>,
    /// Failure of the most recent decision; cleared by the next success.
    pub error: RwSignal<Option<String>>,
    pub requests_resource:
        Resource<(u32, LeaveStatusFilter), Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub approve_action: DecisionController,
    pub reject_action: DecisionController,
}

fn decision_message(request: &LeaveRequestResponse) -> String {
    let who = request.user_name.as_deref().unwrap_or(&request.user_id);
    format!(
        "{} request from {} is now {}.",
        request.leave_type.label(),
        who,
        request.status.label().to_ascii_lowercase()
    )
}

fn decision_controller<Fut>(
    action: impl Fn(ApiClient, DecisionFields) -> Fut + 'static,
    api: ApiClient,
    comment: RwSignal<String>,
    message: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    reload: RwSignal<u32>,
) -> DecisionController
where
    Fut: std::future::Future<Output = ActionResult<LeaveRequestResponse>> + 'static,
{
    use_form_action(
        move |_previous, fields: DecisionFields| action(api.clone(), fields),
        ActionResult::Idle,
    )
    .on_success(move |result| {
        message.set(result.value().map(decision_message));
        error.set(None);
        comment.set(String::new());
        reload.update(|value| *value = value.wrapping_add(1));
    })
    .on_error(move |result| {
        message.set(None);
        error.set(result.error().map(str::to_string));
    })
}

pub fn use_admin_requests_view_model() -> AdminRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let filter = create_rw_signal(LeaveStatusFilter::Pending);
    let comment = create_rw_signal(String::new());
    let message = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let list_api = api.clone();
    let requests_resource = create_resource(
        move || (reload.get(), filter.get()),
        move |(_, filter)| {
            let api = list_api.clone();
            async move { api.admin_list_leave_requests(filter.status()).await }
        },
    );

    let approve_action = decision_controller(
        actions::approve_leave,
        api.clone(),
        comment,
        message,
        error,
        reload,
    );
    let reject_action =
        decision_controller(actions::reject_leave, api, comment, message, error, reload);

    AdminRequestsViewModel {
        filter,
        comment,
        message,
        error,
        requests_resource,
        approve_action,
        reject_action,
    }
}

impl AdminRequestsViewModel {
    pub fn decide(&self, id: String, approve: bool) {
        let fields = DecisionFields {
            id,
            comment: self.comment.get_untracked(),
        };
        if approve {
            self.approve_action.dispatch(fields);
        } else {
            self.reject_action.dispatch(fields);
        }
    }

    pub fn any_pending(&self) -> Signal<bool> {
        let approve = self.approve_action.pending();
        let reject = self.reject_action.pending();
        Signal::derive(move || approve.get() || reject.get())
    }
}


#[cfg(all(test, not(target_arch = "wasm32"), not(coverage)))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn approving_sends_comment_and_clears_it() {
        let server = MockServer::start_async().await;
        let approve = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/admin/requests/leave/lr1/approve")
                .json_body(json!({ "comment": "Enjoy" }));
            then.status(200).json_body(json!({
                "id": "lr1",
                "user_id": "u1",
                "user_name": "Alice Example",
                "leave_type": "annual",
                "start_date": "2025-01-10",
                "end_date": "2025-01-12",
                "status": "approved",
                "created_at": "2025-01-01T00:00:00Z"
            }));
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_requests_view_model();
            assert_eq!(vm.filter.get_untracked(), LeaveStatusFilter::Pending);
            vm.comment.set("Enjoy".into());

            vm.approve_action
                .submit(DecisionFields {
                    id: "lr1".into(),
                    comment: vm.comment.get_untracked(),
                })
                .await;

            assert_eq!(
                vm.message.get_untracked().as_deref(),
                Some("Annual leave request from Alice Example is now approved.")
            );
            assert!(vm.comment.get_untracked().is_empty());
            assert!(!vm.any_pending().get_untracked());
        })
        .await;
        approve.assert();
    }

    #[tokio::test]
    async fn rejecting_a_decided_request_reports_backend_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/admin/requests/leave/lr2/reject");
            then.status(409)
                .json_body(json!({ "error": "Request already decided", "code": "CONFLICT" }));
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_requests_view_model();
            vm.reject_action
                .submit(DecisionFields {
                    id: "lr2".into(),
                    comment: String::new(),
                })
                .await;
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Request already decided")
            );
        })
        .await;
    }

    #[tokio::test]
    async fn successful_decision_clears_earlier_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/admin/requests/leave/lr1/approve");
            then.status(409)
                .json_body(json!({ "error": "Request already decided", "code": "CONFLICT" }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/admin/requests/leave/lr2/reject");
            then.status(200).json_body(json!({
                "id": "lr2",
                "user_id": "u1",
                "leave_type": "annual",
                "start_date": "2025-01-10",
                "end_date": "2025-01-12",
                "status": "rejected",
                "created_at": "2025-01-01T00:00:00Z"
            }));
        });

        with_local_runtime_async(|| async {
            provide_context(ApiClient::new_with_base_url(server.url("/api")));
            let vm = use_admin_requests_view_model();
            let decision = |id: &str| DecisionFields {
                id: id.into(),
                comment: String::new(),
            };

            vm.approve_action.submit(decision("lr1")).await;
            assert_eq!(
                vm.error.get_untracked().as_deref(),
                Some("Request already decided")
            );

            vm.reject_action.submit(decision("lr2")).await;
            assert_eq!(
                vm.message.get_untracked().as_deref(),
                Some("Annual leave request from u1 is now rejected.")
            );
            assert!(vm.error.get_untracked().is_none());
        })
        .await;
    }
}
