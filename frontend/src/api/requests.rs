use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, CreateLeaveRequest, DecisionPayload, LeaveRequestResponse, LeaveStatus},
};

fn admin_leave_params(status: Option<LeaveStatus>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(("status", status.as_str().to_string()));
    }
    params
}

impl ApiClient {
    pub async fn create_leave_request(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/requests/leave")
            .await
            .json(request);
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn get_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let builder = self.request(Method::GET, "/requests/leave/me").await;
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn admin_list_leave_requests(
        &self,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let params = admin_leave_params(status);
        let mut builder = self.request(Method::GET, "/admin/requests/leave").await;
        if !params.is_empty() {
            builder = builder.query(&params);
        }
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn admin_approve_leave_request(
        &self,
        id: &str,
        payload: &DecisionPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.admin_decide_leave_request(id, "approve", payload).await
    }

    pub async fn admin_reject_leave_request(
        &self,
        id: &str,
        payload: &DecisionPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.admin_decide_leave_request(id, "reject", payload).await
    }

    async fn admin_decide_leave_request(
        &self,
        id: &str,
        decision: &str,
        payload: &DecisionPayload,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let path = format!("/admin/requests/leave/{}/{}", path_segment(id), decision);
        let builder = self.request(Method::PUT, &path).await.json(payload);
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }
}
