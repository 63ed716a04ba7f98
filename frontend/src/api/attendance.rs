use reqwest::Method;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceResponse},
};

impl ApiClient {
    pub async fn clock_in(&self) -> Result<AttendanceResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/attendance/clock-in")
            .await
            .json(&json!({}));
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn clock_out(&self) -> Result<AttendanceResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/attendance/clock-out")
            .await
            .json(&json!({}));
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn get_my_attendance(&self) -> Result<Vec<AttendanceResponse>, ApiError> {
        let builder = self.request(Method::GET, "/attendance/me").await;
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }
}
