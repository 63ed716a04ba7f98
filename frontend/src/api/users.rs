use reqwest::Method;

use super::{
    client::{path_segment, ApiClient},
    types::{ApiError, CreateUser, UserResponse},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let builder = self.request(Method::GET, "/admin/users").await;
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn create_user(&self, request: &CreateUser) -> Result<UserResponse, ApiError> {
        let builder = self.request(Method::POST, "/admin/users").await.json(request);
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/users/{}", path_segment(user_id));
        let builder = self.request(Method::DELETE, &path).await;
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }
}
