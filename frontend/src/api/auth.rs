use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, RegisterRequest, SessionResponse, UserResponse},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionResponse, ApiError> {
        let builder = self.request(Method::POST, "/auth/login").await.json(request);
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/auth/register")
            .await
            .json(request);
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/auth/logout").await;
        let response = self.send(builder).await?;
        self.map_empty_response(response).await
    }

    /// Resolves the signed-in user from the backend session.
    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let builder = self.request(Method::GET, "/auth/me").await;
        let response = self.send(builder).await?;
        self.map_json_response(response).await
    }
}
