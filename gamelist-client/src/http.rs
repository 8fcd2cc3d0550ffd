//! HTTP client for the gamelist-server API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::{
    Game, GameInput, GameList, GameListDetail, GameListInput, ProfileInput, ReorderItem,
    ReorderRequest, ReorderResult, SignInInput, SignInResponse, SignUpInput, User, UserCount,
};
use shared::validation::FieldErrors;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to gamelist-server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn put<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::handle_response(response).await
    }

    /// Parse `T` on success, the error body otherwise
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(error_from_body(status, &text));
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Accounts ==========

    pub async fn sign_up(&self, input: &SignUpInput) -> ClientResult<User> {
        self.post("api/auth/signup", input).await
    }

    /// Sign in and keep the returned token for later requests
    pub async fn sign_in(&mut self, email: &str, password: &str) -> ClientResult<SignInResponse> {
        let input = SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: SignInResponse = self.post("api/auth/signin", &input).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Drop the token; the server keeps no session
    pub fn sign_out(&mut self) {
        self.token = None;
    }

    pub async fn profile(&self) -> ClientResult<User> {
        self.get("api/profile").await
    }

    pub async fn update_profile(&self, input: &ProfileInput) -> ClientResult<User> {
        self.put("api/profile", input).await
    }

    pub async fn user_count(&self) -> ClientResult<UserCount> {
        self.get("api/users/count").await
    }

    // ========== Lists ==========

    pub async fn lists(&self) -> ClientResult<Vec<GameListDetail>> {
        self.get("api/lists").await
    }

    pub async fn list(&self, list_id: i64) -> ClientResult<GameListDetail> {
        self.get(&format!("api/lists/{list_id}")).await
    }

    pub async fn create_list(&self, input: &GameListInput) -> ClientResult<GameList> {
        self.post("api/lists", input).await
    }

    pub async fn update_list(&self, list_id: i64, input: &GameListInput) -> ClientResult<GameList> {
        self.put(&format!("api/lists/{list_id}"), input).await
    }

    pub async fn delete_list(&self, list_id: i64) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("api/lists/{list_id}"))
            .await?;
        Ok(())
    }

    // ========== Games ==========

    pub async fn add_game(&self, list_id: i64, input: &GameInput) -> ClientResult<Game> {
        self.post(&format!("api/lists/{list_id}/games"), input).await
    }

    pub async fn update_game(
        &self,
        list_id: i64,
        game_id: i64,
        input: &GameInput,
    ) -> ClientResult<Game> {
        self.put(&format!("api/lists/{list_id}/games/{game_id}"), input)
            .await
    }

    pub async fn delete_game(&self, list_id: i64, game_id: i64) -> ClientResult<()> {
        self.delete::<serde_json::Value>(&format!("api/lists/{list_id}/games/{game_id}"))
            .await?;
        Ok(())
    }

    pub async fn reorder(&self, items: &[ReorderItem], list_id: i64) -> ClientResult<ReorderResult> {
        let request = ReorderRequest {
            items: items.to_vec(),
        };
        self.post(&format!("api/lists/{list_id}/reorder"), &request)
            .await
    }
}

/// Map a non-success response to a client error, keeping the server's message
fn error_from_body(status: StatusCode, text: &str) -> ClientError {
    let app_error = serde_json::from_str::<ApiResponse<()>>(text)
        .ok()
        .and_then(ApiResponse::into_error);

    let (message, details) = match app_error {
        Some(err) => (err.message, err.details),
        None if !text.trim().is_empty() => (text.trim().to_string(), None),
        None => (
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
            None,
        ),
    };

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::CONFLICT => ClientError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation {
            fields: details
                .as_ref()
                .map(FieldErrors::from_details)
                .unwrap_or_default(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited(message),
        _ => ClientError::Internal(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_server_message() {
        let body = r#"{"code":4001,"message":"Game list not found or you don't have permission"}"#;
        let err = error_from_body(StatusCode::NOT_FOUND, body);
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(
            err.message(),
            "Game list not found or you don't have permission"
        );
    }

    #[test]
    fn test_validation_carries_fields() {
        let body = r#"{"code":2,"message":"A valid URL is required | Game name is required",
            "details":{"url":["A valid URL is required"],"name":["Game name is required"]}}"#;
        let err = error_from_body(StatusCode::BAD_REQUEST, body);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.first("url"), Some("A valid URL is required"));
        assert_eq!(fields.first("name"), Some("Game name is required"));
    }

    #[test]
    fn test_unparseable_body() {
        let err = error_from_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, ClientError::Internal(ref m) if m == "upstream down"));

        let err = error_from_body(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.message(), "Unauthorized");
    }

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.url("/api/lists"), "http://localhost:8080/api/lists");
        assert_eq!(client.url("api/lists"), "http://localhost:8080/api/lists");
        assert!(client.token().is_none());
    }
}
