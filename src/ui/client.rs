use crate::models::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Why an API call did not produce the expected body
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The API answered with a non-success status
    Status { status: u16, message: Option<String> },
    /// No response: connection refused, DNS failure, timeout
    Network(String),
    /// A response arrived but could not be understood
    Unexpected(String),
}

impl ClientError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            ClientError::Network(err.to_string())
        } else {
            ClientError::Unexpected(err.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Status { status, message } => write!(
                f,
                "API responded {}: {}",
                status,
                message.as_deref().unwrap_or("no message")
            ),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Unexpected(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

/// HTTP client for the user API, used by the UI pages
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, prefix: &str, id: &str) -> String {
        self.url(&format!("{}/{}", prefix, urlencoding::encode(id)))
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ClientError> {
        self.send(self.http.get(self.url("/api/get/users"))).await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserResponse, ClientError> {
        self.send(self.http.get(self.user_url("/api/get/user", id))).await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserResponse, ClientError> {
        self.send(self.http.post(self.url("/api/user")).json(request)).await
    }

    pub async fn update_user(
        &self,
        id: &str,
        request: &UpdateUserRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.send(self.http.put(self.user_url("/api/update/user", id)).json(request))
            .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<MessageResponse, ClientError> {
        self.send(self.http.delete(self.user_url("/api/delete/user", id))).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(ClientError::from_transport)?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .ok()
                .map(|body| body.message);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Unexpected(e.to_string()))
    }
}
