//! REST transport over the fixed local endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountApi, WindowControl};
use crate::types::{Account, AccountDraft, ActionResult, LoginSpeed, Region};

use super::http::HttpUtils;
use super::WINDOW_CONTROL_UNAVAILABLE;

/// Base URL of the local backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Request timeout applied by the HTTP client itself.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize, Deserialize)]
struct SpeedBody {
    speed: LoginSpeed,
}

/// REST client for the account backend.
///
/// Endpoints:
/// - `GET    /api/accounts`
/// - `GET    /api/regions`
/// - `POST   /api/account`
/// - `DELETE /api/account/{username}`
/// - `POST   /api/login/{username}`
/// - `GET    /api/settings/speed`, `POST /api/settings/speed`
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> CoreResult<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn account_path(prefix: &str, username: &str) -> String {
        format!("{prefix}/{}", urlencoding::encode(username))
    }

    async fn get_data<T>(&self, path: &str) -> CoreResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = self.client.get(self.url(path));
        let (status, body) = HttpUtils::execute_request(request, "GET", path).await?;
        HttpUtils::parse_data(status, &body, path)
    }

    async fn post_action<B>(&self, path: &str, body: Option<&B>) -> CoreResult<ActionResult>
    where
        B: Serialize + Sync,
    {
        let mut request = self.client.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let (status, text) = HttpUtils::execute_request(request, "POST", path).await?;
        HttpUtils::parse_action(status, &text, path)
    }
}

#[async_trait]
impl AccountApi for RestClient {
    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        self.get_data("/api/accounts").await
    }

    async fn list_regions(&self) -> CoreResult<Vec<Region>> {
        self.get_data("/api/regions").await
    }

    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult> {
        self.post_action("/api/account", Some(draft)).await
    }

    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult> {
        let path = Self::account_path("/api/account", username);
        let request = self.client.delete(self.url(&path));
        let (status, text) = HttpUtils::execute_request(request, "DELETE", &path).await?;
        HttpUtils::parse_action(status, &text, &path)
    }

    async fn login(&self, username: &str) -> CoreResult<ActionResult> {
        let path = Self::account_path("/api/login", username);
        self.post_action::<()>(&path, None).await
    }

    async fn speed_setting(&self) -> CoreResult<LoginSpeed> {
        let body: SpeedBody = self.get_data("/api/settings/speed").await?;
        Ok(body.speed)
    }

    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult> {
        self.post_action("/api/settings/speed", Some(&SpeedBody { speed }))
            .await
    }
}

/// The REST backend has no window to control; callers get an explicit
/// failure result instead of an error.
#[async_trait]
impl WindowControl for RestClient {
    async fn minimize_window(&self) -> CoreResult<ActionResult> {
        Ok(ActionResult::failure(WINDOW_CONTROL_UNAVAILABLE))
    }

    async fn close_window(&self) -> CoreResult<ActionResult> {
        Ok(ActionResult::failure(WINDOW_CONTROL_UNAVAILABLE))
    }
}
