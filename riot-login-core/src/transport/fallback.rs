//! Primary/secondary transport with a single fallback hop

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountApi, HostClient, WindowControl};
use crate::types::{Account, AccountDraft, ActionResult, LoginSpeed, Region};

use super::WINDOW_CONTROL_UNAVAILABLE;

/// Tries the primary transport, then the secondary once.
///
/// - Data calls: any primary error is logged and the same call is issued on
///   the secondary. Without a secondary the error is returned as is.
/// - Window calls: host only. A primary error becomes the explicit failure
///   result `WINDOW_CONTROL_UNAVAILABLE`.
pub struct FallbackClient {
    primary: Arc<dyn HostClient>,
    secondary: Option<Arc<dyn AccountApi>>,
}

impl FallbackClient {
    pub fn new(primary: Arc<dyn HostClient>, secondary: Option<Arc<dyn AccountApi>>) -> Self {
        Self { primary, secondary }
    }

    /// Log the primary failure and hand back the secondary, if any.
    fn secondary_after(&self, op: &str, err: &CoreError) -> Option<&Arc<dyn AccountApi>> {
        match self.secondary.as_ref() {
            Some(secondary) => {
                log::warn!("{op}: primary transport failed ({err}), falling back to REST");
                Some(secondary)
            }
            None => {
                if err.is_expected() {
                    log::warn!("{op}: {err}");
                } else {
                    log::error!("{op}: {err}");
                }
                None
            }
        }
    }

    fn window_failure(op: &str, err: &CoreError) -> ActionResult {
        log::warn!("{op}: {err}");
        ActionResult::failure(WINDOW_CONTROL_UNAVAILABLE)
    }
}

#[async_trait]
impl AccountApi for FallbackClient {
    async fn wait_ready(&self) -> bool {
        let primary_ready = self.primary.wait_ready().await;
        if !primary_ready && self.secondary.is_some() {
            log::info!("Primary transport not ready, REST fallback stays available");
        }
        primary_ready || self.secondary.is_some()
    }

    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        match self.primary.list_accounts().await {
            Ok(accounts) => Ok(accounts),
            Err(e) => match self.secondary_after("list_accounts", &e) {
                Some(secondary) => secondary.list_accounts().await,
                None => Err(e),
            },
        }
    }

    async fn list_regions(&self) -> CoreResult<Vec<Region>> {
        match self.primary.list_regions().await {
            Ok(regions) => Ok(regions),
            Err(e) => match self.secondary_after("list_regions", &e) {
                Some(secondary) => secondary.list_regions().await,
                None => Err(e),
            },
        }
    }

    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult> {
        match self.primary.save_account(draft).await {
            Ok(result) => Ok(result),
            Err(e) => match self.secondary_after("save_account", &e) {
                Some(secondary) => secondary.save_account(draft).await,
                None => Err(e),
            },
        }
    }

    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult> {
        match self.primary.delete_account(username).await {
            Ok(result) => Ok(result),
            Err(e) => match self.secondary_after("delete_account", &e) {
                Some(secondary) => secondary.delete_account(username).await,
                None => Err(e),
            },
        }
    }

    async fn login(&self, username: &str) -> CoreResult<ActionResult> {
        match self.primary.login(username).await {
            Ok(result) => Ok(result),
            Err(e) => match self.secondary_after("login_to_client", &e) {
                Some(secondary) => secondary.login(username).await,
                None => Err(e),
            },
        }
    }

    async fn speed_setting(&self) -> CoreResult<LoginSpeed> {
        match self.primary.speed_setting().await {
            Ok(speed) => Ok(speed),
            Err(e) => match self.secondary_after("get_speed_setting", &e) {
                Some(secondary) => secondary.speed_setting().await,
                None => Err(e),
            },
        }
    }

    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult> {
        match self.primary.set_speed_setting(speed).await {
            Ok(result) => Ok(result),
            Err(e) => match self.secondary_after("set_speed_setting", &e) {
                Some(secondary) => secondary.set_speed_setting(speed).await,
                None => Err(e),
            },
        }
    }
}

#[async_trait]
impl WindowControl for FallbackClient {
    async fn minimize_window(&self) -> CoreResult<ActionResult> {
        Ok(self
            .primary
            .minimize_window()
            .await
            .unwrap_or_else(|e| Self::window_failure("minimize_window", &e)))
    }

    async fn close_window(&self) -> CoreResult<ActionResult> {
        Ok(self
            .primary
            .close_window()
            .await
            .unwrap_or_else(|e| Self::window_failure("close_window", &e)))
    }
}
