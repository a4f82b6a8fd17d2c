//! Host bridge transport

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountApi, HostBridge, WindowControl};
use crate::types::{Account, AccountDraft, ActionResult, LoginSpeed, Region};
use crate::utils::mask_secret;

/// Client over the in-process host API.
///
/// Without an attached host every call fails with `BridgeUnavailable`,
/// which is what lets `FallbackClient` switch to REST.
pub struct BridgeClient {
    host: Option<Arc<dyn HostBridge>>,
}

impl BridgeClient {
    pub fn new(host: Arc<dyn HostBridge>) -> Self {
        Self { host: Some(host) }
    }

    /// Client with no host behind it.
    pub fn detached() -> Self {
        Self { host: None }
    }

    pub fn from_option(host: Option<Arc<dyn HostBridge>>) -> Self {
        Self { host }
    }

    fn host(&self, op: &str) -> CoreResult<&Arc<dyn HostBridge>> {
        match self.host.as_ref() {
            Some(host) => {
                log::debug!("[bridge:{}] {op}", host.name());
                Ok(host)
            }
            None => {
                log::debug!("[bridge] {op}: no host attached");
                Err(CoreError::BridgeUnavailable)
            }
        }
    }
}

#[async_trait]
impl AccountApi for BridgeClient {
    async fn wait_ready(&self) -> bool {
        match self.host.as_ref() {
            Some(host) => host.wait_ready().await,
            None => false,
        }
    }

    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        self.host("get_accounts")?.list_accounts().await
    }

    async fn list_regions(&self) -> CoreResult<Vec<Region>> {
        self.host("get_regions")?.list_regions().await
    }

    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult> {
        let host = self.host("save_account")?;
        log::debug!(
            "[bridge] save_account username={} password={} region={}",
            draft.username,
            mask_secret(&draft.password),
            draft.region
        );
        host.save_account(draft).await
    }

    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult> {
        self.host("delete_account")?.delete_account(username).await
    }

    async fn login(&self, username: &str) -> CoreResult<ActionResult> {
        self.host("login_to_client")?.login(username).await
    }

    async fn speed_setting(&self) -> CoreResult<LoginSpeed> {
        self.host("get_speed_setting")?.speed_setting().await
    }

    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult> {
        self.host("set_speed_setting")?.set_speed_setting(speed).await
    }
}

#[async_trait]
impl WindowControl for BridgeClient {
    async fn minimize_window(&self) -> CoreResult<ActionResult> {
        self.host("minimize_window")?.minimize_window().await
    }

    async fn close_window(&self) -> CoreResult<ActionResult> {
        self.host("close_window")?.close_window().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockHost;

    #[tokio::test]
    async fn detached_bridge_is_unavailable() {
        let client = BridgeClient::detached();
        assert!(!client.wait_ready().await);
        assert_eq!(
            client.list_accounts().await,
            Err(CoreError::BridgeUnavailable)
        );
        assert_eq!(
            client.minimize_window().await,
            Err(CoreError::BridgeUnavailable)
        );
    }

    #[tokio::test]
    async fn attached_bridge_forwards_calls() {
        let host = Arc::new(MockHost::with_accounts(vec![Account::new("alice", "pw", "NA")]));
        let client = BridgeClient::new(host.clone());

        assert!(client.wait_ready().await);
        let accounts = client.list_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(host.calls("list_accounts"), 1);
    }
}
