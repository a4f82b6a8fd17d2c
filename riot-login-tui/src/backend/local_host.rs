//! 本地宿主
//!
//! 使用 JSON 文件存储账号和登录速度，实现 riot-login-core 的 `HostBridge` trait。
//! 没有登录自动化和窗口，对应调用返回 `Unsupported`。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use riot_login_core::traits::{AccountApi, HostBridge, WindowControl};
use riot_login_core::types::{
    default_regions, Account, AccountDraft, ActionResult, LoginSpeed, Region,
};
use riot_login_core::{build_client, CoreError, CoreResult, HostClient, RestClient};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use super::config_service::AppConfig;

const ACCOUNTS_FILE: &str = "accounts.json";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    speed: LoginSpeed,
}

/// 基于 JSON 文件的本地宿主
pub struct LocalHost {
    dir: PathBuf,
    /// 内存缓存，`None` 表示尚未从文件加载
    cache: Mutex<Option<Vec<Account>>>,
}

impl LocalHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(None),
        }
    }

    /// 确保数据目录存在
    async fn ensure_dir(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }

    /// 从文件加载账号列表
    async fn load_accounts(&self) -> CoreResult<Vec<Account>> {
        let path = self.dir.join(ACCOUNTS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存账号列表到文件
    async fn store_accounts(&self, accounts: &[Account]) -> CoreResult<()> {
        self.ensure_dir().await?;
        let content = serde_json::to_string_pretty(accounts)?;
        fs::write(self.dir.join(ACCOUNTS_FILE), content)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }

    async fn load_settings(&self) -> CoreResult<Settings> {
        let path = self.dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn store_settings(&self, settings: &Settings) -> CoreResult<()> {
        self.ensure_dir().await?;
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(self.dir.join(SETTINGS_FILE), content)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))
    }

    /// Current list, loading it into the cache on first use.
    async fn cached_accounts(&self) -> CoreResult<Vec<Account>> {
        let mut cache = self.cache.lock().await;
        if let Some(accounts) = cache.as_ref() {
            return Ok(accounts.clone());
        }
        let accounts = self.load_accounts().await?;
        *cache = Some(accounts.clone());
        Ok(accounts)
    }

    /// Apply `f` to a copy of the list. When it reports a change the copy is
    /// written to disk first and only then becomes the cached list.
    async fn modify_accounts<R>(
        &self,
        f: impl FnOnce(&mut Vec<Account>) -> (bool, R),
    ) -> CoreResult<R> {
        let mut cache = self.cache.lock().await;
        let mut accounts = match cache.as_ref() {
            Some(accounts) => accounts.clone(),
            None => self.load_accounts().await?,
        };

        let (changed, result) = f(&mut accounts);
        if changed {
            self.store_accounts(&accounts).await?;
            *cache = Some(accounts);
        }
        Ok(result)
    }
}

#[async_trait]
impl AccountApi for LocalHost {
    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        self.cached_accounts().await
    }

    async fn list_regions(&self) -> CoreResult<Vec<Region>> {
        Ok(default_regions())
    }

    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult> {
        let account = Account::new(&draft.username, &draft.password, &draft.region);
        let updated = self
            .modify_accounts(|accounts| {
                let updated = match accounts.iter_mut().find(|a| a.username == account.username) {
                    Some(existing) => {
                        *existing = account;
                        true
                    }
                    None => {
                        accounts.push(account);
                        false
                    }
                };
                (true, updated)
            })
            .await?;

        let verb = if updated { "updated" } else { "saved" };
        Ok(ActionResult::success(format!(
            "Account '{}' {verb} successfully",
            draft.username
        )))
    }

    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult> {
        let removed = self
            .modify_accounts(|accounts| {
                let before = accounts.len();
                accounts.retain(|a| a.username != username);
                let removed = accounts.len() != before;
                (removed, removed)
            })
            .await?;

        if removed {
            Ok(ActionResult::success(format!(
                "Account '{username}' deleted successfully"
            )))
        } else {
            Ok(ActionResult::failure(format!(
                "Account '{username}' not found"
            )))
        }
    }

    async fn login(&self, _username: &str) -> CoreResult<ActionResult> {
        Err(CoreError::Unsupported(
            "login automation is not available in the local host".into(),
        ))
    }

    async fn speed_setting(&self) -> CoreResult<LoginSpeed> {
        Ok(self.load_settings().await?.speed)
    }

    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult> {
        self.store_settings(&Settings { speed }).await?;
        Ok(ActionResult::success(format!(
            "Speed setting updated to {speed}"
        )))
    }
}

#[async_trait]
impl WindowControl for LocalHost {
    async fn minimize_window(&self) -> CoreResult<ActionResult> {
        Err(CoreError::Unsupported("terminal has no host window".into()))
    }

    async fn close_window(&self) -> CoreResult<ActionResult> {
        Err(CoreError::Unsupported("terminal has no host window".into()))
    }
}

impl HostBridge for LocalHost {
    fn name(&self) -> &'static str {
        "local"
    }
}

/// 构建前端使用的客户端
///
/// 只有 `local_store` 打开时才把 `LocalHost` 挂成宿主；否则没有宿主，
/// auto 模式下所有调用都走 REST 后端。
pub fn build_backend_client(config: &AppConfig, dir: &Path) -> CoreResult<Arc<dyn HostClient>> {
    let rest = RestClient::with_timeout(&config.api_base_url, config.request_timeout())?;
    let host: Option<Arc<dyn HostBridge>> = if config.local_store {
        Some(Arc::new(LocalHost::new(dir)))
    } else {
        None
    };
    Ok(build_client(config.transport, host, rest))
}

#[cfg(test)]
mod tests {
    use tokio_test::assert_ok;

    use super::*;

    fn draft(username: &str, password: &str, region: &str) -> AccountDraft {
        AccountDraft {
            username: username.into(),
            password: password.into(),
            region: region.into(),
        }
    }

    #[tokio::test]
    async fn save_then_list_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());

        let result = assert_ok!(host.save_account(&draft("alice", "pw123", "NA1")).await);
        assert_eq!(
            result,
            ActionResult::success("Account 'alice' saved successfully")
        );

        let reopened = LocalHost::new(dir.path());
        let accounts = assert_ok!(reopened.list_accounts().await);
        assert_eq!(accounts, vec![Account::new("alice", "pw123", "NA1")]);
    }

    #[tokio::test]
    async fn saving_existing_username_updates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());
        host.save_account(&draft("alice", "old", "NA")).await.unwrap();

        let result = host.save_account(&draft("alice", "new", "EUW")).await.unwrap();

        assert_eq!(result.message, "Account 'alice' updated successfully");
        let accounts = host.list_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].region, "EUW");
    }

    #[tokio::test]
    async fn delete_unknown_account_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());

        let result = host.delete_account("ghost").await.unwrap();

        assert_eq!(result, ActionResult::failure("Account 'ghost' not found"));
    }

    #[tokio::test]
    async fn delete_removes_account() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());
        host.save_account(&draft("alice", "pw", "NA")).await.unwrap();
        host.save_account(&draft("bob", "pw", "KR")).await.unwrap();

        assert!(host.delete_account("alice").await.unwrap().success);

        let names: Vec<_> = LocalHost::new(dir.path())
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.username)
            .collect();
        assert_eq!(names, vec!["bob".to_string()]);
    }

    #[tokio::test]
    async fn stored_account_without_region_reads_as_na() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("accounts.json"),
            r#"[{"username":"carol","password":"pw"}]"#,
        )
        .unwrap();

        let accounts = LocalHost::new(dir.path()).list_accounts().await.unwrap();
        assert_eq!(accounts[0].region, "NA");
    }

    #[tokio::test]
    async fn speed_setting_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());
        assert_eq!(host.speed_setting().await.unwrap(), LoginSpeed::Default);

        let result = host.set_speed_setting(LoginSpeed::Slow).await.unwrap();

        assert_eq!(result.message, "Speed setting updated to Slow");
        assert_eq!(host.speed_setting().await.unwrap(), LoginSpeed::Slow);
    }

    #[tokio::test]
    async fn login_and_window_are_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());

        assert!(matches!(
            host.login("alice").await,
            Err(CoreError::Unsupported(_))
        ));
        assert!(matches!(
            host.minimize_window().await,
            Err(CoreError::Unsupported(_))
        ));
    }

    #[tokio::test]
    async fn failed_write_leaves_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let host = LocalHost::new(blocker.join("sub"));

        let result = host.save_account(&draft("alice", "pw", "NA")).await;

        assert!(matches!(result, Err(CoreError::Storage(_))));
        assert!(host.list_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_keeps_account_cached() {
        let dir = tempfile::tempdir().unwrap();
        let host = LocalHost::new(dir.path());
        host.save_account(&draft("alice", "pw", "NA")).await.unwrap();
        std::fs::remove_file(dir.path().join("accounts.json")).unwrap();
        std::fs::create_dir(dir.path().join("accounts.json")).unwrap();

        assert!(host.delete_account("alice").await.is_err());

        let accounts = host.list_accounts().await.unwrap();
        assert_eq!(accounts, vec![Account::new("alice", "pw", "NA")]);
    }

    fn config_for_unreachable_rest(local_store: bool) -> AppConfig {
        AppConfig {
            api_base_url: "http://127.0.0.1:9".into(),
            request_timeout_secs: 2,
            local_store,
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn default_wiring_reads_accounts_from_rest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("accounts.json"),
            r#"[{"username":"alice","password":"pw","region":"NA"}]"#,
        )
        .unwrap();

        let client = build_backend_client(&config_for_unreachable_rest(false), dir.path()).unwrap();

        assert!(matches!(
            client.list_accounts().await,
            Err(CoreError::Network(_) | CoreError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn local_store_wiring_serves_file_accounts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("accounts.json"),
            r#"[{"username":"alice","password":"pw","region":"NA"}]"#,
        )
        .unwrap();

        let client = build_backend_client(&config_for_unreachable_rest(true), dir.path()).unwrap();

        let accounts = assert_ok!(client.list_accounts().await);
        assert_eq!(accounts[0].username, "alice");
    }

    #[tokio::test]
    async fn regions_are_the_fixed_list() {
        let dir = tempfile::tempdir().unwrap();
        let regions = LocalHost::new(dir.path()).list_regions().await.unwrap();
        assert_eq!(regions.len(), 20);
    }
}
