//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountApi, ConfirmPrompt, HostBridge, WindowControl};
use crate::types::{Account, AccountDraft, ActionResult, LoginSpeed, Region};

// ===== MockHost =====

/// In-memory host with the same answers a real backend gives.
pub struct MockHost {
    accounts: Mutex<Vec<Account>>,
    regions: Vec<Region>,
    speed: Mutex<LoginSpeed>,
    /// 如果为 true，所有调用都返回错误（模拟 bridge 异常）
    failing: bool,
    /// 如果为 false，窗口控制返回 Unsupported
    has_window: bool,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            regions: Vec::new(),
            speed: Mutex::new(LoginSpeed::Default),
            failing: false,
            has_window: true,
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let host = Self::new();
        *host.accounts.lock().unwrap_or_else(PoisonError::into_inner) = accounts;
        host
    }

    pub fn with_regions(regions: Vec<Region>) -> Self {
        Self {
            regions,
            ..Self::new()
        }
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn without_window(mut self) -> Self {
        self.has_window = false;
        self
    }

    /// Number of times `op` reached this host.
    pub fn calls(&self, op: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(op)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, op: &'static str) -> CoreResult<()> {
        *self
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(op)
            .or_insert(0) += 1;

        if self.failing {
            Err(CoreError::Bridge(format!("{op} raised")))
        } else {
            Ok(())
        }
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountApi for MockHost {
    async fn list_accounts(&self) -> CoreResult<Vec<Account>> {
        self.record("list_accounts")?;
        Ok(self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn list_regions(&self) -> CoreResult<Vec<Region>> {
        self.record("list_regions")?;
        Ok(self.regions.clone())
    }

    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult> {
        self.record("save_account")?;
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        let account = Account::new(&draft.username, &draft.password, &draft.region);
        if let Some(existing) = accounts.iter_mut().find(|a| a.username == draft.username) {
            *existing = account;
        } else {
            accounts.push(account);
        }
        Ok(ActionResult::success(format!(
            "Account '{}' saved successfully",
            draft.username
        )))
    }

    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult> {
        self.record("delete_account")?;
        let mut accounts = self.accounts.lock().unwrap_or_else(PoisonError::into_inner);
        let before = accounts.len();
        accounts.retain(|a| a.username != username);
        if accounts.len() == before {
            Ok(ActionResult::failure(format!(
                "Account '{username}' not found"
            )))
        } else {
            Ok(ActionResult::success(format!(
                "Account '{username}' deleted successfully"
            )))
        }
    }

    async fn login(&self, username: &str) -> CoreResult<ActionResult> {
        self.record("login")?;
        let known = self
            .accounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|a| a.username == username);
        if known {
            Ok(ActionResult::success(format!("Login attempted for '{username}'")))
        } else {
            Ok(ActionResult::failure("Account not found"))
        }
    }

    async fn speed_setting(&self) -> CoreResult<LoginSpeed> {
        self.record("speed_setting")?;
        Ok(*self.speed.lock().unwrap_or_else(PoisonError::into_inner))
    }

    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult> {
        self.record("set_speed_setting")?;
        *self.speed.lock().unwrap_or_else(PoisonError::into_inner) = speed;
        Ok(ActionResult::success(format!(
            "Speed setting updated to {speed}"
        )))
    }
}

#[async_trait]
impl WindowControl for MockHost {
    async fn minimize_window(&self) -> CoreResult<ActionResult> {
        self.record("minimize_window")?;
        if self.has_window {
            Ok(ActionResult::success("Window minimized"))
        } else {
            Err(CoreError::Unsupported("minimize_window".into()))
        }
    }

    async fn close_window(&self) -> CoreResult<ActionResult> {
        self.record("close_window")?;
        if self.has_window {
            Ok(ActionResult::success("Window closed"))
        } else {
            Err(CoreError::Unsupported("close_window".into()))
        }
    }
}

impl HostBridge for MockHost {
    fn name(&self) -> &'static str {
        "mock"
    }
}

// ===== FixedPrompt =====

/// Prompt that always gives the same answer and counts how often it was asked.
pub struct FixedPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl FixedPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ConfirmPrompt for FixedPrompt {
    async fn confirm(&self, message: &str) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answer
    }
}
