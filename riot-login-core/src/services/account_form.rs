//! Account form controller

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::{ConfirmPrompt, HostClient};
use crate::types::{Account, FormFields, LoginSpeed, Region};

use super::notification::Notice;

pub const SAVE_SUCCESS: &str = "Account saved successfully";
pub const DELETE_SUCCESS: &str = "Account deleted successfully";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGGING_IN: &str = "Logging in...";
pub const SELECT_TO_DELETE: &str = "Please select an account to delete";
pub const SELECT_TO_LOGIN: &str = "Please select an account to login";

/// Prompt shown before deleting `username`.
pub fn delete_prompt(username: &str) -> String {
    format!("Are you sure you want to delete the account \"{username}\"?")
}

/// What happens to the account selection after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Keep,
    Select(String),
    Clear,
}

/// Result of one controller action, applied to `AppState` by the front-end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormOutcome {
    pub notice: Option<Notice>,
    /// Freshly fetched list; replaces the cache wholesale.
    pub accounts: Option<Vec<Account>>,
    pub selection: Selection,
    pub speed: Option<LoginSpeed>,
    /// The front-end should shut down.
    pub exit: bool,
}

impl FormOutcome {
    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            ..Self::default()
        }
    }

    fn nothing() -> Self {
        Self::default()
    }
}

/// Initial data fetch: each part fails on its own.
#[derive(Debug)]
pub struct LoadOutcome {
    pub accounts: Result<Vec<Account>, CoreError>,
    pub regions: Result<Vec<Region>, CoreError>,
    pub speed: Result<LoginSpeed, CoreError>,
}

/// Drives save/delete/login against a `HostClient`.
///
/// Every method catches backend errors and turns them into notices; none of
/// them touch UI state directly.
pub struct AccountFormController {
    api: Arc<dyn HostClient>,
    minimize_before_login: bool,
}

impl AccountFormController {
    pub fn new(api: Arc<dyn HostClient>, minimize_before_login: bool) -> Self {
        Self {
            api,
            minimize_before_login,
        }
    }

    pub fn api(&self) -> &Arc<dyn HostClient> {
        &self.api
    }

    /// Fetch accounts, regions and the login speed concurrently.
    pub async fn load(&self) -> LoadOutcome {
        let (accounts, regions, speed) = tokio::join!(
            self.api.list_accounts(),
            self.api.list_regions(),
            self.api.speed_setting()
        );
        if let Ok(accounts) = &accounts {
            log::debug!("Loaded {} accounts", accounts.len());
        }
        if let Ok(regions) = &regions {
            log::debug!("Loaded {} regions", regions.len());
        }
        LoadOutcome {
            accounts,
            regions,
            speed,
        }
    }

    /// Re-fetch the account list.
    pub async fn refresh(&self) -> FormOutcome {
        match self.api.list_accounts().await {
            Ok(accounts) => FormOutcome {
                accounts: Some(accounts),
                ..FormOutcome::nothing()
            },
            Err(e) => FormOutcome::notice(Notice::error(format!("Error loading accounts: {e}"))),
        }
    }

    /// Best-effort reload after a mutation.
    async fn reload(&self) -> Option<Vec<Account>> {
        match self.api.list_accounts().await {
            Ok(accounts) => Some(accounts),
            Err(e) => {
                log::warn!("Reloading accounts failed: {e}");
                None
            }
        }
    }

    pub async fn save(&self, fields: &FormFields) -> FormOutcome {
        let draft = match fields.to_draft() {
            Ok(draft) => draft,
            Err(e) => return FormOutcome::notice(Notice::error(e.to_string())),
        };

        match self.api.save_account(&draft).await {
            Ok(result) if result.success => {
                log::info!("Saved account '{}'", draft.username);
                let accounts = self.reload().await;
                let selection = match &accounts {
                    Some(list) if list.iter().any(|a| a.username == draft.username) => {
                        Selection::Select(draft.username.clone())
                    }
                    _ => Selection::Keep,
                };
                FormOutcome {
                    notice: Some(Notice::success(SAVE_SUCCESS)),
                    accounts,
                    selection,
                    ..FormOutcome::nothing()
                }
            }
            Ok(result) => FormOutcome::notice(Notice::error(format!(
                "Error saving account: {}",
                result.message
            ))),
            Err(e) => FormOutcome::notice(Notice::error(format!("Error saving account: {e}"))),
        }
    }

    /// Delete the selected account after `prompt` confirms it.
    pub async fn delete(&self, selected: Option<&str>, prompt: &dyn ConfirmPrompt) -> FormOutcome {
        let Some(username) = selected else {
            return FormOutcome::notice(Notice::error(SELECT_TO_DELETE));
        };

        if !prompt.confirm(&delete_prompt(username)).await {
            log::debug!("Delete of '{username}' cancelled");
            return FormOutcome::nothing();
        }

        match self.api.delete_account(username).await {
            Ok(result) if result.success => {
                log::info!("Deleted account '{username}'");
                FormOutcome {
                    notice: Some(Notice::success(DELETE_SUCCESS)),
                    accounts: self.reload().await,
                    selection: Selection::Clear,
                    ..FormOutcome::nothing()
                }
            }
            Ok(result) => FormOutcome::notice(Notice::error(format!(
                "Error deleting account: {}",
                result.message
            ))),
            Err(e) => FormOutcome::notice(Notice::error(format!("Error deleting account: {e}"))),
        }
    }

    /// Synchronous half of login: the username to log in plus the info
    /// notice to show right away, or the error notice when nothing is selected.
    pub fn begin_login(selected: Option<&str>) -> Result<(String, Notice), Notice> {
        match selected {
            Some(username) if !username.is_empty() => {
                Ok((username.to_string(), Notice::info(LOGGING_IN)))
            }
            _ => Err(Notice::error(SELECT_TO_LOGIN)),
        }
    }

    pub async fn login(&self, username: &str) -> FormOutcome {
        if self.minimize_before_login {
            match self.api.minimize_window().await {
                Ok(result) if !result.success => {
                    log::debug!("Minimize before login skipped: {}", result.message);
                }
                Err(e) => log::debug!("Minimize before login skipped: {e}"),
                Ok(_) => {}
            }
        }

        match self.api.login(username).await {
            Ok(result) if result.success => {
                log::info!("Login for '{username}' succeeded");
                FormOutcome::notice(Notice::success(LOGIN_SUCCESS))
            }
            Ok(result) => {
                FormOutcome::notice(Notice::error(format!("Login failed: {}", result.message)))
            }
            Err(e) => FormOutcome::notice(Notice::error(format!("Login error: {e}"))),
        }
    }

    /// Persist the next speed preset after `current`.
    pub async fn cycle_speed(&self, current: LoginSpeed) -> FormOutcome {
        self.set_speed(current.next()).await
    }

    pub async fn set_speed(&self, speed: LoginSpeed) -> FormOutcome {
        match self.api.set_speed_setting(speed).await {
            Ok(result) if result.success => FormOutcome {
                notice: Some(Notice::success(result.message)),
                speed: Some(speed),
                ..FormOutcome::nothing()
            },
            Ok(result) => FormOutcome::notice(Notice::error(format!(
                "Error saving speed setting: {}",
                result.message
            ))),
            Err(e) => {
                FormOutcome::notice(Notice::error(format!("Error saving speed setting: {e}")))
            }
        }
    }

    pub async fn minimize(&self) -> FormOutcome {
        match self.api.minimize_window().await {
            Ok(result) if result.success => FormOutcome::nothing(),
            Ok(result) => FormOutcome::notice(Notice::error(result.message)),
            Err(e) => FormOutcome::notice(Notice::error(e.to_string())),
        }
    }

    /// Close the host window and end the front-end either way.
    pub async fn close(&self) -> FormOutcome {
        let mut outcome = match self.api.close_window().await {
            Ok(result) if result.success => FormOutcome::nothing(),
            Ok(result) => {
                log::info!("close_window: {}", result.message);
                FormOutcome::notice(Notice::error(result.message))
            }
            Err(e) => {
                log::info!("close_window: {e}");
                FormOutcome::notice(Notice::error(e.to_string()))
            }
        };
        outcome.exit = true;
        outcome
    }
}
