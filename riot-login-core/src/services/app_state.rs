//! Front-end owned application state

use crate::types::{Account, FormFields, LoginSpeed, Region};

use super::account_form::{FormOutcome, LoadOutcome, Selection};
use super::notification::Notice;

/// Cached account list, regions, speed, selection and form contents.
///
/// The selection is always a username present in `accounts`; replacing the
/// list drops a selection that no longer exists and empties the form with it.
#[derive(Debug, Default)]
pub struct AppState {
    accounts: Vec<Account>,
    regions: Vec<Region>,
    pub speed: LoginSpeed,
    selected: Option<String>,
    pub fields: FormFields,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        let username = self.selected.as_deref()?;
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Position of the selection in `accounts`.
    pub fn selected_index(&self) -> Option<usize> {
        let username = self.selected.as_deref()?;
        self.accounts.iter().position(|a| a.username == username)
    }

    /// Select-change handler: fill the form from the account, or clear both
    /// when `username` is `None` or unknown.
    pub fn select(&mut self, username: Option<&str>) {
        match username.and_then(|u| self.accounts.iter().find(|a| a.username == u)) {
            Some(account) => {
                self.fields = FormFields::from_account(account);
                self.selected = Some(account.username.clone());
            }
            None => {
                self.selected = None;
                self.fields.clear();
            }
        }
    }

    /// Replace the cached list wholesale.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        if self.selected.is_some() && self.selected_account().is_none() {
            log::debug!("Selected account disappeared after reload, clearing form");
            self.selected = None;
            self.fields.clear();
        }
    }

    pub fn set_regions(&mut self, regions: Vec<Region>) {
        self.regions = regions;
    }

    /// Apply a controller outcome and hand back the notice to display.
    pub fn apply(&mut self, outcome: FormOutcome) -> Option<Notice> {
        if let Some(accounts) = outcome.accounts {
            self.set_accounts(accounts);
        }
        if let Some(speed) = outcome.speed {
            self.speed = speed;
        }
        match outcome.selection {
            Selection::Keep => {}
            Selection::Select(username) => self.select(Some(&username)),
            Selection::Clear => self.select(None),
        }
        outcome.notice
    }

    /// Apply the initial fetch; returns one error notice per failed part.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> Vec<Notice> {
        let mut notices = Vec::new();
        match outcome.accounts {
            Ok(accounts) => self.set_accounts(accounts),
            Err(e) => notices.push(Notice::error(format!("Error loading accounts: {e}"))),
        }
        match outcome.regions {
            Ok(regions) => self.set_regions(regions),
            Err(e) => notices.push(Notice::error(format!("Error loading regions: {e}"))),
        }
        match outcome.speed {
            Ok(speed) => self.speed = speed,
            Err(e) => log::warn!("Speed setting unavailable, keeping {}: {e}", self.speed),
        }
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn state_with(accounts: &[(&str, &str)]) -> AppState {
        let mut state = AppState::new();
        state.set_accounts(
            accounts
                .iter()
                .map(|(u, r)| Account::new(*u, "pw", *r))
                .collect(),
        );
        state
    }

    #[test]
    fn select_fills_and_clears_form() {
        let mut state = state_with(&[("alice", "EUW")]);

        state.select(Some("alice"));
        assert_eq!(state.fields.username, "alice");
        assert_eq!(state.fields.region, "EUW");
        assert_eq!(state.selected_index(), Some(0));

        state.select(None);
        assert!(state.fields.is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn unknown_selection_clears() {
        let mut state = state_with(&[("alice", "EUW")]);
        state.select(Some("alice"));
        state.select(Some("mallory"));
        assert!(state.selected().is_none());
        assert!(state.fields.is_empty());
    }

    #[test]
    fn reload_drops_stale_selection() {
        let mut state = state_with(&[("alice", "EUW"), ("bob", "NA")]);
        state.select(Some("alice"));

        state.set_accounts(vec![Account::new("bob", "pw", "NA")]);

        assert!(state.selected().is_none());
        assert!(state.fields.is_empty());
    }

    #[test]
    fn reload_keeps_live_selection() {
        let mut state = state_with(&[("alice", "EUW")]);
        state.select(Some("alice"));

        state.set_accounts(vec![
            Account::new("alice", "pw", "EUW"),
            Account::new("bob", "pw", "NA"),
        ]);

        assert_eq!(state.selected(), Some("alice"));
    }

    #[test]
    fn apply_outcome_updates_everything() {
        let mut state = state_with(&[]);
        let notice = state.apply(FormOutcome {
            notice: Some(Notice::success("ok")),
            accounts: Some(vec![Account::new("alice", "pw", "NA1")]),
            selection: Selection::Select("alice".into()),
            speed: Some(LoginSpeed::Slow),
            exit: false,
        });

        assert_eq!(notice, Some(Notice::success("ok")));
        assert_eq!(state.selected(), Some("alice"));
        assert_eq!(state.fields.region, "NA1");
        assert_eq!(state.speed, LoginSpeed::Slow);
    }

    #[test]
    fn partial_load_failure_yields_notice() {
        let mut state = AppState::new();
        let notices = state.apply_load(LoadOutcome {
            accounts: Ok(vec![Account::new("alice", "pw", "NA")]),
            regions: Err(CoreError::Network("connection refused".into())),
            speed: Ok(LoginSpeed::Fast),
        });

        assert_eq!(state.accounts().len(), 1);
        assert_eq!(state.speed, LoginSpeed::Fast);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message.starts_with("Error loading regions: "));
    }
}
