//! 账户相关类型定义

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Region assumed when a stored account has none.
const DEFAULT_REGION: &str = "NA";

/// Message surfaced when a required form field is empty.
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// 账户信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// 用户名（唯一键）
    #[serde(default)]
    pub username: String,
    /// 密码（不解析）
    #[serde(default)]
    pub password: String,
    /// 区域代码或显示名称
    #[serde(default = "default_region")]
    pub region: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            region: region.into(),
        }
    }

    /// Label shown in the account selector, e.g. `alice (EUW)`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.username, self.region)
    }
}

/// Validated account values, ready for `save_account`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDraft {
    pub username: String,
    pub password: String,
    pub region: String,
}

/// Raw contents of the account form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub username: String,
    pub password: String,
    pub region: String,
}

impl FormFields {
    /// Fill the form from a stored account.
    pub fn from_account(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            password: account.password.clone(),
            region: account.region.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.region.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty() && self.region.is_empty()
    }

    /// Trim every field and reject the form if any of them ends up empty.
    pub fn to_draft(&self) -> CoreResult<AccountDraft> {
        let username = self.username.trim();
        let password = self.password.trim();
        let region = self.region.trim();

        if username.is_empty() || password.is_empty() || region.is_empty() {
            return Err(CoreError::Validation(FILL_ALL_FIELDS.to_string()));
        }

        Ok(AccountDraft {
            username: username.to_string(),
            password: password.to_string(),
            region: region.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_region_defaults_to_na() {
        let account: Account =
            serde_json::from_str(r#"{"username":"alice","password":"pw"}"#).unwrap();
        assert_eq!(account.region, "NA");
    }

    #[test]
    fn draft_trims_all_fields() {
        let fields = FormFields {
            username: "  alice ".into(),
            password: " pw123 ".into(),
            region: "NA1".into(),
        };
        let draft = fields.to_draft().unwrap();
        assert_eq!(draft.username, "alice");
        assert_eq!(draft.password, "pw123");
        assert_eq!(draft.region, "NA1");
    }

    #[test]
    fn whitespace_only_field_is_rejected() {
        let fields = FormFields {
            username: "alice".into(),
            password: "   ".into(),
            region: "EUW".into(),
        };
        assert_eq!(
            fields.to_draft(),
            Err(CoreError::Validation(FILL_ALL_FIELDS.to_string()))
        );
    }

    #[test]
    fn display_name_includes_region() {
        assert_eq!(Account::new("bob", "x", "KR").display_name(), "bob (KR)");
    }
}
