//! Account backend abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Account, AccountDraft, ActionResult, LoginSpeed, Region};

/// Operations every transport can carry.
///
/// Implementations:
/// - `BridgeClient`: in-process host bridge
/// - `RestClient`: local HTTP endpoint
/// - `FallbackClient`: bridge first, REST on failure
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Resolve once the transport can take calls.
    ///
    /// Returns `false` when it never will (e.g. no host attached).
    async fn wait_ready(&self) -> bool {
        true
    }

    /// Get all accounts
    async fn list_accounts(&self) -> CoreResult<Vec<Account>>;

    /// Get the selectable regions
    async fn list_regions(&self) -> CoreResult<Vec<Region>>;

    /// Save account (new or update, keyed by username)
    ///
    /// # Arguments
    /// * `draft` - validated account values
    async fn save_account(&self, draft: &AccountDraft) -> CoreResult<ActionResult>;

    /// Delete account
    ///
    /// # Arguments
    /// * `username` - account key
    async fn delete_account(&self, username: &str) -> CoreResult<ActionResult>;

    /// Run the login automation for a stored account
    async fn login(&self, username: &str) -> CoreResult<ActionResult>;

    /// Current login speed preset
    async fn speed_setting(&self) -> CoreResult<LoginSpeed>;

    /// Store a new login speed preset
    async fn set_speed_setting(&self, speed: LoginSpeed) -> CoreResult<ActionResult>;
}

/// Host window control. Only the desktop shell can honour these.
#[async_trait]
pub trait WindowControl: Send + Sync {
    async fn minimize_window(&self) -> CoreResult<ActionResult>;

    async fn close_window(&self) -> CoreResult<ActionResult>;
}

/// Everything the form controller needs from its backend.
pub trait HostClient: AccountApi + WindowControl {}

impl<T: AccountApi + WindowControl + ?Sized> HostClient for T {}
