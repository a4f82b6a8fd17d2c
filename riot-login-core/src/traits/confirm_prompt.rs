//! Awaitable yes/no prompt

use async_trait::async_trait;

/// Modal confirmation the controller awaits before destructive calls.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Show `message` and resolve to `true` on ok, `false` on cancel.
    async fn confirm(&self, message: &str) -> bool;
}
