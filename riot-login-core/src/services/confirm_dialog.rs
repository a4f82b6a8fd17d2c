//! Confirmation dialog shared between the UI and the controller

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::traits::ConfirmPrompt;

struct Pending {
    message: String,
    responder: oneshot::Sender<bool>,
}

/// Yes/no dialog the controller awaits and the UI answers.
///
/// Every display cycle resolves exactly once: `accept` → `true`,
/// `cancel` → `false`. A prompt that is replaced by a newer one, or whose
/// dialog goes away, resolves to `false`.
#[derive(Default)]
pub struct ConfirmDialog {
    pending: Mutex<Option<Pending>>,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_visible(&self) -> bool {
        self.slot().is_some()
    }

    /// Text of the visible prompt.
    pub fn message(&self) -> Option<String> {
        self.slot().as_ref().map(|p| p.message.clone())
    }

    /// Ok button. Returns `false` when no prompt was visible.
    pub fn accept(&self) -> bool {
        self.resolve(true)
    }

    /// Cancel button. Returns `false` when no prompt was visible.
    pub fn cancel(&self) -> bool {
        self.resolve(false)
    }

    fn resolve(&self, answer: bool) -> bool {
        let Some(pending) = self.slot().take() else {
            return false;
        };
        // The awaiting side may have been dropped; the cycle still ends here.
        let _ = pending.responder.send(answer);
        true
    }
}

#[async_trait]
impl ConfirmPrompt for ConfirmDialog {
    async fn confirm(&self, message: &str) -> bool {
        let (responder, answer) = oneshot::channel();

        let previous = self.slot().replace(Pending {
            message: message.to_string(),
            responder,
        });
        if let Some(previous) = previous {
            log::debug!("confirm: replacing unanswered prompt \"{}\"", previous.message);
            let _ = previous.responder.send(false);
        }

        answer.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    async fn wait_until_visible(dialog: &ConfirmDialog) {
        while !dialog.is_visible() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn accept_resolves_true() {
        let dialog = Arc::new(ConfirmDialog::new());
        let asking = tokio::spawn({
            let dialog = dialog.clone();
            async move { dialog.confirm("Delete?").await }
        });

        wait_until_visible(&dialog).await;
        assert_eq!(dialog.message().as_deref(), Some("Delete?"));
        assert!(dialog.accept());

        assert!(asking.await.unwrap());
        assert!(!dialog.is_visible());
    }

    #[tokio::test]
    async fn cancel_resolves_false_and_only_once() {
        let dialog = Arc::new(ConfirmDialog::new());
        let asking = tokio::spawn({
            let dialog = dialog.clone();
            async move { dialog.confirm("Delete?").await }
        });

        wait_until_visible(&dialog).await;
        assert!(dialog.cancel());
        assert!(!dialog.accept(), "second answer must not resolve anything");

        assert!(!asking.await.unwrap());
    }

    #[tokio::test]
    async fn newer_prompt_cancels_older_one() {
        let dialog = Arc::new(ConfirmDialog::new());
        let first = tokio::spawn({
            let dialog = dialog.clone();
            async move { dialog.confirm("first").await }
        });
        wait_until_visible(&dialog).await;

        let second = tokio::spawn({
            let dialog = dialog.clone();
            async move { dialog.confirm("second").await }
        });

        assert!(!first.await.unwrap());
        wait_until_visible(&dialog).await;
        assert_eq!(dialog.message().as_deref(), Some("second"));
        assert!(dialog.accept());
        assert!(second.await.unwrap());
    }

    #[test]
    fn answering_without_prompt_is_a_no_op() {
        let dialog = ConfirmDialog::new();
        assert!(!dialog.accept());
        assert!(!dialog.cancel());
    }
}
