//! In-process host bridge Trait

use super::account_api::{AccountApi, WindowControl};

/// API exposed by the enclosing desktop shell.
///
/// A host answers the same calls as the REST backend and additionally owns
/// the window. `wait_ready` must resolve once the shell has finished
/// attaching; the bootstrap waits on it with a deadline.
pub trait HostBridge: AccountApi + WindowControl {
    /// Name used in logs
    fn name(&self) -> &'static str;
}
