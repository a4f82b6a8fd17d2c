//! Startup sequence: wait for the host, then fetch initial data

use std::time::Duration;

use super::account_form::{AccountFormController, LoadOutcome};

/// How long startup waits for the host bridge before loading anyway.
pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_millis(3000);

/// Wait (bounded) for the transport to report ready, then run the initial
/// fetch of accounts, regions and login speed.
///
/// A host that never becomes ready does not block startup: the load still
/// runs and whatever fails shows up in the `LoadOutcome`.
pub async fn bootstrap(controller: &AccountFormController, ready_timeout: Duration) -> LoadOutcome {
    match tokio::time::timeout(ready_timeout, controller.api().wait_ready()).await {
        Ok(true) => log::info!("Backend ready"),
        Ok(false) => log::warn!("Backend reported not ready, loading anyway"),
        Err(_) => log::warn!(
            "Backend not ready after {}ms, loading anyway",
            ready_timeout.as_millis()
        ),
    }
    controller.load().await
}
