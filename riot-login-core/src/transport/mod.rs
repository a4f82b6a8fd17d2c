//! Transports behind `HostClient`
//!
//! - `BridgeClient`: the in-process host API
//! - `RestClient`: HTTP against the fixed local endpoint
//! - `FallbackClient`: bridge first, REST once on failure
//!
//! `build_client` picks the combination from a `TransportMode`.

mod bridge;
mod fallback;
mod http;
mod rest;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::traits::{HostBridge, HostClient};

pub use bridge::BridgeClient;
pub use fallback::FallbackClient;
pub use http::HttpUtils;
pub use rest::{RestClient, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};

/// Result message for window calls no transport can honour.
pub const WINDOW_CONTROL_UNAVAILABLE: &str = "Window control is not available";

/// Which backend(s) the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Host bridge, REST on failure
    #[default]
    Auto,
    /// Host bridge only
    Bridge,
    /// REST only
    Rest,
}

/// Assemble the client for `mode`.
///
/// `host` may be `None` (no shell attached); in `Auto` mode that simply
/// routes every data call to REST.
pub fn build_client(
    mode: TransportMode,
    host: Option<Arc<dyn HostBridge>>,
    rest: RestClient,
) -> Arc<dyn HostClient> {
    log::info!(
        "Transport mode: {mode:?} (host: {}, REST: {})",
        host.as_ref().map_or("none", |h| h.name()),
        rest.base_url()
    );

    match mode {
        TransportMode::Auto => Arc::new(FallbackClient::new(
            Arc::new(BridgeClient::from_option(host)),
            Some(Arc::new(rest)),
        )),
        TransportMode::Bridge => Arc::new(FallbackClient::new(
            Arc::new(BridgeClient::from_option(host)),
            None,
        )),
        TransportMode::Rest => Arc::new(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockHost;
    use crate::types::Account;

    #[tokio::test]
    async fn bridge_mode_reports_window_failure_as_result() {
        let host: Arc<dyn HostBridge> = Arc::new(MockHost::new().without_window());
        let rest = RestClient::new(DEFAULT_BASE_URL).unwrap();
        let client = build_client(TransportMode::Bridge, Some(host), rest);

        let result = client.minimize_window().await.unwrap();
        assert!(!result.success);
        assert_eq!(result.message, WINDOW_CONTROL_UNAVAILABLE);
    }

    #[tokio::test]
    async fn auto_mode_uses_attached_host() {
        let host: Arc<dyn HostBridge> =
            Arc::new(MockHost::with_accounts(vec![Account::new("alice", "pw", "NA")]));
        let rest = RestClient::new("http://127.0.0.1:9").unwrap();
        let client = build_client(TransportMode::Auto, Some(host), rest);

        assert!(client.wait_ready().await);
        assert_eq!(client.list_accounts().await.unwrap().len(), 1);
    }

    #[test]
    fn mode_is_lowercase_on_the_wire() {
        let mode: TransportMode = serde_json::from_str("\"rest\"").unwrap();
        assert_eq!(mode, TransportMode::Rest);
    }
}
