//! Riot Auto Login Core Library
//!
//! Front-end logic of the account manager, independent of any UI toolkit:
//! - Dual-transport API client (host bridge with REST fallback)
//! - Account form controller (select / save / delete / login)
//! - Notification and confirmation widget state
//! - Startup bootstrap
//!
//! The host is abstracted through the `HostBridge` trait so the same logic
//! runs behind a desktop shell, a terminal front-end or plain REST.

pub mod error;
pub mod services;
pub mod traits;
pub mod transport;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountFormController, AppState, ConfirmDialog, Notice, NoticeLevel, Notifier};
pub use traits::{AccountApi, ConfirmPrompt, HostBridge, HostClient, WindowControl};
pub use transport::{build_client, RestClient, TransportMode};
