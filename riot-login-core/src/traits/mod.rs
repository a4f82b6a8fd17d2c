//! Transport abstraction trait definition

mod account_api;
mod confirm_prompt;
mod host_bridge;

pub use account_api::{AccountApi, HostClient, WindowControl};
pub use confirm_prompt::ConfirmPrompt;
pub use host_bridge::HostBridge;
