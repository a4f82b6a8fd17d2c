//! 类型定义模块

mod account;
mod region;
mod response;
mod settings;

pub use account::{Account, AccountDraft, FormFields, FILL_ALL_FIELDS};
pub use region::{default_regions, Region};
pub use response::ActionResult;
pub use settings::LoginSpeed;
