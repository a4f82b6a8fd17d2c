//! 前端业务逻辑服务层
//!
//! - `AccountFormController`: save / delete / login / speed / window actions
//! - `AppState`: cached data and selection owned by the front-end
//! - `Notifier` / `ConfirmDialog`: notification and confirmation widgets
//! - `bootstrap`: readiness wait plus initial load

mod account_form;
mod app_state;
mod bootstrap;
mod confirm_dialog;
mod notification;

pub use account_form::{
    delete_prompt, AccountFormController, FormOutcome, LoadOutcome, Selection, DELETE_SUCCESS,
    LOGGING_IN, LOGIN_SUCCESS, SAVE_SUCCESS, SELECT_TO_DELETE, SELECT_TO_LOGIN,
};
pub use app_state::AppState;
pub use bootstrap::{bootstrap, DEFAULT_READY_TIMEOUT};
pub use confirm_dialog::ConfirmDialog;
pub use notification::{Notice, NoticeLevel, Notifier, DEFAULT_AUTO_DISMISS};
