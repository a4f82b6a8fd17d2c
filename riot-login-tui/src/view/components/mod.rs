//! UI 组件

pub mod account_form;
pub mod account_list;
pub mod confirm;
pub mod notification;
pub mod statusbar;
