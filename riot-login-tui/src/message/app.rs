//! 主消息

use super::{BackendEvent, FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 关闭宿主窗口并退出
    Quit,
    /// 立即退出（Ctrl+C）
    ForceQuit,
    /// 焦点移到下一个 / 上一个控件
    FocusNext,
    FocusPrev,
    /// 表单与账号列表的子消息
    Form(FormMessage),
    /// 确认弹窗的子消息
    Modal(ModalMessage),
    /// 后台任务结果
    Backend(BackendEvent),
    /// Esc：关闭通知，没有通知时清空选择
    Dismiss,
    /// 定时器，用于通知自动隐藏
    Tick,
    /// 无操作
    Noop,
}
