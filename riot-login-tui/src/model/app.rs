//! 主应用状态

use std::sync::Arc;
use std::time::Duration;

use riot_login_core::services::{AppState, ConfirmDialog, Notifier};

use super::Focus;

/// 确认弹窗中高亮的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Cancel,
    Ok,
}

impl ConfirmChoice {
    pub fn toggle(self) -> Self {
        match self {
            Self::Cancel => Self::Ok,
            Self::Ok => Self::Cancel,
        }
    }
}

/// 应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 当前焦点
    pub focus: Focus,
    /// 账号缓存、选择和表单内容
    pub state: AppState,
    /// 通知区域
    pub notifier: Notifier,
    /// 与后台删除任务共享的确认弹窗
    pub dialog: Arc<ConfirmDialog>,
    pub confirm_choice: ConfirmChoice,
    /// 进行中的后台任务数
    pub pending: usize,
    /// 标题栏显示的传输方式
    pub transport_label: String,
}

impl App {
    pub fn new(
        dialog: Arc<ConfirmDialog>,
        notification_timeout: Duration,
        transport_label: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            state: AppState::new(),
            notifier: Notifier::new(notification_timeout),
            dialog,
            confirm_choice: ConfirmChoice::default(),
            pending: 0,
            transport_label: transport_label.into(),
        }
    }

    /// 有后台任务在执行；等待用户确认的删除不算
    pub fn is_busy(&self) -> bool {
        self.pending > 0 && !self.dialog.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use riot_login_core::ConfirmPrompt;

    use super::*;

    #[tokio::test]
    async fn waiting_for_confirmation_is_not_busy() {
        let dialog = Arc::new(ConfirmDialog::new());
        let mut app = App::new(dialog.clone(), Duration::from_secs(5), "test");
        app.pending = 1;
        assert!(app.is_busy());

        let asking = tokio::spawn({
            let dialog = dialog.clone();
            async move { dialog.confirm("Delete?").await }
        });
        while !dialog.is_visible() {
            tokio::task::yield_now().await;
        }
        assert!(!app.is_busy());

        assert!(dialog.accept());
        assert!(asking.await.unwrap());
        assert!(app.is_busy());
    }
}
