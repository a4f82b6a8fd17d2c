//! 事件处理器

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::{App, Focus};

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(key) {
        return AppMessage::ForceQuit;
    }

    // 确认弹窗打开时独占键盘
    if app.dialog.is_visible() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::DISMISS.matches(key) {
        return AppMessage::Dismiss;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(key) {
        return AppMessage::FocusNext;
    }
    // 部分终端发送不带 SHIFT 修饰的 BackTab
    if key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    if let Some(msg) = handle_action_keys(key) {
        return AppMessage::Form(msg);
    }

    match app.focus {
        Focus::AccountList => handle_list_keys(key),
        Focus::Username | Focus::Password => handle_input_keys(key),
        Focus::Region => handle_region_keys(key),
    }
}

/// Alt 快捷键，无论焦点在哪里
fn handle_action_keys(key: &KeyEvent) -> Option<FormMessage> {
    let bindings = [
        (&DefaultKeymap::LOGIN, FormMessage::Login),
        (&DefaultKeymap::SAVE, FormMessage::Save),
        (&DefaultKeymap::DELETE, FormMessage::Delete),
        (&DefaultKeymap::RELOAD, FormMessage::Reload),
        (&DefaultKeymap::CYCLE_SPEED, FormMessage::CycleSpeed),
        (&DefaultKeymap::MINIMIZE, FormMessage::Minimize),
    ];
    bindings
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, msg)| msg)
}

/// 账号列表
fn handle_list_keys(key: &KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Form(FormMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Form(FormMessage::SelectNext),
        KeyCode::Enter => AppMessage::Form(FormMessage::Login),
        _ => AppMessage::Noop,
    }
}

/// 用户名 / 密码输入框
fn handle_input_keys(key: &KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Enter => AppMessage::FocusNext,
        _ => AppMessage::Noop,
    }
}

/// 区域选择
fn handle_region_keys(key: &KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Left => AppMessage::Form(FormMessage::RegionPrevious),
        KeyCode::Down | KeyCode::Right => AppMessage::Form(FormMessage::RegionNext),
        KeyCode::Enter => AppMessage::Form(FormMessage::Save),
        _ => AppMessage::Noop,
    }
}

/// 确认弹窗
fn handle_modal_keys(key: &KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            ModalMessage::ToggleChoice
        }
        KeyCode::Enter => ModalMessage::Submit,
        KeyCode::Char('y' | 'Y') => ModalMessage::Accept,
        KeyCode::Esc | KeyCode::Char('n' | 'N') => ModalMessage::Cancel,
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}
