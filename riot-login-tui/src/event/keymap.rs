//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 状态栏上显示的按键名
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::ALT) {
            format!("Alt+{key}")
        } else if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const DISMISS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 焦点
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 操作
    pub const LOGIN: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const SAVE: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const RELOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const CYCLE_SPEED: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const MINIMIZE: KeyBinding = KeyBinding::alt(KeyCode::Char('m'));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(DefaultKeymap::SAVE.label(), "Alt+s");
        assert_eq!(DefaultKeymap::FORCE_QUIT.label(), "Ctrl+c");
        assert_eq!(DefaultKeymap::DISMISS.label(), "Esc");
    }
}
