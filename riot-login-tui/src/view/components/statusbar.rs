//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::DefaultKeymap;
use crate::model::{App, Focus};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key.clone(), Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("Speed: {}", app.state.speed),
        Style::default().fg(Color::White),
    ));

    if app.is_busy() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Working...", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    if app.dialog.is_visible() {
        return vec![
            ("←→".to_string(), "Choose"),
            ("Enter".to_string(), "Answer"),
            ("y/n".to_string(), "Yes/No"),
            ("Esc".to_string(), "Cancel"),
        ];
    }

    let mut hints = vec![("Tab".to_string(), "Focus")];
    match app.focus {
        Focus::AccountList => {
            hints.push(("↑↓".to_string(), "Select"));
            hints.push(("Enter".to_string(), "Login"));
        }
        Focus::Username | Focus::Password => {}
        Focus::Region => hints.push(("↑↓".to_string(), "Region")),
    }
    hints.extend([
        (DefaultKeymap::SAVE.label(), "Save"),
        (DefaultKeymap::DELETE.label(), "Delete"),
        (DefaultKeymap::LOGIN.label(), "Login"),
        (DefaultKeymap::RELOAD.label(), "Reload"),
        (DefaultKeymap::CYCLE_SPEED.label(), "Speed"),
        (DefaultKeymap::MINIMIZE.label(), "Minimize"),
        (DefaultKeymap::QUIT.label(), "Quit"),
    ]);
    hints
}
