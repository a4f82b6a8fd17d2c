//! 通知栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use riot_login_core::services::NoticeLevel;

use crate::model::App;
use crate::view::theme::colors;

/// 渲染通知栏；没有通知时留空
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(notice) = app.notifier.current() else {
        return;
    };
    let c = colors();

    let (icon, color) = match notice.level {
        NoticeLevel::Info => ("ℹ", c.info),
        NoticeLevel::Success => ("✔", c.success),
        NoticeLevel::Error => ("✘", c.error),
    };

    let mut spans = vec![
        Span::styled(format!(" {icon} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(notice.message.as_str(), Style::default().fg(color)),
    ];
    // 错误不会自动消失，提示如何关闭
    if !notice.level.auto_dismisses() {
        spans.push(Span::styled("  (Esc to close)", Style::default().fg(c.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
