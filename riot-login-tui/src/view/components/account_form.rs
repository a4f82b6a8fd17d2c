//! 账号表单组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// 渲染表单：用户名、密码、区域
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let title = match app.state.selected() {
        Some(username) => format!(" Edit \"{username}\" "),
        None => " New Account ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus != Focus::AccountList));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 用户名
            Constraint::Length(3), // 密码
            Constraint::Length(3), // 区域
            Constraint::Min(0),
        ])
        .split(inner);

    let fields = &app.state.fields;
    render_input(frame, rows[0], "Username", &fields.username, app.focus == Focus::Username);

    // 密码不回显
    let masked = "•".repeat(fields.password.chars().count());
    render_input(frame, rows[1], "Password", &masked, app.focus == Focus::Password);

    render_region(app, frame, rows[2]);
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    // 内容超出宽度时只显示末尾
    let width = usize::from(inner.width.saturating_sub(1));
    let visible = tail_fitting(value, width);

    frame.render_widget(
        Paragraph::new(visible).style(Style::default().fg(colors().fg)).block(block),
        area,
    );

    if focused {
        let offset = u16::try_from(visible.width()).unwrap_or(inner.width);
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

fn render_region(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == Focus::Region;
    let value = app.state.fields.region.as_str();

    // 优先显示区域名称
    let label = app
        .state
        .regions()
        .iter()
        .find(|r| r.matches(value))
        .map_or(value, |r| r.name.as_str());

    let text = if value.is_empty() {
        Line::from(Span::styled("Select a region (↑/↓)", Style::default().fg(c.muted)))
    } else if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(c.highlight)),
            Span::styled(label.to_string(), Style::default().fg(c.fg)),
            Span::styled(" ▶", Style::default().fg(c.highlight)),
        ])
    } else {
        Line::from(Span::styled(label.to_string(), Style::default().fg(c.fg)))
    };

    let block = Block::default()
        .title(" Region ")
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// 取 `value` 末尾不超过 `width` 列的部分
fn tail_fitting(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut start = value.len();
    let mut used = 0;
    for (idx, ch) in value.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fitting_keeps_end_of_long_input() {
        assert_eq!(tail_fitting("alice", 10), "alice");
        assert_eq!(tail_fitting("abcdefgh", 3), "fgh");
        assert_eq!(tail_fitting("名字很长", 4), "很长");
    }
}
