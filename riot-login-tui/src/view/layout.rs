//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 标题栏 + 主内容区 + 通知栏 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(11),   // 主内容区
            Constraint::Length(1), // 通知栏
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏：账号列表 + 表单
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    components::account_list::render(app, frame, columns[0]);
    components::account_form::render(app, frame, columns[1]);
    components::notification::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗在最上层
    components::confirm::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(
        " Riot Auto Login v{}  ·  {}",
        env!("CARGO_PKG_VERSION"),
        app.transport_label
    );
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg)),
        area,
    );
}
