//! 账号列表组件

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::{App, Focus};
use crate::view::theme::{colors, Styles};

/// 渲染账号列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus == Focus::AccountList;

    let block = Block::default()
        .title(format!(" Accounts ({}) ", app.state.accounts().len()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    if app.state.accounts().is_empty() {
        let empty = List::new([ListItem::new("  No saved accounts")])
            .style(Style::default().fg(c.muted))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .accounts()
        .iter()
        .map(|account| ListItem::new(format!(" {}", account.display_name())))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(c.fg))
        .highlight_style(Styles::selected())
        .highlight_symbol("▶");

    let mut state = ListState::default().with_selected(app.state.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}
