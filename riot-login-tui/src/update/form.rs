//! 账号列表与表单的状态更新

use riot_login_core::services::AccountFormController;

use crate::backend::Task;
use crate::message::FormMessage;
use crate::model::{App, ConfirmChoice, Focus};

pub fn update(app: &mut App, msg: FormMessage) -> Option<Task> {
    match msg {
        FormMessage::SelectPrevious => {
            move_selection(app, -1);
            None
        }
        FormMessage::SelectNext => {
            move_selection(app, 1);
            None
        }

        FormMessage::Input(c) => {
            if let Some(field) = focused_text(app) {
                field.push(c);
            }
            None
        }
        FormMessage::Backspace => {
            if let Some(field) = focused_text(app) {
                field.pop();
            }
            None
        }

        FormMessage::RegionPrevious => {
            cycle_region(app, -1);
            None
        }
        FormMessage::RegionNext => {
            cycle_region(app, 1);
            None
        }

        FormMessage::Save => Some(Task::Save(app.state.fields.clone())),
        FormMessage::Delete => {
            app.confirm_choice = ConfirmChoice::default();
            Some(Task::Delete(app.state.selected().map(str::to_string)))
        }
        FormMessage::Login => match AccountFormController::begin_login(app.state.selected()) {
            Ok((username, notice)) => {
                super::notify(app, notice);
                Some(Task::Login(username))
            }
            Err(notice) => {
                super::notify(app, notice);
                None
            }
        },
        FormMessage::Reload => Some(Task::Reload),
        FormMessage::CycleSpeed => Some(Task::CycleSpeed(app.state.speed)),
        FormMessage::Minimize => Some(Task::Minimize),
    }
}

fn focused_text(app: &mut App) -> Option<&mut String> {
    match app.focus {
        Focus::Username => Some(&mut app.state.fields.username),
        Focus::Password => Some(&mut app.state.fields.password),
        Focus::AccountList | Focus::Region => None,
    }
}

/// ↑/↓ 改变选择，等同于下拉框的 change 事件
fn move_selection(app: &mut App, delta: isize) {
    let len = app.state.accounts().len();
    if len == 0 {
        return;
    }
    let next = match app.state.selected_index() {
        Some(current) => current.saturating_add_signed(delta).min(len - 1),
        None if delta < 0 => len - 1,
        None => 0,
    };
    let username = app.state.accounts()[next].username.clone();
    app.state.select(Some(&username));
}

/// 在区域列表中循环切换；当前值不在列表中时从头开始
fn cycle_region(app: &mut App, delta: isize) {
    let regions = app.state.regions();
    if regions.is_empty() {
        return;
    }
    let len = regions.len();
    let current = regions
        .iter()
        .position(|r| r.matches(&app.state.fields.region));
    let next = match current {
        Some(i) => (i + len).saturating_add_signed(delta) % len,
        None if delta < 0 => len - 1,
        None => 0,
    };
    let code = regions[next].code.clone();
    app.state.fields.region = code;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use riot_login_core::services::{NoticeLevel, LOGGING_IN, SELECT_TO_LOGIN};
    use riot_login_core::types::{Account, FormFields, Region};
    use riot_login_core::ConfirmDialog;

    use super::*;

    fn app_with(accounts: &[&str]) -> App {
        let mut app = App::new(Arc::new(ConfirmDialog::new()), Duration::from_secs(5), "test");
        app.state.set_accounts(
            accounts
                .iter()
                .map(|u| Account::new(*u, "pw", "NA"))
                .collect(),
        );
        app.state.set_regions(vec![
            Region::from_code("NA"),
            Region::from_code("EUW"),
            Region::new("KR", "Korea"),
        ]);
        app
    }

    #[test]
    fn arrows_select_and_fill_form() {
        let mut app = app_with(&["alice", "bob"]);

        update(&mut app, FormMessage::SelectNext);
        assert_eq!(app.state.selected(), Some("alice"));
        assert_eq!(app.state.fields.username, "alice");

        update(&mut app, FormMessage::SelectNext);
        update(&mut app, FormMessage::SelectNext);
        assert_eq!(app.state.selected(), Some("bob"));

        update(&mut app, FormMessage::SelectPrevious);
        assert_eq!(app.state.selected(), Some("alice"));
    }

    #[test]
    fn input_edits_focused_field_only() {
        let mut app = app_with(&[]);
        app.focus = Focus::Password;

        update(&mut app, FormMessage::Input('p'));
        update(&mut app, FormMessage::Input('w'));
        update(&mut app, FormMessage::Backspace);

        assert_eq!(app.state.fields.password, "p");
        assert!(app.state.fields.username.is_empty());
    }

    #[test]
    fn region_cycles_and_matches_by_name() {
        let mut app = app_with(&[]);
        app.state.fields.region = "Korea".into();

        update(&mut app, FormMessage::RegionNext);
        assert_eq!(app.state.fields.region, "NA");

        update(&mut app, FormMessage::RegionPrevious);
        assert_eq!(app.state.fields.region, "KR");
    }

    #[test]
    fn login_without_selection_shows_error_and_spawns_nothing() {
        let mut app = app_with(&["alice"]);

        let task = update(&mut app, FormMessage::Login);

        assert!(task.is_none());
        let notice = app.notifier.current().unwrap();
        assert_eq!(notice.message, SELECT_TO_LOGIN);
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn login_with_selection_shows_progress() {
        let mut app = app_with(&["alice"]);
        app.state.select(Some("alice"));

        let task = update(&mut app, FormMessage::Login);

        assert_eq!(task, Some(Task::Login("alice".into())));
        assert_eq!(app.notifier.current().unwrap().message, LOGGING_IN);
    }

    #[test]
    fn save_and_delete_carry_current_form() {
        let mut app = app_with(&["alice"]);
        app.state.select(Some("alice"));
        app.confirm_choice = ConfirmChoice::Ok;

        assert_eq!(
            update(&mut app, FormMessage::Save),
            Some(Task::Save(FormFields {
                username: "alice".into(),
                password: "pw".into(),
                region: "NA".into(),
            }))
        );
        assert_eq!(
            update(&mut app, FormMessage::Delete),
            Some(Task::Delete(Some("alice".into())))
        );
        assert_eq!(app.confirm_choice, ConfirmChoice::Cancel);
    }
}
