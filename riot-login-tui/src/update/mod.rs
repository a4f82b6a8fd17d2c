//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ FormMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ ModalMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          │ Backend   │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  riot-login-core  │           │
//！│                                           │ (controller/API)  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 AppMessage，修改 Model。
//! 需要调用后端的操作不在这里执行，而是返回一个 Task，
//! 由 app.rs 交给 TaskRunner 在后台运行。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;           // 账号列表与表单
//!         mod modal;          // 确认弹窗
//!
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {
//!         match msg {
//!             AppMessage::Form(m)     => form::update(app, m),
//!             AppMessage::Modal(m)    => modal::update(app, m),
//!             AppMessage::Backend(e)  => 把结果应用到 AppState，显示通知
//!             AppMessage::Tick        => 通知自动隐藏
//!             ...
//!         }
//!     }
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod modal;

use std::time::Instant;

use riot_login_core::services::Notice;

use crate::backend::Task;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Task> {
    match msg {
        AppMessage::Quit => Some(Task::Close),

        AppMessage::ForceQuit => {
            app.should_quit = true;
            None
        }

        AppMessage::FocusNext => {
            app.focus = app.focus.next();
            None
        }

        AppMessage::FocusPrev => {
            app.focus = app.focus.prev();
            None
        }

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
            None
        }

        AppMessage::Backend(event) => {
            app.pending = app.pending.saturating_sub(1);
            apply_backend_event(app, event);
            None
        }

        AppMessage::Dismiss => {
            if app.notifier.is_visible() {
                app.notifier.dismiss();
            } else {
                app.state.select(None);
            }
            None
        }

        AppMessage::Tick => {
            app.notifier.tick(Instant::now());
            None
        }

        AppMessage::Noop => None,
    }
}

fn apply_backend_event(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Loaded(outcome) => {
            // 多个加载错误时只有最后一条留在通知区域
            for notice in app.state.apply_load(outcome) {
                notify(app, notice);
            }
        }
        BackendEvent::Finished(outcome) => {
            let exit = outcome.exit;
            if let Some(notice) = app.state.apply(outcome) {
                notify(app, notice);
            }
            if exit {
                app.should_quit = true;
            }
        }
    }
}

fn notify(app: &mut App, notice: Notice) {
    app.notifier.show(notice, Instant::now());
}
