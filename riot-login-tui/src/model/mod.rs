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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（账号列表 / 用户名 / 密码 / 区域）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,                  // 退出标志
//!         pub focus: Focus,                       // 当前焦点
//!         pub state: AppState,                    // 账号缓存、选择、表单（来自 core）
//!         pub notifier: Notifier,                 // 通知区域（来自 core）
//!         pub dialog: Arc<ConfirmDialog>,         // 确认弹窗（与后台任务共享）
//!         pub confirm_choice: ConfirmChoice,      // 弹窗中高亮的按钮
//!         pub pending: usize,                     // 进行中的后台任务数
//!         ...
//!     }
//!
//!     AppState 保证“选中的账号一定在最近一次加载的列表中”，
//!     重新加载后失效的选择会被清空，表单一起清空。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、确认弹窗
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ConfirmDialog 由后台删除任务打开（confirm().await），
//!     由主循环中的按键回答（accept / cancel）。
//!     View 层通过 dialog.is_visible() 决定是否绘制弹窗，
//!     Event 层据此把按键交给弹窗处理。
//!

mod app;
mod focus;

pub use app::{App, ConfirmChoice};
pub use focus::Focus;
