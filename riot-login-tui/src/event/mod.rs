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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 AppMessage。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     输入来自 crossterm 的 EventStream（在 app.rs 的 select! 中读取），
//!     handle_event 只做翻译，不修改状态。
//!
//!     handle_key_event 的判断顺序：
//!         - Ctrl+C 无条件退出
//!         - 确认弹窗打开时，交给 handle_modal_keys
//!               ←/→/Tab   切换按钮
//!               Enter     回答高亮的按钮
//!               y         确认
//!               Esc / n   取消
//!         - 全局快捷键：Alt+q、Esc、Tab / Shift+Tab
//!         - Alt 操作键：Alt+l 登录、Alt+s 保存、Alt+d 删除、
//!                       Alt+r 刷新、Alt+p 切换速度、Alt+m 最小化
//!         - 按焦点分发：
//!               账号列表  ↑/↓ 选择，Enter 登录
//!               输入框    字符输入，Backspace 删除，Enter 下一个
//!               区域      ↑/↓ 切换，Enter 保存
//!

mod handler;
pub mod keymap;

pub use handler::handle_event;
