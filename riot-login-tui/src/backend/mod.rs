//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，业务逻辑都在 riot-login-core 中，
//! 这里只提供终端版本需要的协作者。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（config.json）
//!         mod local_host;         // 本地宿主（accounts.json / settings.json）
//!         mod tasks;              // 后台任务调度
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、本地宿主（LocalHost）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端里没有桌面外壳注入的 API。配置 `local_store: true` 时，
//!     LocalHost 充当 HostBridge：
//!         - 账号与速度设置保存在配置目录的 JSON 文件中
//!         - 区域使用固定列表
//!         - login / minimize_window / close_window 返回 Unsupported
//!
//!     在 auto 模式下，Unsupported 的 login 会交给 REST 后端执行。
//!     默认不挂载宿主，auto 模式下所有调用都直接走 REST 后端。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、后台任务（TaskRunner）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据流：
//!         update 层返回 Some(Task)
//!             ↓
//!         app.rs 调用 runner.spawn(task)
//!             ↓
//!         tokio::spawn 中执行 AccountFormController 的对应方法
//!             ↓
//!         结果作为 BackendEvent 经 mpsc 回到主循环
//!             ↓
//!         update 层把结果应用到 AppState
//!
//!     没有请求关联 ID，多个结果按到达顺序应用（后到者生效）。
//!

mod config_service;
mod local_host;
mod tasks;

pub use config_service::{default_config_dir, AppConfig, ConfigService, LocalConfigService, API_URL_ENV};
pub use local_host::build_backend_client;
pub use tasks::{Task, TaskRunner};
