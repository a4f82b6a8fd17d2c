//! Riot Auto Login TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 本地宿主、配置、后台任务 (`backend/`)
//!
//! 账号表单逻辑、通知、确认弹窗和双通道 API 客户端都来自 `riot-login-core`。
//!
//!
//! main.rs 的执行顺序：
//!
//!     init_logging()           // util/logging.rs，日志写文件
//!     load config              // backend/config_service.rs
//!     build_backend_client()   // REST 后端；local_store 时 LocalHost 作为宿主
//!     init_terminal()          // util/terminal.rs
//!     app::run()               // app.rs 主循环
//!     restore_terminal()       // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use riot_login_core::services::AccountFormController;
use riot_login_core::ConfirmDialog;
use tokio::sync::mpsc;

use backend::{
    build_backend_client, default_config_dir, ConfigService, LocalConfigService, TaskRunner,
};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let config_dir = default_config_dir();

    // 1. 日志（写文件，必须先于其他初始化以记录它们）
    let _log_guard = init_logging(&config_dir)?;
    tracing::info!("Starting Riot Auto Login TUI v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config = LocalConfigService::new(&config_dir)
        .load()
        .context("loading configuration")?
        .with_env_override(std::env::var(backend::API_URL_ENV).ok());
    view::theme::set_theme(config.theme);
    tracing::info!(?config, "Configuration loaded");

    // 3. 后端
    let client =
        build_backend_client(&config, &config_dir).context("building backend client")?;
    let transport_label = if config.local_store {
        format!("{:?} · local", config.transport)
    } else {
        format!("{:?} · {}", config.transport, config.api_base_url)
    };

    let controller = Arc::new(AccountFormController::new(
        client,
        config.minimize_before_login,
    ));
    let dialog = Arc::new(ConfirmDialog::new());
    let (tx, rx) = mpsc::unbounded_channel();
    let runner = TaskRunner::new(controller, dialog.clone(), config.ready_timeout(), tx);

    let mut app = model::App::new(dialog, config.notification_timeout(), transport_label);

    // 4. 终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 主循环
    let result = app::run(&mut terminal, &mut app, &runner, rx).await;

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref err) = result {
        tracing::error!("Exited with error: {err:#}");
    } else {
        tracing::info!("Exited");
    }
    result
}
