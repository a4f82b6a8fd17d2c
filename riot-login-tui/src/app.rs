//!
//! app.rs
//! 应用主循环
//!
//! 主循环在一个 tokio 任务中运行，用 select! 同时等待三种输入：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!
//!     select! {
//!         按键     => handle_event → AppMessage
//!         后台结果  => AppMessage::Backend(event)
//!         定时器    => AppMessage::Tick               // 通知自动隐藏
//!     }
//!
//!     if let Some(task) = update::update(&mut app, msg) {
//!         runner.spawn(task)                          // 后台执行，不阻塞绘制
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::{Task, TaskRunner};
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    runner: &TaskRunner,
    mut backend_rx: UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    dispatch(app, runner, Task::Bootstrap);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一条消息
        let msg = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(input)) => event::handle_event(&input, app),
                Some(Err(err)) => return Err(err.into()),
                // 输入流结束，终端已不可用
                None => AppMessage::ForceQuit,
            },
            Some(backend_event) = backend_rx.recv() => AppMessage::Backend(backend_event),
            _ = tick.tick() => AppMessage::Tick,
        };

        // 4. 更新状态，必要时启动后台任务
        if let Some(task) = update::update(app, msg) {
            dispatch(app, runner, task);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, runner: &TaskRunner, task: Task) {
    app.pending += 1;
    runner.spawn(task);
}
