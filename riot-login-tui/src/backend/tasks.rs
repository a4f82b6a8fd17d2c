//! 后台任务调度
//!
//! Update 层只描述要做什么（`Task`），由 `TaskRunner` 在 tokio 任务中调用
//! `AccountFormController`，结果通过 channel 以 `BackendEvent` 送回主循环。

use std::sync::Arc;
use std::time::Duration;

use riot_login_core::services::{bootstrap, AccountFormController};
use riot_login_core::types::{FormFields, LoginSpeed};
use riot_login_core::ConfirmDialog;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::BackendEvent;

/// 一次后台调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// 启动时：等待宿主就绪后加载账号、区域和速度
    Bootstrap,
    Reload,
    Save(FormFields),
    /// 需要确认的删除，`None` 表示未选中账号
    Delete(Option<String>),
    Login(String),
    CycleSpeed(LoginSpeed),
    Minimize,
    Close,
}

/// 在 tokio 任务中执行 `Task`
#[derive(Clone)]
pub struct TaskRunner {
    controller: Arc<AccountFormController>,
    dialog: Arc<ConfirmDialog>,
    ready_timeout: Duration,
    tx: UnboundedSender<BackendEvent>,
}

impl TaskRunner {
    pub fn new(
        controller: Arc<AccountFormController>,
        dialog: Arc<ConfirmDialog>,
        ready_timeout: Duration,
        tx: UnboundedSender<BackendEvent>,
    ) -> Self {
        Self {
            controller,
            dialog,
            ready_timeout,
            tx,
        }
    }

    pub fn spawn(&self, task: Task) {
        log::debug!("Spawning backend task: {}", task_name(&task));
        let runner = self.clone();
        tokio::spawn(async move {
            let event = runner.run(task).await;
            // 主循环已退出时丢弃结果
            let _ = runner.tx.send(event);
        });
    }

    async fn run(&self, task: Task) -> BackendEvent {
        let controller = &self.controller;
        match task {
            Task::Bootstrap => {
                BackendEvent::Loaded(bootstrap(controller, self.ready_timeout).await)
            }
            Task::Reload => BackendEvent::Finished(controller.refresh().await),
            Task::Save(fields) => BackendEvent::Finished(controller.save(&fields).await),
            Task::Delete(selected) => BackendEvent::Finished(
                controller
                    .delete(selected.as_deref(), self.dialog.as_ref())
                    .await,
            ),
            Task::Login(username) => BackendEvent::Finished(controller.login(&username).await),
            Task::CycleSpeed(current) => {
                BackendEvent::Finished(controller.cycle_speed(current).await)
            }
            Task::Minimize => BackendEvent::Finished(controller.minimize().await),
            Task::Close => BackendEvent::Finished(controller.close().await),
        }
    }
}

fn task_name(task: &Task) -> &'static str {
    match task {
        Task::Bootstrap => "bootstrap",
        Task::Reload => "reload",
        Task::Save(_) => "save",
        Task::Delete(_) => "delete",
        Task::Login(_) => "login",
        Task::CycleSpeed(_) => "cycle_speed",
        Task::Minimize => "minimize",
        Task::Close => "close",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::local_host::LocalHost;
    use riot_login_core::services::Selection;
    use riot_login_core::HostClient;
    use tokio::sync::mpsc;

    fn runner(dir: &std::path::Path) -> (TaskRunner, mpsc::UnboundedReceiver<BackendEvent>) {
        let host: Arc<dyn HostClient> = Arc::new(LocalHost::new(dir));
        let controller = Arc::new(AccountFormController::new(host, false));
        let (tx, rx) = mpsc::unbounded_channel();
        (
            TaskRunner::new(
                controller,
                Arc::new(ConfirmDialog::new()),
                Duration::from_millis(100),
                tx,
            ),
            rx,
        )
    }

    #[tokio::test]
    async fn save_task_reports_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let (runner, mut rx) = runner(dir.path());

        runner.spawn(Task::Save(FormFields {
            username: "alice".into(),
            password: "pw".into(),
            region: "EUW".into(),
        }));

        match rx.recv().await.unwrap() {
            BackendEvent::Finished(outcome) => {
                assert_eq!(outcome.selection, Selection::Select("alice".into()));
            }
            BackendEvent::Loaded(_) => panic!("unexpected load event"),
        }
    }

    #[tokio::test]
    async fn bootstrap_task_loads_regions() {
        let dir = tempfile::tempdir().unwrap();
        let (runner, mut rx) = runner(dir.path());

        runner.spawn(Task::Bootstrap);

        match rx.recv().await.unwrap() {
            BackendEvent::Loaded(outcome) => assert_eq!(outcome.regions.unwrap().len(), 20),
            BackendEvent::Finished(_) => panic!("unexpected form event"),
        }
    }
}
