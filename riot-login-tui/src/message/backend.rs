//! 后台任务结果

use riot_login_core::services::{FormOutcome, LoadOutcome};

#[derive(Debug)]
pub enum BackendEvent {
    /// 启动加载完成
    Loaded(LoadOutcome),
    /// 某个表单操作完成
    Finished(FormOutcome),
}
