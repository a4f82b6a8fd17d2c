//! API 响应相关类型定义

use serde::{Deserialize, Serialize};

/// Answer of every mutating backend call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionResult {
    /// 是否成功
    pub success: bool,
    /// 消息（失败时原样展示给用户）
    #[serde(default)]
    pub message: String,
}

impl ActionResult {
    /// 创建成功响应
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// 创建失败响应
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
