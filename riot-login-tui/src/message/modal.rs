//! 确认弹窗消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 在 Cancel / OK 之间切换
    ToggleChoice,
    /// 回答当前高亮的按钮
    Submit,
    /// 直接确认（y）
    Accept,
    /// 直接取消（Esc / n）
    Cancel,
}
