//! 账号表单消息

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    // 账号列表
    SelectPrevious,
    SelectNext,

    // 输入框
    Input(char),
    Backspace,

    // 区域选择
    RegionPrevious,
    RegionNext,

    // 操作
    Save,
    Delete,
    Login,
    Reload,
    CycleSpeed,
    Minimize,
}
