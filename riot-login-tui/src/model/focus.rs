//! 焦点状态定义

/// 可获得焦点的控件，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 左侧账号列表
    #[default]
    AccountList,
    Username,
    Password,
    Region,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::AccountList, Self::Username, Self::Password, Self::Region];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Tab
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Shift+Tab
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
