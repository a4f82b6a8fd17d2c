//! 登录速度设置

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Pacing preset used by the host's login automation.
///
/// On the wire this is the index `0 | 1 | 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LoginSpeed {
    Slow,
    #[default]
    Default,
    Fast,
}

impl LoginSpeed {
    pub const ALL: [Self; 3] = [Self::Slow, Self::Default, Self::Fast];

    pub fn name(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Default => "Default",
            Self::Fast => "Fast",
        }
    }

    /// Next preset, wrapping from `Fast` back to `Slow`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Default,
            Self::Default => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }
}

impl fmt::Display for LoginSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LoginSpeed> for u8 {
    fn from(speed: LoginSpeed) -> Self {
        match speed {
            LoginSpeed::Slow => 0,
            LoginSpeed::Default => 1,
            LoginSpeed::Fast => 2,
        }
    }
}

impl TryFrom<u8> for LoginSpeed {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CoreError::Validation(format!("Invalid speed setting: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_is_index() {
        assert_eq!(serde_json::to_string(&LoginSpeed::Fast).unwrap(), "2");
        let speed: LoginSpeed = serde_json::from_str("0").unwrap();
        assert_eq!(speed, LoginSpeed::Slow);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(serde_json::from_str::<LoginSpeed>("3").is_err());
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(LoginSpeed::Fast.next(), LoginSpeed::Slow);
        assert_eq!(LoginSpeed::Slow.next(), LoginSpeed::Default);
    }
}
