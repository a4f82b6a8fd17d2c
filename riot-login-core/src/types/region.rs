//! 区域类型定义

use serde::{Deserialize, Serialize};

/// Selectable server/cluster identifier.
///
/// Backends answer either `{"code": "EUW", "name": "Europe West"}` or a bare
/// `"EUW"`; both decode into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RegionRepr")]
pub struct Region {
    pub code: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RegionRepr {
    Full {
        code: String,
        #[serde(default)]
        name: Option<String>,
    },
    Code(String),
}

impl From<RegionRepr> for Region {
    fn from(repr: RegionRepr) -> Self {
        match repr {
            RegionRepr::Full {
                code,
                name: Some(name),
            } => Self { code, name },
            RegionRepr::Full { code, name: None } | RegionRepr::Code(code) => Self::from_code(code),
        }
    }
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Region whose display name is its code.
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
        }
    }

    /// Whether an account's stored region refers to this entry.
    pub fn matches(&self, value: &str) -> bool {
        self.code == value || self.name == value
    }
}

/// Region codes offered when the backend has no list of its own.
pub fn default_regions() -> Vec<Region> {
    [
        "NA", "EUW", "EUNE", "PBE", "KR", "BR", "LAN", "LAS", "OCE", "TR", "RU", "JP", "PH", "SG",
        "TW", "VN", "TH", "HK", "CN", "SEA",
    ]
    .into_iter()
    .map(Region::from_code)
    .collect()
}
