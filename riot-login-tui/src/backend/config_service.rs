//! 配置服务

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use riot_login_core::transport::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use riot_login_core::TransportMode;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Environment variable that overrides `api_base_url`.
pub const API_URL_ENV: &str = "RIOT_LOGIN_API_URL";

const CONFIG_FILE: &str = "config.json";

/// 获取配置目录路径
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("riot-auto-login")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub transport: TransportMode,
    pub api_base_url: String,
    pub ready_timeout_ms: u64,
    pub notification_timeout_secs: u64,
    pub minimize_before_login: bool,
    pub request_timeout_secs: u64,
    /// 使用本地 JSON 文件作为宿主，而不是直接访问 REST 后端
    pub local_store: bool,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            transport: TransportMode::Auto,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            ready_timeout_ms: 3000,
            notification_timeout_secs: 5,
            minimize_before_login: true,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            local_store: false,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    pub fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply `RIOT_LOGIN_API_URL` when it is set and non-empty.
    pub fn with_env_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            log::info!("{API_URL_ENV} overrides api_base_url: {url}");
            self.api_base_url = url.trim().to_string();
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务，读写 `<dir>/config.json`
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

impl ConfigService for LocalConfigService {
    /// Missing file: write the defaults so the user has something to edit.
    fn load(&self) -> Result<AppConfig> {
        let path = self.path();
        if !path.exists() {
            let config = AppConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let content = serde_json::to_string_pretty(config)?;
        let path = self.path();
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))
    }
}
