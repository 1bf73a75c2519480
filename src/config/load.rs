use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 工作目錄中的設定檔
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    /// 讀取設定，檔案不存在或無法解析時使用預設值
    pub fn new() -> Result<Self> {
        Ok(Self::from_path(Path::new(SETTINGS_FILE)))
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let settings = load_settings(path).unwrap_or_else(|e| {
            warn!("{e:#}，使用預設設定");
            UserSettings::default()
        });
        Self { settings }
    }
}

fn load_settings(path: &Path) -> Result<UserSettings> {
    if !path.exists() {
        return Ok(UserSettings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))
}
