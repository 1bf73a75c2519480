use serde::{Deserialize, Serialize};
use std::path::Path;

/// 未指定 -N / -T 時擷取的張數
pub const DEFAULT_FRAME_COUNT: u32 = 16;
/// JPEG 品質 (1-31，數字越小品質越高)
pub const DEFAULT_JPEG_QUALITY: u8 = 2;
/// 固定輸出像素格式，確保色彩一致
pub const DEFAULT_PIXEL_FORMAT: &str = "yuv420p";

#[must_use]
pub fn default_video_extensions() -> Vec<String> {
    [".mp4", ".mov", ".avi", ".mkv"]
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    English,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::TraditionalChinese => "zh-TW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub default_frame_count: u32,
    pub jpeg_quality: u8,
    pub pixel_format: String,
    /// 副檔名比對區分大小寫
    pub video_extensions: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_frame_count: DEFAULT_FRAME_COUNT,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            pixel_format: DEFAULT_PIXEL_FORMAT.to_string(),
            video_extensions: default_video_extensions(),
        }
    }
}

impl UserSettings {
    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| {
                self.video_extensions
                    .iter()
                    .any(|ext| name.len() > ext.len() && name.ends_with(ext.as_str()))
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
