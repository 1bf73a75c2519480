use super::error::ExtractionError;
use super::scale_spec::ScaleSpec;
use crate::config::{DEFAULT_FRAME_COUNT, DEFAULT_JPEG_QUALITY, DEFAULT_PIXEL_FORMAT};

/// 畫面選取方式，每次執行只會有一種
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionPolicy {
    /// 每個影片均勻擷取 n 張，0 代表全部畫面
    ByCount(u32),
    /// 每隔指定秒數擷取一張，0 代表全部畫面
    ByInterval(f64),
}

impl SelectionPolicy {
    /// 由命令列的 -N / -T 決定選取方式
    ///
    /// 兩者同時指定為設定錯誤；都未指定時使用 `default_count`
    pub fn resolve(
        count: Option<u32>,
        interval: Option<f64>,
        default_count: u32,
    ) -> Result<Self, ExtractionError> {
        match (count, interval) {
            (Some(_), Some(_)) => Err(ExtractionError::Configuration(
                "-N 與 -T 一次只能使用其中一個".to_string(),
            )),
            (Some(count), None) => Ok(Self::ByCount(count)),
            (None, Some(seconds)) => {
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(ExtractionError::Configuration(format!(
                        "-T 必須是大於或等於 0 的秒數，收到 {seconds}"
                    )));
                }
                Ok(Self::ByInterval(seconds))
            }
            (None, None) => Ok(Self::ByCount(default_count)),
        }
    }

    #[must_use]
    pub fn is_all_frames(&self) -> bool {
        match *self {
            Self::ByCount(count) => count == 0,
            Self::ByInterval(seconds) => seconds == 0.0,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::ByCount(DEFAULT_FRAME_COUNT)
    }
}

/// 主控台輸出等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// 顯示 ffmpeg 輸出與所有診斷訊息
    #[default]
    Normal,
    /// 只顯示每個檔案的進度，隱藏 ffmpeg 輸出
    InfoOnly,
    /// 不輸出任何文字
    Silent,
}

impl Verbosity {
    /// `silent` 優先於 `info_only`
    #[must_use]
    pub const fn from_flags(silent: bool, info_only: bool) -> Self {
        if silent {
            Self::Silent
        } else if info_only {
            Self::InfoOnly
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn shows_progress(self) -> bool {
        !matches!(self, Self::Silent)
    }

    #[must_use]
    pub const fn shows_diagnostics(self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// 輸出位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// 與影片放在同一個資料夾
    BesideSource,
    /// 為每個影片建立 `<檔名>_frames` 資料夾
    #[default]
    DedicatedFolder,
}

/// 單次執行的擷取參數
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
    pub policy: SelectionPolicy,
    pub scale: ScaleSpec,
    pub output_mode: OutputMode,
    pub verbosity: Verbosity,
    /// JPEG 品質 (1-31，數字越小品質越高)
    pub jpeg_quality: u8,
    pub pixel_format: String,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            scale: ScaleSpec::default(),
            output_mode: OutputMode::default(),
            verbosity: Verbosity::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            pixel_format: DEFAULT_PIXEL_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rejects_both_policies() {
        let result = SelectionPolicy::resolve(Some(5), Some(2.0), 16);
        assert!(matches!(result, Err(ExtractionError::Configuration(_))));
    }

    #[test]
    fn test_resolve_defaults_to_count() {
        let policy = SelectionPolicy::resolve(None, None, 16).unwrap();
        assert_eq!(policy, SelectionPolicy::ByCount(16));
    }

    #[test]
    fn test_resolve_rejects_negative_interval() {
        assert!(SelectionPolicy::resolve(None, Some(-1.0), 16).is_err());
        assert!(SelectionPolicy::resolve(None, Some(f64::NAN), 16).is_err());
    }

    #[test]
    fn test_zero_means_all_frames() {
        assert!(SelectionPolicy::ByCount(0).is_all_frames());
        assert!(SelectionPolicy::ByInterval(0.0).is_all_frames());
        assert!(!SelectionPolicy::ByInterval(1.5).is_all_frames());
    }

    #[test]
    fn test_silent_wins_over_info() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Silent);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::InfoOnly);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
