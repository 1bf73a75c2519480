use std::path::PathBuf;
use thiserror::Error;

/// 畫面擷取流程的錯誤分類
///
/// - `Configuration`：整批中止，在處理任何檔案前回報
/// - `Probe`、`DegenerateDuration`、`MissingFrameRate`、`TooManyFrames`：單一檔案略過，批次繼續
/// - `FastPathFailure`：由逐張擷取自動補救，只作為診斷訊息
/// - `FallbackFailure`：單一檔案失敗，批次繼續
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("設定錯誤: {0}")]
    Configuration(String),

    #[error("無法取得影片長度 {}: {reason}", path.display())]
    Probe { path: PathBuf, reason: String },

    #[error("影片長度異常（{duration}s），沒有可擷取的畫面")]
    DegenerateDuration { duration: f64 },

    #[error("無法取得影片幀率，無法換算全部畫面的數量")]
    MissingFrameRate,

    #[error("逐張擷取需要 {requested} 張，超過上限 {limit}（無法取得幀率）")]
    TooManyFrames { requested: f64, limit: u32 },

    #[error("快速擷取失敗 {}: {status}", path.display())]
    FastPathFailure { path: PathBuf, status: String },

    #[error("逐張擷取失敗 {}: {attempted} 次嘗試皆未產生畫面", path.display())]
    FallbackFailure { path: PathBuf, attempted: usize },

    #[error("無法執行 {program}: {source}")]
    ToolLaunch {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("無法建立輸出資料夾 {}: {reason}", path.display())]
    OutputDirectory { path: PathBuf, reason: String },
}

impl ExtractionError {
    /// 是否只影響單一檔案（批次可以繼續）
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}
