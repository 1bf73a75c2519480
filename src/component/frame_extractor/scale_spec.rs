/// 輸出尺寸設定，0 代表不指定
///
/// - 寬高都指定：拉伸到指定尺寸（不保持比例）
/// - 只指定其一：另一邊依比例自動計算
/// - 都不指定：不縮放
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaleSpec {
    pub width: u32,
    pub height: u32,
}

impl ScaleSpec {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 轉換為 ffmpeg 的 scale 濾鏡
    #[must_use]
    pub fn directive(&self) -> Option<String> {
        match (self.width, self.height) {
            (0, 0) => None,
            (width, 0) => Some(format!("scale={width}:-1")),
            (0, height) => Some(format!("scale=-1:{height}")),
            (width, height) => Some(format!("scale={width}:{height}")),
        }
    }
}

/// 組合完整的濾鏡鏈
///
/// ffmpeg 由左至右套用濾鏡，縮放必須接在取樣之後，
/// 只對被選取的畫面縮放
#[must_use]
pub fn build_filter_chain(sampling: Option<&str>, scale: &ScaleSpec) -> Option<String> {
    let filters: Vec<String> = sampling
        .map(str::to_string)
        .into_iter()
        .chain(scale.directive())
        .collect();

    if filters.is_empty() {
        None
    } else {
        Some(filters.join(","))
    }
}
