use super::error::ExtractionError;
use super::types::SelectionPolicy;
use crate::tools::VideoInfo;

/// 快速擷取使用的取樣方式（單次 ffmpeg 呼叫）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingPlan {
    /// 輸出每一個解碼後的畫面
    AllFrames,
    /// 每 `interval` 秒一張
    Rate { interval: f64 },
}

impl SamplingPlan {
    /// 對應的 ffmpeg 取樣濾鏡，全部畫面時不需要濾鏡
    #[must_use]
    pub fn filter(&self) -> Option<String> {
        match self {
            Self::AllFrames => None,
            Self::Rate { interval } => Some(format!("fps=1/{interval}")),
        }
    }
}

/// 依數量規劃：每 duration / n 秒一張
///
/// n 為 0 時不論長度都是全部畫面
pub fn plan_by_count(duration: f64, count: u32) -> Result<SamplingPlan, ExtractionError> {
    if count == 0 {
        return Ok(SamplingPlan::AllFrames);
    }
    let duration = validate_duration(duration)?;
    Ok(SamplingPlan::Rate {
        interval: duration / f64::from(count),
    })
}

/// 依間隔規劃，不需要影片長度
#[must_use]
pub fn plan_by_interval(seconds: f64) -> SamplingPlan {
    if seconds == 0.0 {
        SamplingPlan::AllFrames
    } else {
        SamplingPlan::Rate { interval: seconds }
    }
}

/// 逐張擷取使用的時間點：{0, d/n, 2d/n, ..., (n-1)d/n}
pub fn timestamps_by_count(duration: f64, count: u32) -> Result<Vec<f64>, ExtractionError> {
    let duration = validate_duration(duration)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let interval = duration / f64::from(count);
    Ok((0..count).map(|i| f64::from(i) * interval).collect())
}

/// 沒有幀率可參考時，逐張擷取的張數上限
pub const MAX_UNBOUNDED_FALLBACK_FRAMES: u32 = 100_000;

/// 將任一選取方式換算成逐張擷取的張數
///
/// - 依數量：直接使用
/// - 依間隔：ceil(d / 間隔)
/// - 全部畫面：ceil(d * 幀率)
///
/// 有幀率時張數不超過 ceil(d * 幀率)；沒有幀率且超過
/// `MAX_UNBOUNDED_FALLBACK_FRAMES` 時回傳 `TooManyFrames`
pub fn fallback_count(policy: SelectionPolicy, info: &VideoInfo) -> Result<u32, ExtractionError> {
    let duration = validate_duration(info.duration_seconds)?;
    let frame_limit = info
        .frame_rate
        .filter(|rate| rate.is_finite() && *rate > 0.0)
        .map(|rate| (duration * rate).ceil());

    let requested = match policy {
        _ if policy.is_all_frames() => frame_limit.ok_or(ExtractionError::MissingFrameRate)?,
        SelectionPolicy::ByCount(count) => f64::from(count),
        SelectionPolicy::ByInterval(seconds) => (duration / seconds).ceil(),
    };

    let count = match frame_limit {
        Some(limit) => requested.min(limit),
        None if requested > f64::from(MAX_UNBOUNDED_FALLBACK_FRAMES) => {
            return Err(ExtractionError::TooManyFrames {
                requested,
                limit: MAX_UNBOUNDED_FALLBACK_FRAMES,
            });
        }
        None => requested,
    };

    // f64 -> u32 轉換會飽和
    Ok((count as u32).max(1))
}

/// 長度為 0、負數或非數字的影片視為損毀，不做除法
fn validate_duration(duration: f64) -> Result<f64, ExtractionError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(ExtractionError::DegenerateDuration { duration })
    }
}
