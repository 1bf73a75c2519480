use super::error::ExtractionError;
use super::output_allocator::OutputTarget;
use super::scale_spec::build_filter_chain;
use super::schedule_planner::{SamplingPlan, plan_by_count, plan_by_interval};
use super::toolkit::{FfmpegInvocation, MediaToolkit};
use super::types::{ExtractionOptions, SelectionPolicy};
use crate::tools::ensure_directory_exists;
use log::{debug, info};
use std::path::Path;

/// 決定快速擷取的取樣方式
///
/// 只有「依數量且 n > 0」需要影片長度，其餘情況不呼叫 ffprobe
pub fn plan_fast_sampling<T: MediaToolkit + ?Sized>(
    toolkit: &T,
    video_path: &Path,
    policy: SelectionPolicy,
) -> Result<SamplingPlan, ExtractionError> {
    match policy {
        SelectionPolicy::ByCount(0) => Ok(SamplingPlan::AllFrames),
        SelectionPolicy::ByCount(count) => {
            let info = toolkit.probe(video_path)?;
            plan_by_count(info.duration_seconds, count)
        }
        SelectionPolicy::ByInterval(seconds) => Ok(plan_by_interval(seconds)),
    }
}

/// 建立單次擷取全部畫面的 ffmpeg 參數
#[must_use]
pub fn build_fast_invocation(
    video_path: &Path,
    plan: &SamplingPlan,
    target: &OutputTarget,
    options: &ExtractionOptions,
) -> FfmpegInvocation {
    let mut args = vec![
        "-hide_banner".to_string(),
        "-nostdin".to_string(),
        "-y".to_string(),
        "-i".to_string(),
        video_path.to_string_lossy().to_string(),
    ];

    let sampling = plan.filter();
    if let Some(filter_chain) = build_filter_chain(sampling.as_deref(), &options.scale) {
        args.push("-vf".to_string());
        args.push(filter_chain);
    }

    // 全部畫面時避免 ffmpeg 為了固定幀率複製或丟棄畫面
    if *plan == SamplingPlan::AllFrames {
        args.push("-fps_mode".to_string());
        args.push("passthrough".to_string());
    }

    args.extend([
        "-pix_fmt".to_string(),
        options.pixel_format.clone(),
        "-q:v".to_string(),
        options.jpeg_quality.to_string(),
        target.pattern().to_string_lossy().to_string(),
    ]);

    FfmpegInvocation::new(args)
}

/// 快速擷取：一次 ffmpeg 呼叫取出所有畫面
///
/// 結束碼非 0 時回傳 `FastPathFailure`，已寫出的檔案保留，
/// 由逐張擷取以相同檔名覆寫
pub fn run_fast_extraction<T: MediaToolkit + ?Sized>(
    toolkit: &T,
    video_path: &Path,
    target: &OutputTarget,
    options: &ExtractionOptions,
) -> Result<usize, ExtractionError> {
    let plan = plan_fast_sampling(toolkit, video_path, options.policy)?;
    debug!("快速擷取 {}: {plan:?}", video_path.display());

    ensure_directory_exists(target.directory()).map_err(|e| ExtractionError::OutputDirectory {
        path: target.directory().to_path_buf(),
        reason: e.to_string(),
    })?;

    let invocation = build_fast_invocation(video_path, &plan, target, options);
    if !toolkit.run_ffmpeg(&invocation)? {
        return Err(ExtractionError::FastPathFailure {
            path: video_path.to_path_buf(),
            status: "ffmpeg 結束碼非 0".to_string(),
        });
    }

    let frames = target.count_frames();
    info!("快速擷取完成 {}: {frames} 張", video_path.display());
    Ok(frames)
}
