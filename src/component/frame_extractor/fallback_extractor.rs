use super::error::ExtractionError;
use super::output_allocator::OutputTarget;
use super::scale_spec::build_filter_chain;
use super::schedule_planner::{fallback_count, timestamps_by_count};
use super::toolkit::{FfmpegInvocation, MediaToolkit};
use super::types::{ExtractionOptions, Verbosity};
use crate::tools::ensure_directory_exists;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rust_i18n::t;
use std::fs;
use std::path::Path;

/// 逐張擷取結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackExtraction {
    /// 成功寫出的張數（從 001 連續編號）
    pub frames_written: usize,
    /// 規劃的時間點數量
    pub requested: usize,
}

/// 建立擷取單一時間點的 ffmpeg 參數
///
/// 選取第一個時間 >= `timestamp` 的畫面，並重設 PTS 讓它成為輸出的第一張
#[must_use]
pub fn build_fallback_invocation(
    video_path: &Path,
    timestamp: f64,
    output_path: &Path,
    options: &ExtractionOptions,
) -> FfmpegInvocation {
    let select = format!("select='gte(t\\,{timestamp})',setpts=PTS-STARTPTS");
    let filter_chain =
        build_filter_chain(Some(&select), &options.scale).unwrap_or_else(|| select.clone());

    FfmpegInvocation::new(vec![
        "-hide_banner".to_string(),
        "-nostdin".to_string(),
        "-y".to_string(),
        "-i".to_string(),
        video_path.to_string_lossy().to_string(),
        "-vf".to_string(),
        filter_chain,
        "-frames:v".to_string(),
        "1".to_string(),
        "-update".to_string(),
        "1".to_string(),
        "-q:v".to_string(),
        options.jpeg_quality.to_string(),
        output_path.to_string_lossy().to_string(),
    ])
}

/// 逐張擷取（降級方案）
///
/// 重新取得影片長度並獨立計算時間點，每個時間點執行一次 ffmpeg。
/// 失敗的時間點不佔用編號，成功的畫面從 001 連續編號
pub fn run_fallback_extraction<T: MediaToolkit + ?Sized>(
    toolkit: &T,
    video_path: &Path,
    target: &OutputTarget,
    options: &ExtractionOptions,
) -> Result<FallbackExtraction, ExtractionError> {
    let info = toolkit.probe(video_path)?;
    let count = fallback_count(options.policy, &info)?;
    let timestamps = timestamps_by_count(info.duration_seconds, count)?;

    debug!(
        "逐張擷取 {}: {} 個時間點，間隔 {:.3}s",
        video_path.display(),
        timestamps.len(),
        info.duration_seconds / f64::from(count)
    );

    ensure_directory_exists(target.directory()).map_err(|e| ExtractionError::OutputDirectory {
        path: target.directory().to_path_buf(),
        reason: e.to_string(),
    })?;

    let progress_bar = create_progress_bar(timestamps.len(), options.verbosity);
    let mut frames_written = 0;

    for &timestamp in &timestamps {
        let output_path = target.frame_path(frames_written + 1);
        let invocation = build_fallback_invocation(video_path, timestamp, &output_path, options);

        // ffmpeg 沒有選到畫面時仍可能回傳 0，先刪除快速擷取留下的同名檔案
        remove_partial_frame(&output_path);

        match toolkit.run_ffmpeg(&invocation) {
            Ok(true) if output_path.exists() => frames_written += 1,
            Ok(_) => {
                warn!("擷取失敗 {} @ {timestamp:.3}s", video_path.display());
                remove_partial_frame(&output_path);
            }
            Err(e) => {
                progress_bar.finish_and_clear();
                return Err(e);
            }
        }
        progress_bar.inc(1);
    }
    progress_bar.finish_and_clear();

    // 清除快速擷取失敗時留下、編號超出的舊檔案
    remove_stale_frames(target, frames_written + 1);

    if frames_written == 0 {
        return Err(ExtractionError::FallbackFailure {
            path: video_path.to_path_buf(),
            attempted: timestamps.len(),
        });
    }

    info!(
        "逐張擷取完成 {}: {frames_written}/{}",
        video_path.display(),
        timestamps.len()
    );

    Ok(FallbackExtraction {
        frames_written,
        requested: timestamps.len(),
    })
}

fn create_progress_bar(len: usize, verbosity: Verbosity) -> ProgressBar {
    // ffmpeg 的輸出會打亂進度列，只在隱藏 ffmpeg 輸出時顯示
    if verbosity != Verbosity::InfoOnly {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::new(len as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress_bar.set_message(t!("batch.fallback_progress").to_string());
    progress_bar
}

fn remove_partial_frame(path: &Path) {
    if path.exists() && fs::remove_file(path).is_err() {
        warn!("無法刪除不完整的畫面: {}", path.display());
    }
}

fn remove_stale_frames(target: &OutputTarget, from_index: usize) {
    for index in from_index.. {
        let path = target.frame_path(index);
        if !path.exists() {
            break;
        }
        debug!("刪除舊畫面: {}", path.display());
        if let Err(e) = fs::remove_file(&path) {
            warn!("無法刪除舊畫面 {}: {e}", path.display());
            break;
        }
    }
}
