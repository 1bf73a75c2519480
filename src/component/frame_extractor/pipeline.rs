use super::error::ExtractionError;
use super::fallback_extractor::run_fallback_extraction;
use super::fast_extractor::run_fast_extraction;
use super::output_allocator::OutputTarget;
use super::toolkit::MediaToolkit;
use super::types::ExtractionOptions;
use console::style;
use log::warn;
use rust_i18n::t;
use std::path::Path;

/// 目前嘗試的擷取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Fast,
    Fallback,
}

/// 單一影片的擷取結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// 快速擷取成功
    Fast { frames: usize },
    /// 快速擷取失敗後由逐張擷取完成
    Fallback { frames: usize, requested: usize },
}

impl ExtractionOutcome {
    #[must_use]
    pub const fn frames(&self) -> usize {
        match *self {
            Self::Fast { frames } | Self::Fallback { frames, .. } => frames,
        }
    }
}

/// 兩階段擷取流程：Fast -> (成功 | 失敗) -> 失敗時 Fallback -> (成功 | 失敗)
///
/// 只有快速擷取的結束碼非 0 才會進入逐張擷取；
/// 影片長度取得失敗等錯誤直接回報，不會重試
pub struct ExtractionPipeline<'a, T: MediaToolkit + ?Sized> {
    toolkit: &'a T,
    options: &'a ExtractionOptions,
}

impl<'a, T: MediaToolkit + ?Sized> ExtractionPipeline<'a, T> {
    pub const fn new(toolkit: &'a T, options: &'a ExtractionOptions) -> Self {
        Self { toolkit, options }
    }

    pub fn run(
        &self,
        video_path: &Path,
        target: &OutputTarget,
    ) -> Result<ExtractionOutcome, ExtractionError> {
        let mut attempt = Attempt::Fast;

        loop {
            match attempt {
                Attempt::Fast => {
                    match run_fast_extraction(self.toolkit, video_path, target, self.options) {
                        Ok(frames) => return Ok(ExtractionOutcome::Fast { frames }),
                        Err(e @ ExtractionError::FastPathFailure { .. }) => {
                            warn!("{e}，改用逐張擷取");
                            if self.options.verbosity.shows_diagnostics() {
                                println!(
                                    "{}",
                                    style(t!("batch.fast_failed", path = video_path.display()))
                                        .yellow()
                                );
                            }
                            attempt = Attempt::Fallback;
                        }
                        Err(e) => return Err(e),
                    }
                }
                Attempt::Fallback => {
                    let result =
                        run_fallback_extraction(self.toolkit, video_path, target, self.options)?;
                    return Ok(ExtractionOutcome::Fallback {
                        frames: result.frames_written,
                        requested: result.requested,
                    });
                }
            }
        }
    }
}
