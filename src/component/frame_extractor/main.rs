use super::error::ExtractionError;
use super::output_allocator::allocate_output_target;
use super::pipeline::{ExtractionOutcome, ExtractionPipeline};
use super::prompt::{FilePrompter, PromptDecision};
use super::toolkit::MediaToolkit;
use super::types::ExtractionOptions;
use anyhow::Result;
use console::style;
use log::{error, info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 批次擷取結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total_videos: usize,
    pub successful: usize,
    /// 成功的影片中，由逐張擷取完成的數量
    pub recovered_by_fallback: usize,
    pub failed: usize,
    pub skipped: usize,
    /// 使用者中止或收到中斷信號
    pub stopped_early: bool,
}

impl BatchSummary {
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// 影片畫面擷取器
///
/// 依序處理每個影片：配置輸出位置 -> 快速擷取 -> 失敗時逐張擷取。
/// 單一檔案失敗不影響後續檔案
pub struct FrameExtractor {
    options: ExtractionOptions,
    toolkit: Box<dyn MediaToolkit>,
    prompter: Option<Box<dyn FilePrompter>>,
    shutdown_signal: Arc<AtomicBool>,
}

impl FrameExtractor {
    pub fn new(
        options: ExtractionOptions,
        toolkit: Box<dyn MediaToolkit>,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            options,
            toolkit,
            prompter: None,
            shutdown_signal,
        }
    }

    /// 每個檔案處理前先詢問使用者
    #[must_use]
    pub fn with_prompter(mut self, prompter: Box<dyn FilePrompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    pub fn run(&self, videos: &[PathBuf]) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            total_videos: videos.len(),
            ..BatchSummary::default()
        };

        for video in videos {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                summary.stopped_early = true;
                break;
            }

            if let Some(prompter) = &self.prompter {
                match prompter.ask(video)? {
                    PromptDecision::Proceed => {}
                    PromptDecision::Skip => {
                        info!("使用者跳過: {}", video.display());
                        if self.options.verbosity.shows_diagnostics() {
                            println!("  {}", style(t!("batch.skipped")).yellow());
                        }
                        summary.skipped += 1;
                        continue;
                    }
                    PromptDecision::AbortBatch => {
                        info!("使用者中止批次");
                        summary.stopped_early = true;
                        return Ok(summary);
                    }
                }
            }

            if self.options.verbosity.shows_progress() {
                println!(
                    "{}",
                    style(t!("batch.processing", path = video.display())).cyan()
                );
            }

            match self.process_single_video(video) {
                Ok(outcome) => {
                    summary.successful += 1;
                    if matches!(outcome, ExtractionOutcome::Fallback { .. }) {
                        summary.recovered_by_fallback += 1;
                    }
                    self.report_success(&outcome);
                }
                Err(e) if !e.is_recoverable() => {
                    error!("無法繼續處理批次: {e}");
                    return Err(e.into());
                }
                Err(e) => {
                    error!("處理影片失敗 {}: {e}", video.display());
                    if self.options.verbosity.shows_progress() {
                        println!("  {} {} {}", style("✗").red(), t!("batch.failed"), e);
                    }
                    summary.failed += 1;
                }
            }
        }

        if self.options.verbosity.shows_progress() {
            self.print_summary(&summary);
        }

        Ok(summary)
    }

    /// 處理單一影片，所有錯誤都只影響這個檔案
    pub fn process_single_video(&self, video: &Path) -> Result<ExtractionOutcome, ExtractionError> {
        let target = allocate_output_target(video, self.options.output_mode);
        ExtractionPipeline::new(self.toolkit.as_ref(), &self.options).run(video, &target)
    }

    fn report_success(&self, outcome: &ExtractionOutcome) {
        if !self.options.verbosity.shows_diagnostics() {
            return;
        }

        let message = match *outcome {
            ExtractionOutcome::Fast { frames } => t!("batch.done_fast", count = frames),
            ExtractionOutcome::Fallback { frames, requested } => {
                t!("batch.done_fallback", count = frames, requested = requested)
            }
        };
        println!("  {} {}", style("✓").green(), message);
    }

    fn print_summary(&self, summary: &BatchSummary) {
        println!();
        println!("{}", style(t!("summary.title")).cyan().bold());
        println!("{}", t!("summary.total", count = summary.total_videos));
        println!(
            "{} {}",
            t!("summary.successful"),
            style(summary.successful).green()
        );

        if summary.recovered_by_fallback > 0 {
            println!(
                "{} {}",
                t!("summary.fallback"),
                style(summary.recovered_by_fallback).yellow()
            );
        }

        if summary.skipped > 0 {
            println!("{} {}", t!("summary.skipped"), style(summary.skipped).yellow());
        }

        if summary.failed > 0 {
            println!("{} {}", t!("summary.failed"), style(summary.failed).red());
        }

        if summary.stopped_early {
            println!("{}", style(t!("summary.interrupted")).dim());
        }

        info!(
            "畫面擷取完成 - 成功: {}, 逐張: {}, 跳過: {}, 失敗: {}",
            summary.successful, summary.recovered_by_fallback, summary.skipped, summary.failed
        );
    }
}
