use crate::cli::Cli;
use crate::component::frame_extractor::{
    DialoguerPrompter, FrameExtractor, SystemToolkit, Verbosity,
};
use crate::config::Config;
use crate::signal::setup_shutdown_signal;
use crate::tools::{find_missing_tool, scan_video_files, validate_source_exists};
use anyhow::Result;
use console::style;
use log::{error, info};
use rust_i18n::t;
use std::process::ExitCode;

/// 整次執行的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 所有影片都處理完成（或沒有影片）
    Completed,
    /// 至少一個影片失敗
    CompletedWithFailures,
    /// 參數錯誤，沒有處理任何檔案
    ConfigurationError,
    /// 找不到 ffmpeg / ffprobe
    ToolMissing,
}

impl RunStatus {
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Completed => ExitCode::SUCCESS,
            Self::CompletedWithFailures | Self::ToolMissing => ExitCode::FAILURE,
            Self::ConfigurationError => ExitCode::from(2),
        }
    }
}

/// 執行順序：讀取設定 -> 檢查參數 -> 檢查外部工具 -> 掃描 -> 逐一擷取
///
/// 參數錯誤會在碰觸任何檔案前回報
pub fn run(cli: &Cli) -> Result<RunStatus> {
    let verbosity = cli.verbosity();
    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    let options = match cli.extraction_options(&config.settings) {
        Ok(options) => options,
        Err(e) => {
            error!("{e}");
            if verbosity != Verbosity::Silent {
                eprintln!("{} {}", style(t!("launcher.config_error")).red().bold(), e);
            }
            return Ok(RunStatus::ConfigurationError);
        }
    };

    if let Some(tool) = find_missing_tool() {
        error!("找不到 {tool}");
        if verbosity != Verbosity::Silent {
            eprintln!("{}", style(t!("launcher.tool_missing", tool = tool)).red());
        }
        return Ok(RunStatus::ToolMissing);
    }

    validate_source_exists(&cli.source)?;
    let videos = scan_video_files(&cli.source, cli.recursive, &config.settings)?;

    if videos.is_empty() {
        if verbosity.shows_progress() {
            println!(
                "{}",
                style(t!("launcher.no_videos", path = cli.source.display())).yellow()
            );
        }
        return Ok(RunStatus::Completed);
    }

    info!("找到 {} 個影片: {}", videos.len(), cli.source.display());
    if verbosity.shows_diagnostics() {
        println!(
            "{}",
            style(t!("launcher.found_videos", count = videos.len())).green()
        );
    }

    let shutdown_signal = setup_shutdown_signal();
    let mut extractor = FrameExtractor::new(
        options,
        Box::new(SystemToolkit::new(verbosity)),
        shutdown_signal,
    );
    if cli.prompt {
        extractor = extractor.with_prompter(Box::new(DialoguerPrompter::new()));
    }

    let summary = extractor.run(&videos)?;

    Ok(if summary.has_failures() {
        RunStatus::CompletedWithFailures
    } else {
        RunStatus::Completed
    })
}
