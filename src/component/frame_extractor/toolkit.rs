use super::error::ExtractionError;
use super::types::Verbosity;
use crate::tools::{VideoInfo, get_video_info};
use log::debug;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

/// 一次 ffmpeg 呼叫的參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegInvocation {
    args: Vec<String>,
}

impl FfmpegInvocation {
    #[must_use]
    pub const fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// 最後一個參數為輸出路徑
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    /// 逐張擷取的呼叫只輸出一張
    #[must_use]
    pub fn is_single_frame(&self) -> bool {
        self.args.iter().any(|arg| arg == "-frames:v")
    }
}

impl fmt::Display for FfmpegInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ffmpeg {}", self.args.join(" "))
    }
}

/// 外部多媒體工具（ffprobe / ffmpeg）
pub trait MediaToolkit {
    /// 取得影片長度與幀率
    fn probe(&self, video_path: &Path) -> Result<VideoInfo, ExtractionError>;

    /// 執行 ffmpeg，結束碼為 0 時回傳 `true`
    fn run_ffmpeg(&self, invocation: &FfmpegInvocation) -> Result<bool, ExtractionError>;
}

/// 使用系統上的 ffprobe / ffmpeg
pub struct SystemToolkit {
    verbosity: Verbosity,
}

impl SystemToolkit {
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl MediaToolkit for SystemToolkit {
    fn probe(&self, video_path: &Path) -> Result<VideoInfo, ExtractionError> {
        get_video_info(video_path).map_err(|e| ExtractionError::Probe {
            path: video_path.to_path_buf(),
            reason: format!("{e:#}"),
        })
    }

    fn run_ffmpeg(&self, invocation: &FfmpegInvocation) -> Result<bool, ExtractionError> {
        debug!("執行: {invocation}");

        let mut cmd = Command::new("ffmpeg");
        cmd.args(invocation.args()).stdin(Stdio::null());

        let launch_error = |source| ExtractionError::ToolLaunch {
            program: "ffmpeg",
            source,
        };

        let success = match self.verbosity {
            Verbosity::Normal => cmd.status().map_err(launch_error)?.success(),
            Verbosity::Silent => cmd
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map_err(launch_error)?
                .success(),
            Verbosity::InfoOnly => {
                let output = cmd
                    .stdout(Stdio::null())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(launch_error)?;
                if !output.status.success() {
                    debug!(
                        "ffmpeg 錯誤輸出: {}",
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                }
                output.status.success()
            }
        };

        Ok(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_display_and_output() {
        let invocation = FfmpegInvocation::new(vec![
            "-i".to_string(),
            "in.mp4".to_string(),
            "-frames:v".to_string(),
            "1".to_string(),
            "out_001.jpg".to_string(),
        ]);
        assert_eq!(
            invocation.to_string(),
            "ffmpeg -i in.mp4 -frames:v 1 out_001.jpg"
        );
        assert_eq!(invocation.output_path(), Some("out_001.jpg"));
        assert!(invocation.is_single_frame());
    }
}
