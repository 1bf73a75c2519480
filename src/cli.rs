use crate::component::frame_extractor::{
    ExtractionError, ExtractionOptions, OutputMode, ScaleSpec, SelectionPolicy, Verbosity,
};
use crate::config::UserSettings;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const CLI_AFTER_HELP: &str = "Examples:\n  vfx -N 8 movie.mp4\n  vfx -R -T 5 -X 640 ~/Videos\n  vfx -P -D -I .";

/// Simple video frame extraction tool.
#[derive(Debug, Parser)]
#[command(
    name = "vfx",
    version,
    about = "Extract still frames from video files with ffmpeg",
    after_help = CLI_AFTER_HELP,
    disable_help_flag = true
)]
pub struct Cli {
    /// Video file or directory to process.
    #[arg(default_value = ".")]
    pub source: PathBuf,

    /// Process all files in the directory and its subdirectories.
    #[arg(short = 'R')]
    pub recursive: bool,

    /// Silent mode: no text output.
    #[arg(short = 'S')]
    pub silent: bool,

    /// Only show progress, no diagnostic messages from ffmpeg.
    #[arg(short = 'I')]
    pub info: bool,

    /// Extract COUNT evenly spaced frames per video (0 extracts all frames).
    #[arg(short = 'N', value_name = "COUNT")]
    pub count: Option<u32>,

    /// Extract one frame every SECONDS seconds (0 extracts all frames).
    #[arg(short = 'T', value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// Width in pixels of the extracted images; height follows the aspect ratio unless -Y is set.
    #[arg(short = 'X', value_name = "WIDTH", default_value_t = 0)]
    pub width: u32,

    /// Height in pixels of the extracted images; width follows the aspect ratio unless -X is set.
    #[arg(short = 'Y', value_name = "HEIGHT", default_value_t = 0)]
    pub height: u32,

    /// Ask before each video: y (yes), n (no) or a (abort).
    #[arg(short = 'P')]
    pub prompt: bool,

    /// Save frames next to the video instead of a new <name>_frames folder.
    #[arg(short = 'D')]
    pub same_directory: bool,

    /// Show this help text.
    #[arg(short = 'H', long = "help", short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.silent, self.info)
    }

    /// 組合擷取參數，-N 與 -T 同時指定時回傳設定錯誤
    pub fn extraction_options(
        &self,
        settings: &UserSettings,
    ) -> Result<ExtractionOptions, ExtractionError> {
        let policy =
            SelectionPolicy::resolve(self.count, self.interval, settings.default_frame_count)?;

        let output_mode = if self.same_directory {
            OutputMode::BesideSource
        } else {
            OutputMode::DedicatedFolder
        };

        Ok(ExtractionOptions {
            policy,
            scale: ScaleSpec::new(self.width, self.height),
            output_mode,
            verbosity: self.verbosity(),
            jpeg_quality: settings.jpeg_quality,
            pixel_format: settings.pixel_format.clone(),
        })
    }
}
