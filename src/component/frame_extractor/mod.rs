//! 影片畫面擷取元件
//!
//! 每個影片的流程：
//! A. 配置輸出資料夾
//! B. 規劃取樣（依數量需要 ffprobe 取得長度）
//! C. 快速擷取：單次 ffmpeg 呼叫
//! D. 快速擷取失敗時重新規劃，逐張擷取

mod error;
mod fallback_extractor;
mod fast_extractor;
mod main;
mod output_allocator;
mod pipeline;
mod prompt;
mod scale_spec;
mod schedule_planner;
mod toolkit;
mod types;

pub use error::ExtractionError;
pub use fallback_extractor::{
    FallbackExtraction, build_fallback_invocation, run_fallback_extraction,
};
pub use fast_extractor::{build_fast_invocation, plan_fast_sampling, run_fast_extraction};
pub use main::{BatchSummary, FrameExtractor};
pub use output_allocator::{OutputTarget, allocate_output_target};
pub use pipeline::{Attempt, ExtractionOutcome, ExtractionPipeline};
pub use prompt::{DialoguerPrompter, FilePrompter, PromptDecision};
pub use scale_spec::{ScaleSpec, build_filter_chain};
pub use schedule_planner::{
    SamplingPlan, fallback_count, plan_by_count, plan_by_interval, timestamps_by_count,
};
pub use toolkit::{FfmpegInvocation, MediaToolkit, SystemToolkit};
pub use types::{ExtractionOptions, OutputMode, SelectionPolicy, Verbosity};
