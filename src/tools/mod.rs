mod ffprobe_info;
mod path_validator;
mod tool_check;
mod video_scanner;

pub use ffprobe_info::{VideoInfo, get_video_info, parse_probe_output};
pub use path_validator::{ensure_directory_exists, validate_source_exists};
pub use tool_check::{REQUIRED_TOOLS, check_tool, find_missing_tool};
pub use video_scanner::scan_video_files;
