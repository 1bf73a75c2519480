pub mod load;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{
    Config, DEFAULT_FRAME_COUNT, DEFAULT_JPEG_QUALITY, DEFAULT_PIXEL_FORMAT, Language,
    UserSettings, default_video_extensions,
};
