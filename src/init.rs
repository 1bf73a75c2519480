use crate::component::frame_extractor::Verbosity;
use env_logger::Env;

/// 初始化日誌，`RUST_LOG` 優先，否則依輸出等級決定
pub fn init(verbosity: Verbosity) {
    let default_level = match verbosity {
        Verbosity::Silent => "off",
        Verbosity::InfoOnly => "error",
        Verbosity::Normal => "warn",
    };

    // 重複初始化（例如測試）時忽略
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}
