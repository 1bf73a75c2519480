use super::types::OutputMode;
use std::path::{Path, PathBuf};

/// 專用資料夾的後綴
const FRAMES_FOLDER_SUFFIX: &str = "_frames";

/// 單一影片的輸出位置與檔名模板
///
/// 檔名為 `<影片檔名>_NNN.jpg`，從 001 開始連續編號
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    directory: PathBuf,
    file_stem: String,
}

impl OutputTarget {
    #[must_use]
    pub fn new(directory: PathBuf, file_stem: impl Into<String>) -> Self {
        Self {
            directory,
            file_stem: file_stem.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// ffmpeg 的輸出模板（`%03d`），路徑中原有的 `%` 需跳脫
    #[must_use]
    pub fn pattern(&self) -> PathBuf {
        let escaped = self
            .directory
            .join(&self.file_stem)
            .to_string_lossy()
            .replace('%', "%%");
        PathBuf::from(format!("{escaped}_%03d.jpg"))
    }

    /// 第 `index` 張（從 1 開始）的輸出路徑
    #[must_use]
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.directory
            .join(format!("{}_{index:03}.jpg", self.file_stem))
    }

    /// 從 001 開始連續存在的畫面數量
    #[must_use]
    pub fn count_frames(&self) -> usize {
        (1..).take_while(|&i| self.frame_path(i).exists()).count()
    }
}

/// 為影片配置輸出位置
///
/// 專用資料夾模式下，`<檔名>_frames` 已存在時依序嘗試 `_1`、`_2`...
/// 直到找到不存在的路徑
#[must_use]
pub fn allocate_output_target(video_path: &Path, mode: OutputMode) -> OutputTarget {
    let file_stem = video_path
        .file_stem()
        .map_or_else(|| "video".to_string(), |s| s.to_string_lossy().to_string());

    let parent = video_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let directory = match mode {
        OutputMode::BesideSource => parent.to_path_buf(),
        OutputMode::DedicatedFolder => {
            unique_directory(&parent.join(format!("{file_stem}{FRAMES_FOLDER_SUFFIX}")))
        }
    };

    OutputTarget::new(directory, file_stem)
}

fn unique_directory(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let base_name = base.as_os_str().to_string_lossy().to_string();
    (1_u64..)
        .map(|counter| PathBuf::from(format!("{base_name}_{counter}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| base.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dedicated_folder_name() {
        let temp_dir = TempDir::new().unwrap();
        let video = temp_dir.path().join("foo.mp4");

        let target = allocate_output_target(&video, OutputMode::DedicatedFolder);
        assert_eq!(target.directory(), temp_dir.path().join("foo_frames"));
        assert!(!target.directory().exists(), "配置時不應建立資料夾");
    }

    #[test]
    fn test_numeric_suffix_on_collision() {
        let temp_dir = TempDir::new().unwrap();
        let video = temp_dir.path().join("foo.mp4");
        fs::create_dir(temp_dir.path().join("foo_frames")).unwrap();

        let target = allocate_output_target(&video, OutputMode::DedicatedFolder);
        assert_eq!(target.directory(), temp_dir.path().join("foo_frames_1"));

        fs::create_dir(temp_dir.path().join("foo_frames_1")).unwrap();
        let target = allocate_output_target(&video, OutputMode::DedicatedFolder);
        assert_eq!(target.directory(), temp_dir.path().join("foo_frames_2"));
    }

    #[test]
    fn test_existing_file_also_collides() {
        let temp_dir = TempDir::new().unwrap();
        let video = temp_dir.path().join("clip.mov");
        fs::write(temp_dir.path().join("clip_frames"), "not a folder").unwrap();

        let target = allocate_output_target(&video, OutputMode::DedicatedFolder);
        assert_eq!(target.directory(), temp_dir.path().join("clip_frames_1"));
    }

    #[test]
    fn test_beside_source() {
        let target = allocate_output_target(Path::new("/videos/trip.mkv"), OutputMode::BesideSource);
        assert_eq!(target.directory(), Path::new("/videos"));
        assert_eq!(target.frame_path(1), PathBuf::from("/videos/trip_001.jpg"));
    }

    #[test]
    fn test_relative_path_without_parent() {
        let target = allocate_output_target(Path::new("trip.mkv"), OutputMode::BesideSource);
        assert_eq!(target.directory(), Path::new("."));
    }

    #[test]
    fn test_pattern_and_frame_paths() {
        let target = OutputTarget::new(PathBuf::from("/out"), "a.b");
        assert_eq!(target.pattern(), PathBuf::from("/out/a.b_%03d.jpg"));
        assert_eq!(target.frame_path(12), PathBuf::from("/out/a.b_012.jpg"));

        let target = OutputTarget::new(PathBuf::from("/out"), "100%");
        assert_eq!(target.pattern(), PathBuf::from("/out/100%%_%03d.jpg"));
        assert_eq!(target.frame_path(1), PathBuf::from("/out/100%_001.jpg"));
    }

    #[test]
    fn test_pattern_escapes_percent_in_directory() {
        let target = allocate_output_target(
            Path::new("/videos/50%/clip.mp4"),
            OutputMode::BesideSource,
        );
        assert_eq!(target.pattern(), PathBuf::from("/videos/50%%/clip_%03d.jpg"));
        assert_eq!(target.frame_path(2), PathBuf::from("/videos/50%/clip_002.jpg"));
    }

    #[test]
    fn test_count_frames_stops_at_gap() {
        let temp_dir = TempDir::new().unwrap();
        let target = OutputTarget::new(temp_dir.path().to_path_buf(), "v");
        assert_eq!(target.count_frames(), 0);

        fs::write(target.frame_path(1), "jpg").unwrap();
        fs::write(target.frame_path(2), "jpg").unwrap();
        fs::write(target.frame_path(4), "jpg").unwrap();
        assert_eq!(target.count_frames(), 2);
    }
}
