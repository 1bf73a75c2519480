use crate::config::UserSettings;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 列出要處理的影片
///
/// - 來源是檔案：只回傳該檔案（副檔名不符時為空）
/// - 來源是資料夾：`recursive` 為 false 時只看第一層
///
/// 在開始處理前就取得完整列表，新建立的 `_frames` 資料夾不會被掃描到。
/// 依檔名排序，確保處理順序固定
pub fn scan_video_files(
    source: &Path,
    recursive: bool,
    settings: &UserSettings,
) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    let videos: Vec<PathBuf> = WalkDir::new(source)
        .follow_links(false)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| settings.is_video_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    debug!("在 {} 找到 {} 個影片", source.display(), videos.len());
    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::write(base.join("b.mp4"), "video").unwrap();
        fs::write(base.join("a.mov"), "video").unwrap();
        fs::write(base.join("notes.txt"), "text").unwrap();
        fs::write(base.join("UPPER.MP4"), "video").unwrap();
        fs::create_dir(base.join("sub")).unwrap();
        fs::write(base.join("sub").join("c.mkv"), "video").unwrap();
        temp_dir
    }

    #[test]
    fn test_scan_top_level_only() {
        let temp_dir = create_tree();
        let videos = scan_video_files(temp_dir.path(), false, &UserSettings::default()).unwrap();

        let names: Vec<_> = videos
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.mov", "b.mp4"]);
    }

    #[test]
    fn test_scan_recursive() {
        let temp_dir = create_tree();
        let videos = scan_video_files(temp_dir.path(), true, &UserSettings::default()).unwrap();

        assert_eq!(videos.len(), 3);
        assert!(videos.contains(&temp_dir.path().join("sub").join("c.mkv")));
    }

    #[test]
    fn test_scan_single_file() {
        let temp_dir = create_tree();
        let file = temp_dir.path().join("b.mp4");

        let videos = scan_video_files(&file, false, &UserSettings::default()).unwrap();
        assert_eq!(videos, vec![file]);

        let text = temp_dir.path().join("notes.txt");
        assert!(
            scan_video_files(&text, false, &UserSettings::default())
                .unwrap()
                .is_empty()
        );
    }
}
