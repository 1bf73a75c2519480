use anyhow::{Context, Result, bail};
use std::path::Path;

/// 來源可以是單一檔案或資料夾
pub fn validate_source_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() && !path.is_file() {
        bail!("路徑不是檔案或資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立資料夾，已存在時不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_validate_source_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.mp4");
        std::fs::write(&file, "video").unwrap();

        assert!(validate_source_exists(temp_dir.path()).is_ok());
        assert!(validate_source_exists(&file).is_ok());
        assert!(validate_source_exists(&temp_dir.path().join("missing")).is_err());
    }
}
