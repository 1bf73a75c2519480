use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};

/// 需要的外部工具
pub const REQUIRED_TOOLS: [&str; 2] = ["ffmpeg", "ffprobe"];

/// 以 `-version` 確認工具可以執行
pub fn check_tool(program: &str) -> Result<()> {
    let status = Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("找不到 {program}"))?;

    if !status.success() {
        bail!("{program} -version 執行失敗");
    }
    Ok(())
}

/// 回傳第一個無法執行的工具
#[must_use]
pub fn find_missing_tool() -> Option<&'static str> {
    REQUIRED_TOOLS
        .iter()
        .copied()
        .find(|program| check_tool(program).is_err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program() {
        assert!(check_tool("definitely-not-a-real-media-tool").is_err());
    }
}
