use anyhow::Result;
use console::Term;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;
use std::path::Path;

/// 每個檔案處理前的詢問結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptDecision {
    Proceed,
    Skip,
    /// 停止整個批次，不再輸出任何訊息
    AbortBatch,
}

impl PromptDecision {
    /// 解析 y / n / a 的回答
    #[must_use]
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Self::Proceed),
            "n" | "no" => Some(Self::Skip),
            "a" | "abort" => Some(Self::AbortBatch),
            _ => None,
        }
    }
}

/// 在檔案之間詢問使用者
pub trait FilePrompter {
    fn ask(&self, video_path: &Path) -> Result<PromptDecision>;
}

/// 使用 dialoguer 選單詢問，按 ESC 視為中止
///
/// 非終端機輸入時改為讀取一行文字，n 跳過、a 中止，其他回答都會處理
pub struct DialoguerPrompter {
    term: Term,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePrompter for DialoguerPrompter {
    fn ask(&self, video_path: &Path) -> Result<PromptDecision> {
        if !self.term.is_term() {
            self.term.write_line(&format!(
                "{} (y/n/a)",
                t!("batch.prompt", path = video_path.display())
            ))?;
            let mut answer = String::new();
            std::io::stdin().read_line(&mut answer)?;
            return Ok(PromptDecision::from_answer(&answer).unwrap_or(PromptDecision::Proceed));
        }

        let decisions = [
            PromptDecision::Proceed,
            PromptDecision::Skip,
            PromptDecision::AbortBatch,
        ];
        let items: Vec<String> = vec![
            t!("batch.answer_yes").to_string(),
            t!("batch.answer_no").to_string(),
            t!("batch.answer_abort").to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("batch.prompt", path = video_path.display()))
            .items(&items)
            .default(0)
            .interact_on_opt(&self.term)?;

        Ok(selection.map_or(PromptDecision::AbortBatch, |index| decisions[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_answer() {
        assert_eq!(PromptDecision::from_answer("y"), Some(PromptDecision::Proceed));
        assert_eq!(PromptDecision::from_answer(" N \n"), Some(PromptDecision::Skip));
        assert_eq!(
            PromptDecision::from_answer("a"),
            Some(PromptDecision::AbortBatch)
        );
        assert_eq!(PromptDecision::from_answer("maybe"), None);
    }
}
