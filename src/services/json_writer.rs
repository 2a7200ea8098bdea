//! JSON 写入服务 - 业务能力层
//!
//! 只负责"把一个记录写成一个缩进 JSON 文件"，不关心记录从哪里来

use std::path::PathBuf;

use serde::Serialize;
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 教程输出文件名：`<key>.json`
pub fn tutorial_file_name(tutorial_key: &str) -> String {
    format!("{}.json", tutorial_key)
}

/// 经典关卡输出文件名：`level-<N>.json`
pub fn classic_file_name(level: u32) -> String {
    format!("level-{}.json", level)
}

/// JSON 写入服务
///
/// 职责：
/// - 确保输出目录存在
/// - 把单个记录渲染为两空格缩进的 JSON 并写入文件
pub struct JsonWriter {
    output_dir: PathBuf,
}

impl JsonWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 创建输出目录（含父目录），失败即致命
    pub async fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AppError::dir_create_failed(self.output_dir.display().to_string(), e))
    }

    /// 写入一个记录
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write<T: Serialize>(&self, file_name: &str, value: &T) -> AppResult<PathBuf> {
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(value)?;

        fs::write(&path, json.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!("已写入 {} ({} 字节)", path.display(), json.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tutorial::{TutorialProblem, TutorialRecord};

    #[test]
    fn test_file_names() {
        assert_eq!(tutorial_file_name("modus-tollens"), "modus-tollens.json");
        assert_eq!(classic_file_name(3), "level-3.json");
    }

    #[tokio::test]
    async fn test_write_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let writer = JsonWriter::new(dir.path().join("nested/tutorial"));
        writer.ensure_dir().await.unwrap();

        let mut record = TutorialRecord::empty("addition");
        record.rule_name = "Addition".to_string();
        let mut problem = TutorialProblem::new(1, "Easy");
        problem.premises.push("P".to_string());
        record.problems.push(problem);

        let path = writer.write(&tutorial_file_name("addition"), &record).await.unwrap();
        let written = std::fs::read_to_string(path).unwrap();

        assert_eq!(
            written,
            r#"{
  "rule_name": "Addition",
  "description": "",
  "rule_pattern": "",
  "tutorial_key": "addition",
  "problems": [
    {
      "problem_number": 1,
      "difficulty": "Easy",
      "premises": [
        "P"
      ],
      "conclusion": "",
      "solution": ""
    }
  ]
}"#
        );
    }

    #[tokio::test]
    async fn test_ensure_dir_fails_when_path_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();

        let writer = JsonWriter::new(blocker.join("classic"));
        assert!(writer.ensure_dir().await.is_err());
    }
}
