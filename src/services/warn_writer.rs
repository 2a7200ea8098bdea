//! 警告写入服务 - 业务能力层
//!
//! 只负责"记录缺失的教程源文件"，不关心流程

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// 警告写入服务
///
/// 每个缺失的源文件追加一行，启动时由 `init` 写入带时间戳的文件头
pub struct WarnWriter {
    warn_file_path: PathBuf,
}

impl WarnWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.warn_file_path
    }

    /// 重新初始化警告文件（覆盖旧内容）
    pub async fn init(&self) -> AppResult<()> {
        let header = format!(
            "{}\n教程提取警告 - {}\n{}\n\n",
            "=".repeat(60),
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.warn_file_path, header)
            .await
            .map_err(|e| AppError::file_write_failed(self.warn_file_path.display().to_string(), e))
    }

    /// 记录一个缺失的教程源文件
    ///
    /// # 参数
    /// - `tutorial_key`: 教程标识
    /// - `source_path`: 预期的源文件路径
    pub async fn write_missing(&self, tutorial_key: &str, source_path: &Path) -> AppResult<()> {
        debug!("写入警告: 教程 {} | 源文件 {}", tutorial_key, source_path.display());

        let warn_msg = format!(
            "教程 {} | 源文件不存在: {}\n",
            tutorial_key,
            source_path.display()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .await
            .map_err(|e| AppError::file_write_failed(self.warn_file_path.display().to_string(), e))?;
        file.write_all(warn_msg.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(self.warn_file_path.display().to_string(), e))?;
        file.flush()
            .await
            .map_err(|e| AppError::file_write_failed(self.warn_file_path.display().to_string(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_then_append() {
        let dir = tempfile::tempdir().unwrap();
        let writer = WarnWriter::new(dir.path().join("warn.txt"));

        writer.init().await.unwrap();
        writer
            .write_missing("resolution", Path::new("docs/game/resolution.md"))
            .await
            .unwrap();
        writer
            .write_missing("absorption", Path::new("docs/game/absorption.md"))
            .await
            .unwrap();

        let content = std::fs::read_to_string(writer.path()).unwrap();
        assert!(content.contains("教程提取警告"));
        let lines: Vec<&str> = content.lines().filter(|l| l.starts_with("教程 ")).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("resolution"));
        assert!(lines[1].contains("absorption"));
    }
}
