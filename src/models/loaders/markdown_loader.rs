use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AppError, AppResult};

/// 教程标识对应的 Markdown 源文件路径：`<docs_dir>/<key>.md`
pub fn source_path(docs_dir: &Path, tutorial_key: &str) -> PathBuf {
    docs_dir.join(format!("{}.md", tutorial_key))
}

/// 读取一个教程源文件
///
/// 非法 UTF-8 字节替换为 U+FFFD，不视为错误
///
/// # 返回
/// - `Ok(Some(text))`: 读取成功
/// - `Ok(None)`: 文件不存在，由调用方决定是否跳过
/// - `Err`: 文件存在但读取失败
pub async fn load_tutorial_source(docs_dir: &Path, tutorial_key: &str) -> AppResult<Option<String>> {
    let path = source_path(docs_dir, tutorial_key);

    match fs::read(&path).await {
        Ok(bytes) => {
            tracing::debug!("已读取 {} ({} 字节)", path.display(), bytes.len());
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::file_read_failed(path.display().to_string(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_path_naming() {
        assert_eq!(
            source_path(Path::new("docs/game"), "de-morgans-and"),
            PathBuf::from("docs/game/de-morgans-and.md")
        );
    }

    #[tokio::test]
    async fn test_load_existing_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("addition.md"), "# Addition\n").unwrap();

        let found = load_tutorial_source(dir.path(), "addition").await.unwrap();
        assert_eq!(found.as_deref(), Some("# Addition\n"));

        let missing = load_tutorial_source(dir.path(), "resolution").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("idempotent.md"), b"# Idempotent\ncaf\xe9\n").unwrap();

        let content = load_tutorial_source(dir.path(), "idempotent").await.unwrap();
        assert_eq!(content.as_deref(), Some("# Idempotent\ncaf\u{FFFD}\n"));
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("absorption.md")).unwrap();

        let result = load_tutorial_source(dir.path(), "absorption").await;
        assert!(result.is_err());
    }
}
