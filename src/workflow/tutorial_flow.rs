//! 教程处理流程 - 流程层
//!
//! 核心职责：定义"一个教程标识"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取 `<key>.md`，不存在则记录警告并返回 `Missing`
//! 2. 解析为 `TutorialRecord`
//! 3. 写出 `<key>.json`

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::loaders::{load_tutorial_source, source_path};
use crate::services::{parse_tutorial, tutorial_file_name, JsonWriter, WarnWriter};

/// 单个教程的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已提取并写出
    Extracted {
        rule_name: String,
        problem_count: usize,
        output_path: PathBuf,
    },
    /// 源文件不存在，已跳过
    Missing { source_path: PathBuf },
}

/// 教程处理流程
///
/// - 不持有任何文件句柄，读写都在单次调用内完成
/// - 只依赖业务能力（loader / parser / writer）
pub struct TutorialFlow<'a> {
    docs_dir: PathBuf,
    writer: &'a JsonWriter,
    warn_writer: &'a WarnWriter,
}

impl<'a> TutorialFlow<'a> {
    pub fn new(docs_dir: impl Into<PathBuf>, writer: &'a JsonWriter, warn_writer: &'a WarnWriter) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            writer,
            warn_writer,
        }
    }

    pub async fn run(&self, tutorial_key: &str) -> AppResult<ProcessResult> {
        let Some(content) = load_tutorial_source(&self.docs_dir, tutorial_key).await? else {
            let path = source_path(&self.docs_dir, tutorial_key);
            warn!("⚠️ 教程源文件不存在: {}", path.display());
            // 警告文件只是辅助记录，追加失败不影响批次
            if let Err(e) = self.warn_writer.write_missing(tutorial_key, &path).await {
                warn!("⚠️ 警告文件写入失败: {}", e);
            }
            return Ok(ProcessResult::Missing { source_path: path });
        };

        let record = parse_tutorial(&content, tutorial_key);
        debug!(
            "[{}] 解析完成: 规则 '{}', {} 道题目",
            tutorial_key,
            record.rule_name,
            record.problems.len()
        );

        let output_path = self
            .writer
            .write(&tutorial_file_name(tutorial_key), &record)
            .await?;

        Ok(ProcessResult::Extracted {
            rule_name: record.rule_name,
            problem_count: record.problems.len(),
            output_path,
        })
    }
}
