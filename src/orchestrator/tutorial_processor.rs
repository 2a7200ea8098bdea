//! 教程批次处理器 - 编排层

use std::path::Path;

use tracing::info;

use crate::error::AppResult;
use crate::services::{JsonWriter, WarnWriter};
use crate::utils::logging::{log_batch_complete, log_batch_start};
use crate::workflow::{ProcessResult, TutorialFlow};

/// 教程批次统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TutorialStats {
    /// 成功提取的教程数
    pub extracted: usize,
    /// 源文件缺失的教程标识（按处理顺序）
    pub missing: Vec<String>,
    /// 成功提取的题目总数（不含缺失的教程）
    pub total_problems: usize,
}

/// 按顺序处理所有教程标识
///
/// # 参数
/// - `tutorial_keys`: 教程标识列表
/// - `docs_dir`: Markdown 源文件目录
/// - `writer`: 教程输出目录的写入服务
/// - `warn_writer`: 缺失源文件的警告记录
///
/// # 返回
/// 输出目录无法创建或写入失败时返回错误，缺失的源文件不会
pub async fn process_tutorials(
    tutorial_keys: &[String],
    docs_dir: &Path,
    writer: &JsonWriter,
    warn_writer: &WarnWriter,
) -> AppResult<TutorialStats> {
    log_batch_start("教程", tutorial_keys.len());
    writer.ensure_dir().await?;

    let flow = TutorialFlow::new(docs_dir, writer, warn_writer);
    let mut stats = TutorialStats::default();

    for key in tutorial_keys {
        match flow.run(key).await? {
            ProcessResult::Extracted {
                rule_name,
                problem_count,
                ..
            } => {
                info!("✓ 已提取 {}: {} 道题目", rule_name, problem_count);
                stats.extracted += 1;
                stats.total_problems += problem_count;
            }
            ProcessResult::Missing { .. } => stats.missing.push(key.clone()),
        }
    }

    log_batch_complete("教程", stats.extracted, tutorial_keys.len(), stats.total_problems);
    Ok(stats)
}
