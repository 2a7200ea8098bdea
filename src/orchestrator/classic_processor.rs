//! 经典批次处理器 - 编排层

use tracing::info;

use crate::catalog::ClassicCatalog;
use crate::error::AppResult;
use crate::services::{classic_file_name, JsonWriter};
use crate::utils::logging::{log_batch_complete, log_batch_start};

/// 经典批次统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassicStats {
    pub levels: usize,
    pub total_problems: usize,
}

/// 按关卡升序写出所有经典关卡
pub async fn process_classic_levels(catalog: &ClassicCatalog, writer: &JsonWriter) -> AppResult<ClassicStats> {
    log_batch_start("经典关卡", catalog.levels().len());
    writer.ensure_dir().await?;

    let mut stats = ClassicStats::default();
    for level in catalog.levels() {
        writer.write(&classic_file_name(level.level()), level).await?;

        info!("✓ 已提取 Level {}: {} 道题目", level.level(), level.problems().len());
        stats.levels += 1;
        stats.total_problems += level.problems().len();
    }

    log_batch_complete("经典关卡", stats.levels, catalog.levels().len(), stats.total_problems);
    Ok(stats)
}
