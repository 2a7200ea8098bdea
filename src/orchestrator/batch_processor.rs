//! 整体批处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个提取过程的入口：
//!
//! 1. **初始化**：重建警告文件，输出启动信息
//! 2. **教程批次**：委托 `tutorial_processor`
//! 3. **经典批次**：委托 `classic_processor`
//! 4. **全局统计**：汇总两个批次的题目数量
//!
//! 教程标识列表（在 `Config` 中）和经典题库都作为显式的值传入，没有全局状态。

use crate::catalog::ClassicCatalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::orchestrator::classic_processor::{process_classic_levels, ClassicStats};
use crate::orchestrator::tutorial_processor::{process_tutorials, TutorialStats};
use crate::services::{JsonWriter, WarnWriter};
use crate::utils::logging::{log_startup, print_final_stats};

/// 一次完整提取的统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub tutorials: TutorialStats,
    pub classic: ClassicStats,
}

/// 应用主结构
pub struct App {
    config: Config,
    catalog: ClassicCatalog,
}

impl App {
    pub fn new(config: Config, catalog: ClassicCatalog) -> Self {
        Self { config, catalog }
    }

    /// 运行提取：先教程，后经典关卡
    pub async fn run(&self) -> AppResult<ExtractionSummary> {
        log_startup(&self.config);

        let warn_writer = WarnWriter::new(&self.config.warn_file);
        warn_writer.init().await?;

        let tutorial_writer = JsonWriter::new(&self.config.tutorial_output_dir);
        let tutorials = process_tutorials(
            &self.config.tutorial_keys,
            &self.config.docs_dir,
            &tutorial_writer,
            &warn_writer,
        )
        .await?;

        let classic_writer = JsonWriter::new(&self.config.classic_output_dir);
        let classic = process_classic_levels(&self.catalog, &classic_writer).await?;

        let summary = ExtractionSummary { tutorials, classic };
        print_final_stats(&summary, &self.config);

        Ok(summary)
    }
}
