//! 日志工具模块
//!
//! 初始化 tracing 订阅器，并提供批处理各阶段的日志输出函数

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::orchestrator::ExtractionSummary;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题目提取工具启动");
    info!("📁 教程源目录: {}", config.docs_dir.display());
    info!("📋 教程数量: {}", config.tutorial_keys.len());
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `batch_name`: 批次名称
/// - `total`: 待处理数量
pub fn log_batch_start(batch_name: &str, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理{}批次: 共 {} 项", batch_name, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_name: &str, success: usize, total: usize, problems: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ {}批次完成: 成功 {}/{}, 题目共 {} 道", batch_name, success, total, problems);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &ExtractionSummary, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 提取完成统计");
    info!("完成时间: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("{}", "=".repeat(60));
    info!(
        "✅ 教程: {}/{} 个, 题目 {} 道",
        summary.tutorials.extracted,
        config.tutorial_keys.len(),
        summary.tutorials.total_problems
    );
    info!(
        "✅ 经典关卡: {} 个, 题目 {} 道",
        summary.classic.levels, summary.classic.total_problems
    );
    if !summary.tutorials.missing.is_empty() {
        warn!("⚠️ 缺失的教程: {}", summary.tutorials.missing.join(", "));
        warn!("警告已记录至: {}", config.warn_file.display());
    }
    info!("{}", "=".repeat(60));
    info!("教程文件写入: {}", config.tutorial_output_dir.display());
    info!("经典文件写入: {}", config.classic_output_dir.display());
}
