//! # Logic Corpus
//!
//! 逻辑训练应用的题库提取工具：把教程 Markdown 转换为结构化 JSON，
//! 并写出内置的经典模式关卡。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models / Catalog）
//! - `models/` - `TutorialRecord`、`ClassicLevel` 等输出结构，以及源文件读取
//! - `catalog/` - 五关五十题的经典题库常量
//!
//! ### ② 业务能力层（Services）
//! - `tutorial_parser` - 纯函数解析器，文本 → `TutorialRecord`
//! - `JsonWriter` - 写缩进 JSON 能力
//! - `WarnWriter` - 记录缺失源文件能力
//!
//! ### ③ 流程层（Workflow）
//! - `TutorialFlow` - 单个教程的 读取 → 解析 → 写出
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 教程批次、经典批次和全局统计
//!
//! ## 模块结构

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use catalog::ClassicCatalog;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ClassicLevel, ClassicProblem, TutorialProblem, TutorialRecord};
pub use orchestrator::{App, ExtractionSummary};
pub use services::parse_tutorial;
pub use workflow::{ProcessResult, TutorialFlow};
