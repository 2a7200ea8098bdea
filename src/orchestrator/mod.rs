//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 整体批处理
//! - 持有配置和经典题库
//! - 依次运行教程批次和经典批次
//! - 输出全局统计信息
//!
//! ### `tutorial_processor` - 教程批次
//! - 按配置顺序遍历教程标识
//! - 每个标识交给 `workflow::TutorialFlow`
//! - 缺失的源文件只记录警告，不中断批次
//!
//! ### `classic_processor` - 经典批次
//! - 按关卡升序写出 `level-<N>.json`
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor
//!     ↓
//! tutorial_processor / classic_processor
//!     ↓
//! workflow::TutorialFlow (处理单个教程)
//!     ↓
//! services (解析 / 写 JSON / 写警告)
//! ```
//!
//! 全程单线程顺序执行，处理顺序固定。

pub mod batch_processor;
pub mod classic_processor;
pub mod tutorial_processor;

pub use batch_processor::{App, ExtractionSummary};
pub use classic_processor::{process_classic_levels, ClassicStats};
pub use tutorial_processor::{process_tutorials, TutorialStats};
