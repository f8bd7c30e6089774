//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 严格顺序执行（批处理项之间无并发）
//! - 总进度条与单项子步骤进度条
//! - 按项收集成功/跳过/失败并汇总报告
//!
//! ## 依赖关系
//! - 被各 `actions/` 模块使用
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{run_batch, BatchResult, ProcessResult};
