//! # 工具函数模块
//!
//! 提供美化输出、进度条、文件名格式化等工具。
//!
//! ## 依赖关系
//! - 被 `menu/`, `actions/`, `batch/` 模块使用
//! - 子模块: output, progress, format

pub mod format;
pub mod output;
pub mod progress;
