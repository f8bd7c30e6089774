//! # 选择解析模块
//!
//! 将用户输入的范围表达式转换为经过校验的选择列表。
//!
//! ## 功能
//! - 范围表达式解析（`"1,3-5,9"` -> 从零开始的索引序列）
//! - 索引越界过滤（保序、保重复）
//!
//! ## 依赖关系
//! - 被 `menu/prompt.rs` 使用
//! - 子模块: parser, filter

pub mod filter;
pub mod parser;

pub use filter::filter_valid;
pub use parser::parse_ranges;
