//! # 操作适配器模块
//!
//! 每个菜单动作一个适配器，签名统一为
//! `fn(&AppConfig, &[String]) -> Result<ActionOutcome>`，由 `menu/` 分发。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 调用
//! - 使用 `ops/`, `batch/`, `utils/`
//! - 子模块: convert, merge, compress, split

pub mod compress;
pub mod convert;
pub mod merge;
pub mod split;

/// 动作执行结果
///
/// "取消"是显式返回值而不是异常：拆分动作内部的页选择提示
/// 收到哨兵输入时，沿这条路径一直退回顶层菜单。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 动作执行完毕（含部分失败的批次）
    Completed,
    /// 用户在动作内部取消，退回顶层菜单
    Cancelled,
}
