//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式：批处理总进度条，
//! 以及转换类操作内部的两步（转换 + 压缩）子进度条。
//!
//! ## 依赖关系
//! - 被 `batch/`, `actions/` 模块使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 创建批处理总进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// 创建单项内部步骤进度条（如 转换 -> 压缩 两步）
pub fn create_step_bar(steps: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(steps);
    pb.set_style(
        ProgressStyle::with_template("  {msg} [{bar:20.green/white}] {pos}/{len}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(message.to_string());
    pb
}
