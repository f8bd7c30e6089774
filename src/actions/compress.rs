//! # 压缩 PDF
//!
//! 对每个选中的 PDF 独立重压缩，输出 `compressed_<原名>` 到
//! 输出目录；输入文件保持不动。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 分发
//! - 使用 `ops/pdf.rs`, `batch/runner.rs`

use crate::actions::ActionOutcome;
use crate::batch::runner::{self, ProcessResult};
use crate::config::AppConfig;
use crate::error::Result;
use crate::ops::pdf;

/// 执行压缩批次
pub fn run(config: &AppConfig, files: &[String]) -> Result<ActionOutcome> {
    let result = runner::run_batch("Compressing PDFs", files, |file, _multi| {
        let input = config.input_path(file);
        match pdf::compress_file(&input, &config.output_dir) {
            Ok(output) => ProcessResult::Success(output.display().to_string()),
            Err(e) => ProcessResult::Failed(file.to_string(), e.to_string()),
        }
    });

    runner::print_summary("Compress", &result);
    Ok(ActionOutcome::Completed)
}
