//! # 合并 PDF
//!
//! 按选择顺序把各文件的全部页串接为一个文档，压缩后落盘；
//! 未压缩的合并产物随即删除，持久化的始终是压缩形态。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 分发（最小选择数 2）
//! - 使用 `ops/pdf.rs`, `utils/progress.rs`

use crate::actions::ActionOutcome;
use crate::config::AppConfig;
use crate::error::{PdfifyError, Result};
use crate::ops::pdf;
use crate::utils::{output, progress};

use std::fs;

/// 未压缩合并产物的文件名
const MERGED_NAME: &str = "merged_output.pdf";

/// 执行合并
pub fn run(config: &AppConfig, files: &[String]) -> Result<ActionOutcome> {
    let pb = progress::create_progress_bar(files.len() as u64, "Merging PDFs");

    let mut merged = pdf::empty_document();
    for file in files {
        let path = config.input_path(file);
        let doc = pdf::load(&path)?;
        pdf::append_document(&mut merged, &doc, &path)?;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let merged_path = config.output_path(MERGED_NAME);
    pdf::save(&mut merged, &merged_path)?;

    let compressed = pdf::compress_file(&merged_path, &config.output_dir)?;
    fs::remove_file(&merged_path).map_err(|e| PdfifyError::FileWriteError {
        path: merged_path.display().to_string(),
        source: e,
    })?;

    output::print_done(&format!(
        "Merged {} files into {}",
        files.len(),
        compressed.display()
    ));
    Ok(ActionOutcome::Completed)
}
