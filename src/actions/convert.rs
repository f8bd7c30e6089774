//! # 转换为 PDF
//!
//! 按扩展名分发：office 文档走 LibreOffice 子进程，图像走
//! image/printpdf。每项两步（转换 -> 压缩），成功后删除未压缩
//! 的中间 PDF；不支持的类型跳过，不中断批次。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 分发
//! - 使用 `ops/office.rs`, `ops/image.rs`, `ops/pdf.rs`
//! - 使用 `batch/runner.rs` 执行批次

use crate::actions::ActionOutcome;
use crate::batch::runner::{self, ProcessResult};
use crate::config::AppConfig;
use crate::error::{PdfifyError, Result};
use crate::ops::{image, office, pdf};
use crate::utils::format::shorten_filename;
use crate::utils::progress;

use indicatif::{MultiProgress, ProgressBar};
use std::fs;
use std::path::PathBuf;

/// 转换输入的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertKind {
    /// office 文档，走 LibreOffice
    Office,
    /// 位图图像，走 image/printpdf
    Image,
}

/// 按扩展名（小写化）识别转换种类；无法识别返回 `None`
pub fn classify(filename: &str) -> Option<ConvertKind> {
    let ext = filename.rsplit('.').next()?.to_lowercase();
    match ext.as_str() {
        "doc" | "docx" | "ppt" | "pptx" => Some(ConvertKind::Office),
        "png" | "jpg" | "jpeg" => Some(ConvertKind::Image),
        _ => None,
    }
}

/// 执行转换批次
pub fn run(config: &AppConfig, files: &[String]) -> Result<ActionOutcome> {
    let result = runner::run_batch("Processing files", files, |file, multi| {
        let kind = match classify(file) {
            Some(kind) => kind,
            None => {
                return ProcessResult::Skipped(format!(
                    "Skipping unsupported file format: {}",
                    file
                ))
            }
        };

        match convert_one(config, file, kind, multi) {
            Ok(output) => ProcessResult::Success(output.display().to_string()),
            Err(e) => ProcessResult::Failed(file.to_string(), e.to_string()),
        }
    });

    runner::print_summary("Convert", &result);
    Ok(ActionOutcome::Completed)
}

/// 转换单个文件：转换 -> 压缩 -> 删除中间产物
fn convert_one(
    config: &AppConfig,
    file: &str,
    kind: ConvertKind,
    multi: &MultiProgress,
) -> Result<PathBuf> {
    // 前置条件：office 转换依赖启动时的 LibreOffice 探测结果
    if kind == ConvertKind::Office && !config.office_available {
        return Err(PdfifyError::CommandNotFound {
            command: "libreoffice".to_string(),
        });
    }

    let short = shorten_filename(file, 12);
    let steps = multi.add(progress::create_step_bar(2, &format!("Converting {}", short)));

    let outcome = convert_steps(config, file, kind, &steps);
    steps.finish_and_clear();
    outcome
}

fn convert_steps(
    config: &AppConfig,
    file: &str,
    kind: ConvertKind,
    steps: &ProgressBar,
) -> Result<PathBuf> {
    let input = config.input_path(file);

    let intermediate = match kind {
        ConvertKind::Office => office::convert_to_pdf(&input, &config.output_dir)?,
        ConvertKind::Image => {
            let target = config.output_path(&replace_extension(file, "pdf"));
            image::image_to_pdf(&input, &target)?
        }
    };
    steps.inc(1);

    let compressed = pdf::compress_file(&intermediate, &config.output_dir)?;
    steps.inc(1);

    // 持久化的只有压缩后的产物
    fs::remove_file(&intermediate).map_err(|e| PdfifyError::FileWriteError {
        path: intermediate.display().to_string(),
        source: e,
    })?;

    Ok(compressed)
}

/// 替换文件名的扩展名
fn replace_extension(filename: &str, new_ext: &str) -> String {
    match filename.rfind('.') {
        Some(pos) => format!("{}.{}", &filename[..pos], new_ext),
        None => format!("{}.{}", filename, new_ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_office_documents() {
        assert_eq!(classify("report.docx"), Some(ConvertKind::Office));
        assert_eq!(classify("slides.PPTX"), Some(ConvertKind::Office));
        assert_eq!(classify("old.doc"), Some(ConvertKind::Office));
    }

    #[test]
    fn test_classify_images() {
        assert_eq!(classify("scan.png"), Some(ConvertKind::Image));
        assert_eq!(classify("photo.JPEG"), Some(ConvertKind::Image));
    }

    #[test]
    fn test_classify_unsupported_is_none() {
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(classify("archive"), None);
    }

    #[test]
    fn test_replace_extension() {
        assert_eq!(replace_extension("scan.v2.png", "pdf"), "scan.v2.pdf");
        assert_eq!(replace_extension("bare", "pdf"), "bare.pdf");
    }

    #[test]
    fn test_unsupported_file_does_not_halt_batch() {
        // 不支持的扩展名在批次中被跳过，后续项继续处理
        let config = AppConfig {
            input_dir: "input".into(),
            output_dir: "output".into(),
            office_available: false,
        };
        let files = vec!["notes.txt".to_string(), "readme.md".to_string()];

        let result = run(&config, &files).unwrap();
        assert_eq!(result, ActionOutcome::Completed);
    }
}
