//! # 拆分 PDF
//!
//! 对每个选中的 PDF 交互式选择拆分方式：
//! 1. 按页范围拆分（每个选中页一个文件）
//! 2. 每页一个文件
//! 3. 按固定页数分块（最后一块可以更短）
//!
//! 页索引内部从零开始，所有展示给用户的页号从 1 开始。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs` 分发
//! - 使用 `ops/pdf.rs` 抽取页面
//! - 使用 `menu/prompt.rs` 读取子选项与页范围

use crate::actions::ActionOutcome;
use crate::config::AppConfig;
use crate::error::Result;
use crate::menu::prompt::{self, SelectionDecision};
use crate::ops::pdf;
use crate::utils::output;

use lopdf::Document;
use std::path::Path;

/// 执行拆分
///
/// 单个文件读取失败按可恢复处理：报告后继续下一个文件。
/// 页选择提示中的哨兵输入沿 `Cancelled` 一直退回顶层菜单。
pub fn run(config: &AppConfig, files: &[String]) -> Result<ActionOutcome> {
    for file in files {
        let input = config.input_path(file);
        let doc = match pdf::load(&input) {
            Ok(doc) => doc,
            Err(e) => {
                output::print_error(&format!("{}", e));
                continue;
            }
        };
        let total = pdf::page_count(&doc);

        output::print_info(&format!("Selected file: {} ({} pages)", file, total));
        println!("1. Split by range (e.g., 1-3)");
        println!("2. Split pages into separate PDFs");
        println!("3. Split by a number of pages per file");

        let option = match prompt::read_option("Choose a split option: ", 1) {
            Some(o) => o,
            None => return Ok(ActionOutcome::Cancelled),
        };

        let outcome = match option {
            1 => split_by_ranges(config, file, &doc, total)?,
            2 => split_per_page(config, file, &doc, total)?,
            3 => split_by_chunks(config, file, &doc, total)?,
            _ => {
                output::print_warning("Invalid split option selected. Skipping file.");
                ActionOutcome::Completed
            }
        };
        if outcome == ActionOutcome::Cancelled {
            return Ok(ActionOutcome::Cancelled);
        }
    }
    Ok(ActionOutcome::Completed)
}

/// 子模式 1：按页范围拆分，每个选中页写出一个单页文件
fn split_by_ranges(
    config: &AppConfig,
    file: &str,
    doc: &Document,
    total: usize,
) -> Result<ActionOutcome> {
    let pages: Vec<usize> = (0..total).collect();

    loop {
        let line = match prompt::read_line("Enter page range(s) to split [e.g., 1-3,5]: ") {
            Some(l) => l,
            None => return Ok(ActionOutcome::Cancelled),
        };

        match prompt::decide_selection(&line, &pages, 1) {
            SelectionDecision::Cancelled => return Ok(ActionOutcome::Cancelled),
            SelectionDecision::NothingSelected | SelectionDecision::TooFew { .. } => {
                output::print_warning("No pages selected.");
            }
            SelectionDecision::Proceed(selected) => {
                for (i, &page) in selected.iter().enumerate() {
                    let name = format!("{}_split_{}.pdf", stem(file), i + 1);
                    write_pages(config, file, doc, &[page], &name)?;
                    output::print_success(&format!(
                        "Split page {} into {}",
                        page + 1,
                        config.output_path(&name).display()
                    ));
                }
                return Ok(ActionOutcome::Completed);
            }
        }
    }
}

/// 子模式 2：每页一个文件
fn split_per_page(
    config: &AppConfig,
    file: &str,
    doc: &Document,
    total: usize,
) -> Result<ActionOutcome> {
    for page in 0..total {
        let name = format!("{}_page_{}.pdf", stem(file), page + 1);
        write_pages(config, file, doc, &[page], &name)?;
        output::print_success(&format!(
            "Split page {} into {}",
            page + 1,
            config.output_path(&name).display()
        ));
    }
    Ok(ActionOutcome::Completed)
}

/// 子模式 3：按固定页数分块
fn split_by_chunks(
    config: &AppConfig,
    file: &str,
    doc: &Document,
    total: usize,
) -> Result<ActionOutcome> {
    let size = match prompt::read_option("Enter the number of pages per file: ", 1) {
        Some(s) => s.max(1),
        None => return Ok(ActionOutcome::Cancelled),
    };

    for (i, (start, end)) in chunk_plan(total, size).into_iter().enumerate() {
        let pages: Vec<usize> = (start..=end).collect();
        let name = format!("{}_split_{}.pdf", stem(file), i + 1);
        write_pages(config, file, doc, &pages, &name)?;
        output::print_success(&format!(
            "Split pages {}-{} into {}",
            start + 1,
            end + 1,
            config.output_path(&name).display()
        ));
    }
    Ok(ActionOutcome::Completed)
}

/// 分块计划：零基闭区间 `(start, end)`，最后一块可以不足 `size` 页
pub fn chunk_plan(total_pages: usize, size: usize) -> Vec<(usize, usize)> {
    if size == 0 {
        return Vec::new();
    }
    (0..total_pages)
        .step_by(size)
        .map(|start| (start, (start + size - 1).min(total_pages - 1)))
        .collect()
}

/// 抽取页集合并写出到输出目录
fn write_pages(
    config: &AppConfig,
    file: &str,
    doc: &Document,
    pages: &[usize],
    name: &str,
) -> Result<()> {
    let context = config.input_path(file);
    let mut out = pdf::extract_pages(doc, pages, &context)?;
    pdf::save(&mut out, &config.output_path(name))
}

/// 不含扩展名的文件名
fn stem(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_plan_last_chunk_shorter() {
        // 10 页、每块 3 页 -> [1-3],[4-6],[7-9],[10-10]（展示为一基）
        assert_eq!(
            chunk_plan(10, 3),
            vec![(0, 2), (3, 5), (6, 8), (9, 9)]
        );
    }

    #[test]
    fn test_chunk_plan_exact_division() {
        assert_eq!(chunk_plan(6, 3), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn test_chunk_plan_oversized_chunk() {
        assert_eq!(chunk_plan(3, 5), vec![(0, 2)]);
    }

    #[test]
    fn test_chunk_plan_empty_document() {
        assert!(chunk_plan(0, 3).is_empty());
    }

    #[test]
    fn test_stem_strips_extension() {
        assert_eq!(stem("report.pdf"), "report");
        assert_eq!(stem("archive.tar.pdf"), "archive.tar");
    }
}
