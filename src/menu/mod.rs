//! # 交互菜单模块
//!
//! 主菜单读-算-提示循环，以及通用的"列目录 -> 选择 -> 执行"
//! 操作流程。所有菜单动作共用同一个流程，只在文件类型、
//! 最小选择数和动作函数上不同。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `catalog.rs`, `actions/`, `utils/`
//! - 子模块: prompt

pub mod prompt;

use crate::actions::{self, ActionOutcome};
use crate::catalog::{self, CatalogEntry};
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::format::{format_size, shorten_filename};
use crate::utils::output;

use colored::Colorize;
use console::Term;
use tabled::{Table, Tabled};

/// 顶层菜单项
const MENUS: [&str; 4] = ["Convert to PDF", "Merge PDF", "Compress PDF", "Split PDF"];

/// 转换操作接受的输入类型
const CONVERT_TYPES: &[&str] = &["png", "jpeg", "jpg", "docx", "doc", "ppt", "pptx"];
/// 其余操作只处理 PDF
const PDF_TYPES: &[&str] = &["pdf"];

/// 文件列表的表格行
#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// 主菜单循环
///
/// `0` 或 stdin EOF 正常退出（退出码 0）。
pub fn run(config: &AppConfig) -> Result<()> {
    let term = Term::stdout();

    loop {
        term.clear_screen().ok();
        output::print_banner("");
        print_menu();

        let choice = match prompt::read_option("Choose an option to start: ", 1) {
            Some(c) => c,
            None => break,
        };

        let outcome = match choice {
            1 => process_operation(
                config,
                MENUS[0],
                CONVERT_TYPES,
                1,
                "Enter at least one file to convert",
                actions::convert::run,
            ),
            2 => process_operation(
                config,
                MENUS[1],
                PDF_TYPES,
                2,
                "Enter at least two PDFs to merge",
                actions::merge::run,
            ),
            3 => process_operation(
                config,
                MENUS[2],
                PDF_TYPES,
                1,
                "Enter at least one PDF to compress",
                actions::compress::run,
            ),
            4 => process_operation(
                config,
                MENUS[3],
                PDF_TYPES,
                1,
                "Enter at least one PDF to split",
                actions::split::run,
            ),
            0 => {
                output::print_info("Quitting...");
                break;
            }
            _ => Ok(()),
        };
        outcome?;
    }

    Ok(())
}

/// 打印顶层菜单
fn print_menu() {
    for (i, entry) in MENUS.iter().enumerate() {
        println!("{}", format!("{}. {}", i + 1, entry).yellow());
    }
    println!("{}", "0. Exit".red());
}

/// 通用操作流程：列目录 -> 选择循环 -> 执行动作
///
/// 哨兵输入 `b` 只退出本操作的选择循环；动作失败打印错误后
/// 重新提示，不终止进程。
fn process_operation(
    config: &AppConfig,
    title: &str,
    file_types: &[&str],
    min_files: usize,
    too_few_message: &str,
    action: fn(&AppConfig, &[String]) -> Result<ActionOutcome>,
) -> Result<()> {
    let term = Term::stdout();
    term.clear_screen().ok();
    output::print_banner(title);

    // 每次进入菜单重新读取目录，目录是唯一事实来源
    let entries = catalog::list_files(&config.input_dir, file_types)?;
    if entries.is_empty() {
        output::print_warning(&format!(
            "No {} files found in {}",
            file_types.join(", "),
            config.input_dir.display()
        ));
        let _ = prompt::read_line("Press Enter to return to the menu...");
        return Ok(());
    }

    print_catalog(&entries);
    let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

    loop {
        let line = match prompt::read_line(
            "Enter file number(s) to process [e.g., 1,3-5; 'b' to go back]: ",
        ) {
            Some(l) => l,
            None => return Ok(()),
        };

        match prompt::decide_selection(&line, &names, min_files) {
            prompt::SelectionDecision::Cancelled => return Ok(()),
            prompt::SelectionDecision::NothingSelected => {
                output::print_warning("No files selected.");
            }
            prompt::SelectionDecision::TooFew { .. } => {
                output::print_error(too_few_message);
            }
            prompt::SelectionDecision::Proceed(selected) => {
                // 库/进程失败按可恢复处理：报告后回到选择提示
                match action(config, &selected) {
                    Ok(ActionOutcome::Cancelled) => return Ok(()),
                    Ok(ActionOutcome::Completed) => {}
                    Err(e) => output::print_error(&format!("{}", e)),
                }
            }
        }
    }
}

/// 以表格形式打印文件目录，编号从 1 开始
fn print_catalog(entries: &[CatalogEntry]) {
    let rows: Vec<FileRow> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| FileRow {
            index: i + 1,
            name: shorten_filename(&entry.name, 50),
            size: format_size(entry.size),
        })
        .collect();
    println!("{}", Table::new(rows));
}
