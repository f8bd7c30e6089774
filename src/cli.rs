//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。pdfify 是菜单驱动的交互式程序，
//! 命令行只负责指定输入/输出目录。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `config.rs`

use clap::Parser;
use std::path::PathBuf;

/// pdfify - 终端 PDF 工具箱
#[derive(Parser, Debug)]
#[command(name = "pdfify")]
#[command(version)]
#[command(about = "A terminal toolbox for converting, merging, compressing and splitting PDFs", long_about = None)]
pub struct Cli {
    /// Directory scanned for input files (created if absent)
    #[arg(short, long, default_value = "input")]
    pub input: PathBuf,

    /// Directory receiving generated PDFs (created if absent)
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,
}
