//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `menu/`, `actions/`, `batch/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印标题栏（主菜单与各操作页顶部）
pub fn print_banner(action: &str) {
    let title = if action.is_empty() {
        " pdfify v0.1 ".to_string()
    } else {
        format!(" pdfify v0.1 | {} ", action.to_uppercase())
    };
    println!("{}", title.white().on_blue().bold());
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}
