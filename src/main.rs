//! # pdfify - 终端 PDF 工具箱
//!
//! 把放入输入目录的文件通过菜单批量处理：
//! - `Convert to PDF` - office 文档 / 图像转 PDF（转换后自动压缩）
//! - `Merge PDF`      - 按选择顺序合并多个 PDF
//! - `Compress PDF`   - 逐个重压缩
//! - `Split PDF`      - 按范围 / 按页 / 按固定页数拆分
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs       (命令行参数定义)
//!   ├── config.rs    (运行配置与外部工具探测)
//!   ├── menu/        (交互菜单与选择循环)
//!   ├── selection/   (范围解析与越界过滤)
//!   ├── catalog.rs   (输入目录文件清单)
//!   ├── batch/       (顺序批量执行器)
//!   ├── actions/     (动作适配器)
//!   ├── ops/         (LibreOffice / lopdf / image 边界)
//!   ├── utils/       (输出、进度条、格式化)
//!   └── error.rs     (错误处理)
//! ```

mod actions;
mod batch;
mod catalog;
mod cli;
mod config;
mod error;
mod menu;
mod ops;
mod selection;
mod utils;

use clap::Parser;
use cli::Cli;
use config::AppConfig;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    let config = match AppConfig::prepare(&cli) {
        Ok(config) => config,
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    };

    if let Err(e) = menu::run(&config) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
