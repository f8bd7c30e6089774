//! # 运行配置模块
//!
//! 将输入/输出目录和 LibreOffice 探测结果收敛为一个显式配置值，
//! 由 `main.rs` 构造一次后传递给各组件，避免模块级可变状态。
//!
//! ## 依赖关系
//! - 被 `main.rs` 构造
//! - 被 `menu/`, `actions/` 使用
//! - 使用 `ops/office.rs` 探测外部转换器

use crate::cli::Cli;
use crate::error::{PdfifyError, Result};
use crate::ops::office;
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 单次运行的全局配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输入目录（扫描待处理文件）
    pub input_dir: PathBuf,
    /// 输出目录（写入生成的 PDF）
    pub output_dir: PathBuf,
    /// LibreOffice 是否可用（启动时探测一次）
    pub office_available: bool,
}

impl AppConfig {
    /// 从命令行参数构建配置：创建目录、探测外部转换器
    ///
    /// 探测失败不阻塞启动，只打印一次警告；此时 office 文档的
    /// 转换会在分发前作为前置条件检查失败。
    pub fn prepare(cli: &Cli) -> Result<Self> {
        ensure_dir(&cli.input)?;
        ensure_dir(&cli.output)?;

        let office_available = office::probe();
        if !office_available {
            output::print_warning(
                "LibreOffice is not installed or not in PATH; office document conversion is disabled",
            );
        }

        Ok(Self {
            input_dir: cli.input.clone(),
            output_dir: cli.output.clone(),
            office_available,
        })
    }

    /// 输入目录下某文件的完整路径
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    /// 输出目录下某文件的完整路径
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

/// 创建目录（已存在时无操作）
fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| PdfifyError::DirectoryCreateError {
        path: path.display().to_string(),
        source: e,
    })
}
