//! # 统一错误处理模块
//!
//! 定义 pdfify 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pdfify 统一错误类型
#[derive(Error, Debug)]
pub enum PdfifyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {path}\nReason: {reason}")]
    DirectoryListError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // PDF / 图像处理错误
    // ─────────────────────────────────────────────────────────────
    #[error("PDF operation failed: {path}\nReason: {reason}")]
    PdfError { path: String, reason: String },

    #[error("Image operation failed: {path}\nReason: {reason}")]
    ImageError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PdfifyError>;
