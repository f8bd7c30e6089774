//! # 外部能力边界模块
//!
//! 封装三类外部依赖：LibreOffice 子进程、lopdf PDF 库、
//! image/printpdf 图像编码。所有适配器都是薄调用，不含业务逻辑。
//!
//! ## 依赖关系
//! - 被 `actions/`, `config.rs` 使用
//! - 子模块: office, pdf, image

pub mod image;
pub mod office;
pub mod pdf;
