//! # 图像编码边界
//!
//! 用 `image` 解码、`printpdf` 生成单页 PDF：页面尺寸等于
//! 图像在 72 DPI 下的物理尺寸，图像铺满整页。
//!
//! ## 依赖关系
//! - 被 `actions/convert.rs` 使用
//! - 使用 `image`, `printpdf` crate

use crate::error::{PdfifyError, Result};

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::fs;
use std::path::{Path, PathBuf};

/// 图像按 72 DPI 映射到页面（1 像素 = 1 pt）
const DPI: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// 把一张图像转换为单页 PDF，写出到 `output`
pub fn image_to_pdf(input: &Path, output: &Path) -> Result<PathBuf> {
    let decoded = image::open(input).map_err(|e| PdfifyError::ImageError {
        path: input.display().to_string(),
        reason: e.to_string(),
    })?;

    let width = decoded.width() as usize;
    let height = decoded.height() as usize;
    let rgb = decoded.to_rgb8();

    let page_w = Mm(width as f32 * MM_PER_INCH / DPI);
    let page_h = Mm(height as f32 * MM_PER_INCH / DPI);

    let raw = RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width,
        height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };

    let title = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let mut doc = PdfDocument::new(title);
    let image_id = doc.add_image(&raw);

    let ops = vec![Op::UseXobject {
        id: image_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(0.0)),
            scale_x: None,
            scale_y: None,
            dpi: Some(DPI),
            rotate: None,
        },
    }];
    doc.with_pages(vec![PdfPage::new(page_w, page_h, ops)]);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    fs::write(output, &bytes).map_err(|e| PdfifyError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    Ok(output.to_path_buf())
}
