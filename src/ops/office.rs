//! # LibreOffice 子进程边界
//!
//! 以无头模式调用 LibreOffice 将 office 文档转为 PDF。
//! 可用性在启动时通过版本查询探测一次。
//!
//! ## 依赖关系
//! - 被 `config.rs`（探测）与 `actions/convert.rs`（转换）使用
//! - 使用 `std::process::Command`

use crate::error::{PdfifyError, Result};

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const LIBREOFFICE: &str = "libreoffice";

/// 探测 LibreOffice 是否可用
pub fn probe() -> bool {
    Command::new(LIBREOFFICE)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// 将一个 office 文档转换为 PDF，返回生成文件的路径
///
/// LibreOffice 将输出写入 `output_dir` 下的 `<stem>.pdf`。
pub fn convert_to_pdf(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let output = Command::new(LIBREOFFICE)
        .args(["--headless", "--convert-to", "pdf"])
        .arg(input)
        .arg("--outdir")
        .arg(output_dir)
        .output()
        .map_err(|_| PdfifyError::CommandNotFound {
            command: LIBREOFFICE.to_string(),
        })?;

    if !output.status.success() {
        return Err(PdfifyError::CommandFailed {
            command: format!("{} --headless --convert-to pdf", LIBREOFFICE),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| PdfifyError::InvalidArgument(format!("bad input path: {}", input.display())))?;
    let produced = output_dir.join(format!("{}.pdf", stem));

    // LibreOffice 在部分失败场景下仍返回 0，以输出文件存在与否为准
    if produced.exists() {
        Ok(produced)
    } else {
        Err(PdfifyError::CommandFailed {
            command: format!("{} --headless --convert-to pdf", LIBREOFFICE),
            stderr: format!("no output produced for {}", input.display()),
        })
    }
}
