//! # 文件目录模块
//!
//! 列出输入目录中匹配指定后缀的文件。每次进入菜单时重新读取，
//! 不缓存；目录本身是唯一事实来源。
//!
//! ## 设计要点
//! - 后缀匹配对大小写不敏感（`.PNG` 匹配 `png`）
//! - 按文件名字典序排序，保证选择编号跨平台稳定
//!
//! ## 依赖关系
//! - 被 `menu/` 模块使用
//! - 使用 `walkdir` crate

use crate::error::{PdfifyError, Result};

use std::path::Path;
use walkdir::WalkDir;

/// 目录中的一个可处理文件
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    /// 文件名（不含目录）
    pub name: String,
    /// 文件大小（字节）
    pub size: u64,
}

/// 列出目录下后缀匹配的文件，按文件名排序
pub fn list_files(dir: &Path, suffixes: &[&str]) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| PdfifyError::DirectoryListError {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(n) => n.to_string(),
            None => continue, // 非 UTF-8 文件名不参与目录
        };

        if matches_suffix(&name, suffixes) {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            entries.push(CatalogEntry { name, size });
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// 小写化后做后缀匹配
fn matches_suffix(name: &str, suffixes: &[&str]) -> bool {
    let lower = name.to_lowercase();
    suffixes
        .iter()
        .any(|suffix| lower.ends_with(&format!(".{}", suffix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_list_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(dir.path().join("a.pdf"), b"xy").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let entries = list_files(dir.path(), &["pdf"]).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert_eq!(entries[0].size, 2);
    }

    #[test]
    fn test_list_files_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("SCAN.PNG"), b"x").unwrap();

        let entries = list_files(dir.path(), &["png"]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "SCAN.PNG");
    }

    #[test]
    fn test_list_files_ignores_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        fs::write(dir.path().join("real.pdf"), b"x").unwrap();

        let entries = list_files(dir.path(), &["pdf"]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "real.pdf");
    }

    #[test]
    fn test_list_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let entries = list_files(dir.path(), &["pdf"]).unwrap();
        assert!(entries.is_empty());
    }
}
