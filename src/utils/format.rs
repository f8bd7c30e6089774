//! # 文件名与尺寸格式化工具
//!
//! ## 依赖关系
//! - 被 `menu/`, `actions/` 模块使用
//! - 无外部 crate 依赖

/// 截短文件名以适应显示宽度，必要时在扩展名前插入省略号
///
/// 例如 `shorten_filename("a_very_long_report.docx", 12)` 得到 `"a_ve....docx"` 之类。
pub fn shorten_filename(filename: &str, max_length: usize) -> String {
    let (name, ext) = match filename.rfind('.') {
        Some(pos) => filename.split_at(pos),
        None => (filename, ""),
    };

    // 预留扩展名与 "..." 的宽度；放不下时原样返回
    let budget = max_length.saturating_sub(ext.chars().count() + 3);
    if budget == 0 {
        return filename.to_string();
    }

    if name.chars().count() > budget {
        let head: String = name.chars().take(budget).collect();
        format!("{}...{}", head, ext)
    } else {
        filename.to_string()
    }
}

/// 人类可读的文件大小
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_long_filename() {
        let short = shorten_filename("a_very_long_report_name.docx", 12);
        assert!(short.len() <= "a_very_long_report_name.docx".len());
        assert!(short.contains("..."));
        assert!(short.ends_with(".docx"));
    }

    #[test]
    fn test_shorten_keeps_short_filename() {
        assert_eq!(shorten_filename("a.pdf", 12), "a.pdf");
    }

    #[test]
    fn test_shorten_without_extension() {
        let short = shorten_filename("averyveryverylongname", 10);
        assert!(short.contains("..."));
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
