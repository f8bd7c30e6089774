//! # 交互提示工具
//!
//! 行式读入与选择判定。"取消"不是异常而是显式的判定分支：
//! 哨兵输入 `b` 只退出当前菜单的选择循环，回到上级菜单。
//!
//! ## 依赖关系
//! - 被 `menu/mod.rs`, `actions/split.rs` 使用
//! - 使用 `selection/` 做解析与过滤

use crate::selection;

use std::io::{self, BufRead, Write};

/// 取消当前选择循环的哨兵输入
pub const CANCEL_SENTINEL: &str = "b";

/// 一次选择输入的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDecision<T> {
    /// 用户输入哨兵，退出当前选择循环
    Cancelled,
    /// 解析为空或全部越界，重新提示
    NothingSelected,
    /// 选中数量不足该操作的下限，重新提示
    TooFew { required: usize },
    /// 校验通过的有序选择
    Proceed(Vec<T>),
}

/// 判定一行选择输入
///
/// 解析 -> 越界过滤 -> 数量下限检查，全部为纯函数路径。
pub fn decide_selection<T: Clone>(
    line: &str,
    items: &[T],
    min_items: usize,
) -> SelectionDecision<T> {
    let trimmed = line.trim();
    if trimmed == CANCEL_SENTINEL {
        return SelectionDecision::Cancelled;
    }

    let indices = selection::parse_ranges(trimmed);
    if indices.is_empty() {
        return SelectionDecision::NothingSelected;
    }

    let selected = selection::filter_valid(items, &indices);
    if selected.is_empty() {
        return SelectionDecision::NothingSelected;
    }
    if selected.len() < min_items {
        return SelectionDecision::TooFew {
            required: min_items,
        };
    }

    SelectionDecision::Proceed(selected)
}

/// 打印提示并读取一行；EOF 返回 `None`（按正常退出处理）
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// 读取一个数字选项，空输入或非数字回退到默认值；EOF 返回 `None`
pub fn read_option(prompt: &str, default: usize) -> Option<usize> {
    let line = read_line(prompt)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Some(default);
    }
    Some(trimmed.parse().unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        (1..=6).map(|i| format!("doc{}.pdf", i)).collect()
    }

    #[test]
    fn test_sentinel_cancels() {
        assert_eq!(
            decide_selection("b", &catalog(), 1),
            SelectionDecision::Cancelled
        );
        // 前后空白不影响哨兵识别
        assert_eq!(
            decide_selection("  b \n", &catalog(), 1),
            SelectionDecision::Cancelled
        );
    }

    #[test]
    fn test_garbage_is_nothing_selected() {
        assert_eq!(
            decide_selection("hello", &catalog(), 1),
            SelectionDecision::NothingSelected
        );
        assert_eq!(
            decide_selection("", &catalog(), 1),
            SelectionDecision::NothingSelected
        );
    }

    #[test]
    fn test_all_out_of_range_is_nothing_selected() {
        assert_eq!(
            decide_selection("7,9-12", &catalog(), 1),
            SelectionDecision::NothingSelected
        );
    }

    #[test]
    fn test_merge_requires_two_files() {
        // 合并至少要两个文件：单个选择不触发任何 I/O，回到提示
        assert_eq!(
            decide_selection("1", &catalog(), 2),
            SelectionDecision::TooFew { required: 2 }
        );
    }

    #[test]
    fn test_valid_selection_maps_to_names() {
        let decision = decide_selection("1,3-5,9", &catalog(), 1);
        assert_eq!(
            decision,
            SelectionDecision::Proceed(vec![
                "doc1.pdf".to_string(),
                "doc3.pdf".to_string(),
                "doc4.pdf".to_string(),
                "doc5.pdf".to_string(),
            ])
        );
    }
}
