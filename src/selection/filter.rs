//! # 索引校验过滤器
//!
//! 将候选索引列表按目录长度裁剪，映射为对应的目录条目。
//! 越界索引静默丢弃；全部越界得到空选择，由下游按"未选择"处理。
//!
//! ## 依赖关系
//! - 被 `menu/prompt.rs` 使用
//! - 无外部 crate 依赖

/// 过滤越界索引并映射为条目，保持输入顺序与重复次数
pub fn filter_valid<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices
        .iter()
        .filter(|&&index| index < items.len())
        .map(|&index| items[index].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<String> {
        (0..6).map(|i| format!("file{}.pdf", i)).collect()
    }

    #[test]
    fn test_filter_drops_out_of_range() {
        let selected = filter_valid(&catalog(), &[0, 2, 3, 4, 8]);
        assert_eq!(
            selected,
            vec!["file0.pdf", "file2.pdf", "file3.pdf", "file4.pdf"]
        );
    }

    #[test]
    fn test_filter_preserves_order_and_duplicates() {
        let selected = filter_valid(&catalog(), &[3, 1, 3]);
        assert_eq!(selected, vec!["file3.pdf", "file1.pdf", "file3.pdf"]);
    }

    #[test]
    fn test_filter_all_dropped_yields_empty() {
        let selected = filter_valid(&catalog(), &[6, 7, 100]);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        let selected = filter_valid(&catalog(), &[]);
        assert!(selected.is_empty());
    }
}
