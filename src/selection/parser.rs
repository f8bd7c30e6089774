//! # 范围表达式解析器
//!
//! 将 `"1,3-5,9"` 形式的文本解析为从零开始的索引序列。
//! 用户输入以 1 为起点，内部索引以 0 为起点。
//!
//! ## 解析规则
//! - 逐个匹配 `<数字>` 或 `<数字>-<数字>` 词元，词元之间的其他文本静默忽略
//! - 单个数字 `n` 产出 `n-1`；范围 `a-b` 升序产出 `[a-1, b-1]`
//! - `b < a` 产出空子区间，不报错
//! - 不去重：重复或重叠的范围按出现顺序重复产出
//! - 不做上界检查，越界过滤交给 `filter.rs`
//!
//! ## 依赖关系
//! - 被 `menu/prompt.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;

/// 解析范围表达式，返回从零开始的索引序列
pub fn parse_ranges(input: &str) -> Vec<usize> {
    let token = Regex::new(r"(\d+)(?:-(\d+))?").unwrap();

    let mut indices = Vec::new();
    for caps in token.captures_iter(input) {
        let start: usize = match caps[1].parse() {
            Ok(v) => v,
            Err(_) => continue, // 溢出的数字必然越界，直接忽略
        };
        let end: usize = match caps.get(2) {
            Some(m) => match m.as_str().parse() {
                Ok(v) => v,
                Err(_) => continue,
            },
            None => start,
        };

        // end < start 时区间为空；用户输入的 0 没有对应的零基索引，同样丢弃
        for value in start..=end {
            if value >= 1 {
                indices.push(value - 1);
            }
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers_and_ranges() {
        assert_eq!(parse_ranges("1,3-5,9"), vec![0, 2, 3, 4, 8]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_ranges(""), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_non_matching_text() {
        assert_eq!(parse_ranges("abc, def"), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_ignores_noise_between_tokens() {
        // 词元之间的杂项文本被静默忽略
        assert_eq!(parse_ranges("1 and also 3"), vec![0, 2]);
    }

    #[test]
    fn test_parse_reversed_range_is_empty() {
        assert_eq!(parse_ranges("5-3"), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        assert_eq!(parse_ranges("2,2,1-3"), vec![1, 1, 0, 1, 2]);
    }

    #[test]
    fn test_parse_drops_zero() {
        assert_eq!(parse_ranges("0"), Vec::<usize>::new());
        // 0-2 中只有 1 和 2 有对应的零基索引
        assert_eq!(parse_ranges("0-2"), vec![0, 1]);
    }
}
