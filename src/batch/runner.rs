//! # 批量执行器
//!
//! 顺序执行批量处理任务：对选择列表中的每个文件调用一次处理函数，
//! 总进度条每完成一项前进一格。不支持的文件类型由处理函数返回
//! `Skipped`，只提示不中断；单项库/进程失败记为 `Failed`，
//! 批次继续执行，结束后统一汇报。
//!
//! ## 依赖关系
//! - 被 `actions/` 模块调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::{output, progress};

use indicatif::MultiProgress;

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功（输出路径或描述）
    Success(String),
    /// 跳过（如不支持的文件类型）
    Skipped(String),
    /// 处理失败
    Failed(String, String), // (文件名, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并单项结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed(file, err) => {
                self.failed += 1;
                self.failures.push((file, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 顺序处理文件列表
///
/// 处理函数额外拿到 `MultiProgress`，多步骤的单项（如先转换再压缩）
/// 可以在其上挂自己的子进度条。
pub fn run_batch<F>(label: &str, files: &[String], mut processor: F) -> BatchResult
where
    F: FnMut(&str, &MultiProgress) -> ProcessResult,
{
    let multi = MultiProgress::new();
    let pb = multi.add(progress::create_progress_bar(files.len() as u64, label));

    let mut batch_result = BatchResult::default();
    for file in files {
        let result = processor(file, &multi);

        match &result {
            ProcessResult::Skipped(msg) => {
                let msg = msg.clone();
                pb.suspend(|| output::print_skip(&msg));
            }
            ProcessResult::Failed(file, err) => {
                let line = format!("{}: {}", file, err);
                pb.suspend(|| output::print_error(&line));
            }
            ProcessResult::Success(_) => {}
        }

        batch_result.merge(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    batch_result
}

/// 打印批次汇总
pub fn print_summary(label: &str, result: &BatchResult) {
    output::print_done(&format!(
        "{}: {} succeeded, {} skipped, {} failed (total {})",
        label,
        result.success,
        result.skipped,
        result.failed,
        result.total()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_counts_outcomes() {
        let mut result = BatchResult::default();
        result.merge(ProcessResult::Success("a.pdf".to_string()));
        result.merge(ProcessResult::Skipped("b.txt".to_string()));
        result.merge(ProcessResult::Failed("c.pdf".to_string(), "boom".to_string()));

        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total(), 3);
        assert_eq!(result.failures, vec![("c.pdf".to_string(), "boom".to_string())]);
    }

    #[test]
    fn test_run_batch_continues_after_skip_and_failure() {
        let files: Vec<String> = ["a.txt", "b.pdf", "c.pdf"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut seen = Vec::new();
        let result = run_batch("Testing", &files, |file, _multi| {
            seen.push(file.to_string());
            if file.ends_with(".txt") {
                ProcessResult::Skipped(format!("Skipping unsupported file format: {}", file))
            } else if file == "b.pdf" {
                ProcessResult::Failed(file.to_string(), "corrupt".to_string())
            } else {
                ProcessResult::Success(file.to_string())
            }
        });

        // 跳过与失败都不中断批次
        assert_eq!(seen, files);
        assert_eq!(result.success, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
    }
}
