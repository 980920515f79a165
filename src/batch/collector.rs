//! # 文件收集器
//!
//! 根据命令行输入路径和模式收集待绘制的文件列表。
//!
//! ## 功能
//! - 文件输入按原顺序保留
//! - 目录输入展开为其中匹配模式的文件，按路径排序
//! - glob 模式匹配（逗号分隔的多模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{EasyplotError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 收集结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CollectedFiles {
    /// 按输入顺序展开的文件
    pub files: Vec<PathBuf>,
    /// 不存在的输入路径
    pub missing: Vec<PathBuf>,
}

/// 文件收集器
pub struct FileCollector {
    /// 输入路径（文件或目录）
    inputs: Vec<PathBuf>,
    /// 目录展开时的匹配模式
    patterns: Vec<glob::Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配任意文件名
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            patterns: Vec::new(),
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != "*")
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    EasyplotError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有文件
    pub fn collect(&self) -> CollectedFiles {
        let mut collected = CollectedFiles::default();

        for input in &self.inputs {
            if input.is_dir() {
                collected.files.extend(self.expand_dir(input));
            } else if input.is_file() {
                collected.files.push(input.clone());
            } else {
                collected.missing.push(input.clone());
            }
        }

        collected
    }

    /// 展开目录
    fn expand_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let walker = if self.recursive {
            WalkDir::new(dir).min_depth(1)
        } else {
            WalkDir::new(dir).min_depth(1).max_depth(1)
        };

        let mut files: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("easyplot-collect-{}-{}", std::process::id(), test));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        for name in ["b.gr", "a.gr", "notes.txt", "nested/c.gr"] {
            fs::write(dir.join(name), "0 1\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_directory_expanded_sorted_flat() {
        let dir = fixture_dir("flat");
        let collected = FileCollector::new(vec![dir.clone()]).collect();

        assert_eq!(
            collected.files,
            vec![dir.join("a.gr"), dir.join("b.gr"), dir.join("notes.txt")]
        );
        assert!(collected.missing.is_empty());
    }

    #[test]
    fn test_pattern_and_recursive() {
        let dir = fixture_dir("recursive");
        let collected = FileCollector::new(vec![dir.clone()])
            .with_pattern("*.gr")
            .unwrap()
            .recursive(true)
            .collect();

        assert_eq!(
            collected.files,
            vec![dir.join("a.gr"), dir.join("b.gr"), dir.join("nested/c.gr")]
        );
    }

    #[test]
    fn test_input_order_and_missing() {
        let dir = fixture_dir("order");
        let missing = dir.join("gone.gr");
        let collected =
            FileCollector::new(vec![dir.join("b.gr"), missing.clone(), dir.join("a.gr")]).collect();

        assert_eq!(collected.files, vec![dir.join("b.gr"), dir.join("a.gr")]);
        assert_eq!(collected.missing, vec![missing]);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileCollector::new(vec![]).with_pattern("[abc");
        assert!(matches!(result, Err(EasyplotError::InvalidArgument(_))));
    }
}
