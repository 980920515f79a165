//! # 输入文件收集模块
//!
//! 把命令行给出的文件和目录展开为有序的文件列表。
//!
//! ## 功能
//! - 文件直接保留，目录按模式展开（默认接受任意扩展名）
//! - 可选递归搜索
//! - 不存在的路径被记录并跳过
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

pub mod collector;

pub use collector::{CollectedFiles, FileCollector};
