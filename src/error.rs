//! # 统一错误处理模块
//!
//! 定义 easyplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分两层：
//! - `LoadErrorKind`: 单个文件的加载失败，总是在本地恢复（报告后跳过）
//! - `EasyplotError`: 命令级错误，终止当前绘图模式
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 使用 `models/curve.rs` 的 LoadFailure

use crate::models::LoadFailure;
use thiserror::Error;

/// 单个数据文件的加载失败原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadErrorKind {
    #[error("file does not exist")]
    FileMissing,

    #[error("cannot read file: {0}")]
    ReadFailed(String),

    #[error("no labeled or plain numeric data block could be parsed ({0})")]
    UnparsableFormat(String),

    #[error("data block has {found} column(s), at least 2 are required")]
    InsufficientColumns { found: usize },
}

/// easyplot 统一错误类型
#[derive(Error, Debug)]
pub enum EasyplotError {
    // ─────────────────────────────────────────────────────────────
    // 绘图模式错误
    // ─────────────────────────────────────────────────────────────
    #[error("{mode} requires exactly {expected} files, got {found}")]
    ArityError {
        mode: String,
        expected: usize,
        found: usize,
    },

    #[error("Nothing to plot: {mode} produced no series ({reason})")]
    EmptyResult { mode: String, reason: String },

    #[error("Cannot load '{}': {}", .0.source_path.display(), .0.reason)]
    LoadFailed(LoadFailure),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<LoadFailure> for EasyplotError {
    fn from(failure: LoadFailure) -> Self {
        EasyplotError::LoadFailed(failure)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, EasyplotError>;
