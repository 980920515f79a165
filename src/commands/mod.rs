//! # 命令执行模块
//!
//! 实现绘图命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `analysis/`, `plot/`, `utils/`
//! - 子模块: plot

pub mod plot;

use crate::cli::Cli;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    plot::execute(cli)
}
