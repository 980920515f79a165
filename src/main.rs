//! # easyplot - 两列数据快速绘图与比较
//!
//! 读取衍射 / PDF 等两列数据文件，以四种方式比较绘制：
//! 叠加、竖直错开（waterfall）、两文件差值、两两差值矩阵。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (输入文件收集)
//!   │     ├── parsers/   (曲线加载与格式探测)
//!   │     ├── analysis/  (曲线对齐与绘图模式)
//!   │     ├── plot/      (渲染与导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (终端输出)
//!   └── error.rs    (错误处理)
//! ```

mod analysis;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
