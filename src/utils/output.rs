//! # 终端诊断输出
//!
//! 统一的带标签输出样式。诊断信息按输入顺序写出，错误写到 stderr。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use crate::models::LoadFailure;

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

fn tagged(tag: ColoredString, msg: &str) {
    println!("{} {}", tag, msg);
}

/// 成功
pub fn print_success(msg: &str) {
    tagged("[OK]".green().bold(), msg);
}

/// 错误（stderr）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 警告
pub fn print_warning(msg: &str) {
    tagged("[WARN]".yellow().bold(), msg);
}

/// 信息
pub fn print_info(msg: &str) {
    tagged("[*]".blue().bold(), msg);
}

/// 跳过的输入
pub fn print_skip(msg: &str) {
    tagged("[SKIP]".dimmed(), msg);
}

/// 加载失败的文件：路径和原因
pub fn print_load_failure(failure: &LoadFailure) {
    let reason = format!("({})", failure.reason);
    tagged(
        "[SKIP]".dimmed(),
        &format!("{} {}", failure.source_path.display(), reason.yellow()),
    );
}

/// 完成
pub fn print_done(msg: &str) {
    tagged("[DONE]".green().bold(), msg);
}

/// 标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("\n{}\n  {}\n{}\n", rule.dimmed(), title.bold(), rule.dimmed());
}

/// 分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
