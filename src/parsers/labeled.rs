//! # 带标签表格格式解析器
//!
//! 由 `#L` 标签行给出坐标轴名称、其后跟随数值数据块的文本格式
//! （PDFgetX3 `.gr`、SPEC 导出等）。
//!
//! ## 格式说明
//! ```text
//! [任意元数据行]
//! #L r($\AA$)  G($\AA^{-2}$)
//! 0.00  0.000
//! 0.01  0.012
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `parsers/numeric.rs` 解析数据块

use super::numeric::{parse_block, parse_numeric_row};
use super::{ParsedTable, StrategyOutcome};

/// 标签行前缀
pub const LABEL_MARKER: &str = "#L";

/// 文件结构：标签行内容和数据起始行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledLayout {
    /// 标签行去掉标记后的剩余部分
    pub header: String,
    /// 第一行数据的行号（0 起）
    pub data_start: usize,
}

/// 标签行去掉标记后的剩余部分
///
/// 标记后必须是空白、逗号或行尾，`#Lambda = 0.1665` 之类的注释不算标签行。
pub fn strip_marker(trimmed: &str) -> Option<&str> {
    let rest = trimmed.strip_prefix(LABEL_MARKER)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() || c == ',' => Some(rest),
        Some(_) => None,
    }
}

/// 扫描标签行和数据起始行
///
/// 数据出现前若有多个标签行，以最后一个为准。
pub fn find_layout(lines: &[&str]) -> Option<LabeledLayout> {
    let mut pending_header: Option<&str> = None;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some(rest) = strip_marker(trimmed) {
            pending_header = Some(rest);
            continue;
        }

        if let Some(header) = pending_header {
            if parse_numeric_row(trimmed).is_some() {
                return Some(LabeledLayout {
                    header: header.trim().to_string(),
                    data_start: i,
                });
            }
        }
    }

    None
}

/// 带标签表格策略
pub fn parse_labeled(content: &str) -> StrategyOutcome {
    let lines: Vec<&str> = content.lines().collect();

    let layout = match find_layout(&lines) {
        Some(layout) => layout,
        None => return StrategyOutcome::NotRecognized,
    };

    match parse_block(&lines[layout.data_start..], layout.data_start) {
        Ok(block) => StrategyOutcome::Parsed(ParsedTable {
            header: Some(layout.header),
            block,
        }),
        Err(reason) => StrategyOutcome::Rejected(reason),
    }
}
