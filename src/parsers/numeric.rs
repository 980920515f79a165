//! # 数值数据块解析
//!
//! 空白和/或逗号分隔的浮点数矩阵，每行一条记录。
//!
//! ## 规则
//! - 空行和以 `#` 开头的注释行被跳过
//! - 其余每一行必须全部是数值
//! - 所有行的列数必须一致（不一致时视为无法解析，不做截断）
//! - 只使用前两列作为 x 和 y
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `parsers/labeled.rs` 使用

use super::{ParsedTable, StrategyOutcome};
use crate::error::LoadErrorKind;

/// 注释行前缀
const COMMENT_PREFIX: char = '#';

/// 解析得到的矩形数值矩阵
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBlock {
    rows: Vec<Vec<f64>>,
}

impl NumericBlock {
    /// 取前两列作为 (x, y)
    pub fn into_xy(self) -> (Vec<f64>, Vec<f64>) {
        self.rows.into_iter().map(|row| (row[0], row[1])).unzip()
    }
}

/// 按空白和逗号切分
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// 整行均为数值时返回该行，空行返回 None
pub fn parse_numeric_row(line: &str) -> Option<Vec<f64>> {
    let row = tokenize(line)
        .map(|t| t.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

/// 是否为可跳过的行（空行或注释）
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// 解析数值块
///
/// `first_line_no` 是 `lines[0]` 在文件中的行号（0 起），只用于错误信息。
pub fn parse_block(lines: &[&str], first_line_no: usize) -> Result<NumericBlock, LoadErrorKind> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut columns = 0;

    for (offset, line) in lines.iter().enumerate() {
        if is_skippable(line) {
            continue;
        }

        let line_no = first_line_no + offset + 1;
        let row = parse_numeric_row(line).ok_or_else(|| {
            LoadErrorKind::UnparsableFormat(format!("line {} is not numeric", line_no))
        })?;

        if rows.is_empty() {
            columns = row.len();
        } else if row.len() != columns {
            return Err(LoadErrorKind::UnparsableFormat(format!(
                "line {} has {} columns, expected {}",
                line_no,
                row.len(),
                columns
            )));
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(LoadErrorKind::UnparsableFormat(
            "empty data block".to_string(),
        ));
    }

    if columns < 2 {
        return Err(LoadErrorKind::InsufficientColumns { found: columns });
    }

    Ok(NumericBlock { rows })
}

/// 纯数值策略：整个文件作为数值矩阵，无标签
pub fn parse_plain(content: &str) -> StrategyOutcome {
    let lines: Vec<&str> = content.lines().collect();

    if !lines.iter().any(|l| parse_numeric_row(l).is_some()) {
        return StrategyOutcome::NotRecognized;
    }

    match parse_block(&lines, 0) {
        Ok(block) => StrategyOutcome::Parsed(ParsedTable {
            header: None,
            block,
        }),
        Err(reason) => StrategyOutcome::Rejected(reason),
    }
}
