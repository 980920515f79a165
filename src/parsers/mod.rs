//! # 解析器模块
//!
//! 从松散结构的文本文件加载 (x, y) 曲线。
//!
//! 格式探测是一个有序策略列表：每个策略是作用于文件文本的纯函数，
//! 依次尝试，第一个成功的结果生效。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: labels, labeled, numeric

pub mod labeled;
pub mod labels;
pub mod numeric;

use crate::error::LoadErrorKind;
use crate::models::{Curve, CurveLoad, LoadFailure};
use numeric::NumericBlock;
use std::fs;
use std::path::Path;

/// 单个策略的结果
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyOutcome {
    /// 识别并成功解析
    Parsed(ParsedTable),
    /// 文件不是该策略处理的形态
    NotRecognized,
    /// 识别了形态，但数据块无效
    Rejected(LoadErrorKind),
}

/// 策略解析出的表格
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// 标签行去掉标记后的剩余部分
    pub header: Option<String>,
    pub block: NumericBlock,
}

/// 文件格式探测策略
pub type Strategy = fn(&str) -> StrategyOutcome;

/// 按顺序尝试的策略列表
pub const STRATEGIES: &[Strategy] = &[labeled::parse_labeled, numeric::parse_plain];

/// 加载曲线文件
pub fn load_curve(path: &Path) -> CurveLoad {
    if !path.exists() {
        return Err(LoadFailure::new(path, LoadErrorKind::FileMissing));
    }

    let bytes = fs::read(path)
        .map_err(|e| LoadFailure::new(path, LoadErrorKind::ReadFailed(e.to_string())))?;
    let content = String::from_utf8_lossy(&bytes);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_curve_content(&content, &name).map_err(|reason| LoadFailure::new(path, reason))
}

/// 从字符串内容解析曲线
pub fn parse_curve_content(content: &str, name: &str) -> Result<Curve, LoadErrorKind> {
    let table = detect_and_parse(content, STRATEGIES)?;
    let (xlabel, ylabel) = labels::parse_labels(table.header.as_deref());
    let (x, y) = table.block.into_xy();

    Ok(Curve::new(name, x, y).with_labels(xlabel, ylabel))
}

/// 依次尝试策略
///
/// 全部失败时报告第一个识别了文件形态的策略给出的原因。
pub fn detect_and_parse(
    content: &str,
    strategies: &[Strategy],
) -> Result<ParsedTable, LoadErrorKind> {
    let mut first_rejection: Option<LoadErrorKind> = None;

    for strategy in strategies {
        match strategy(content) {
            StrategyOutcome::Parsed(table) => return Ok(table),
            StrategyOutcome::NotRecognized => {}
            StrategyOutcome::Rejected(reason) => {
                first_rejection.get_or_insert(reason);
            }
        }
    }

    Err(first_rejection.unwrap_or_else(|| {
        LoadErrorKind::UnparsableFormat("no label line and no numeric rows found".to_string())
    }))
}
