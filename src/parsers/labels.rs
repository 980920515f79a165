//! # 坐标轴标签解析
//!
//! 从标签行提取 x / y 轴名称，并把 LaTeX 风格的埃单位标记替换为 Unicode。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `parsers/numeric.rs` 的 tokenize

use super::numeric::tokenize;
use crate::models::curve::{DEFAULT_XLABEL, DEFAULT_YLABEL};

/// 单位标记替换表
const UNIT_SUBSTITUTIONS: &[(&str, &str)] = &[
    (r"($\AA$)", "(Å)"),
    (r"($\AA^{-1}$)", "(Å⁻¹)"),
    (r"($\AA^{-2}$)", "(Å⁻²)"),
    (r"($\AA^{-3}$)", "(Å⁻³)"),
];

/// 解析标签行，返回 (xlabel, ylabel)
///
/// 以 `(` 开头的记号是前一个名称的单位，与之合并，
/// 因此 `r ($\AA$) G ($\AA^{-2}$)` 得到两个标签而不是四个。
pub fn parse_labels(header: Option<&str>) -> (String, String) {
    let defaults = (DEFAULT_XLABEL.to_string(), DEFAULT_YLABEL.to_string());

    let header = match header {
        Some(h) => h,
        None => return defaults,
    };

    let mut names: Vec<String> = Vec::new();
    for token in tokenize(header) {
        if token.starts_with('(') {
            if let Some(last) = names.last_mut() {
                last.push(' ');
                last.push_str(token);
                continue;
            }
        }
        names.push(token.to_string());
    }

    if names.len() < 2 {
        return defaults;
    }

    (clean_label(&names[0]), clean_label(&names[1]))
}

/// 替换单位标记并去掉首尾空白
pub fn clean_label(raw: &str) -> String {
    let mut label = raw.to_string();
    for (latex, unicode) in UNIT_SUBSTITUTIONS {
        label = label.replace(latex, unicode);
    }
    label.trim().to_string()
}
