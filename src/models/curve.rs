//! # 曲线数据模型
//!
//! 从单个数据文件加载得到的 (x, y) 曲线，以及加载失败时的替代记录。
//!
//! ## 依赖关系
//! - 被 `parsers/` 创建
//! - 被 `analysis/` 消费
//! - 使用 `error.rs` 的 LoadErrorKind

use crate::error::LoadErrorKind;
use std::path::PathBuf;

/// 默认坐标轴标签
pub const DEFAULT_XLABEL: &str = "X";
pub const DEFAULT_YLABEL: &str = "Y";

/// 一条已加载的曲线
///
/// `x` 与 `y` 等长且至少包含一个点。`x` 不要求有序。
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// 显示名称（默认为文件名）
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub xlabel: String,
    pub ylabel: String,
}

impl Curve {
    /// 创建曲线，标签使用默认值 ("X", "Y")
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Curve {
            name: name.into(),
            x,
            y,
            xlabel: DEFAULT_XLABEL.to_string(),
            ylabel: DEFAULT_YLABEL.to_string(),
        }
    }

    /// 设置坐标轴标签
    pub fn with_labels(mut self, xlabel: impl Into<String>, ylabel: impl Into<String>) -> Self {
        self.xlabel = xlabel.into();
        self.ylabel = ylabel.into();
        self
    }

    /// 数据点数量
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// x 是否单调非递减
    pub fn is_sorted(&self) -> bool {
        self.x.windows(2).all(|w| w[0] <= w[1])
    }

    /// x 的最小值和最大值
    pub fn x_range(&self) -> (f64, f64) {
        let min = self.x.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// 按 x 稳定排序后的副本
    pub fn sorted_by_x(&self) -> Curve {
        if self.is_sorted() {
            return self.clone();
        }

        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.x[a].total_cmp(&self.x[b]));

        Curve {
            name: self.name.clone(),
            x: order.iter().map(|&i| self.x[i]).collect(),
            y: order.iter().map(|&i| self.y[i]).collect(),
            xlabel: self.xlabel.clone(),
            ylabel: self.ylabel.clone(),
        }
    }
}

/// 加载失败记录
///
/// 从不作为致命错误抛出：报告后跳过该文件。
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub source_path: PathBuf,
    pub reason: LoadErrorKind,
}

impl LoadFailure {
    pub fn new(source_path: impl Into<PathBuf>, reason: LoadErrorKind) -> Self {
        LoadFailure {
            source_path: source_path.into(),
            reason,
        }
    }

    /// 失败文件的显示名
    pub fn display_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}

/// 单个输入的加载结果
pub type CurveLoad = std::result::Result<Curve, LoadFailure>;

/// 对齐到公共网格的一对曲线
///
/// 网格总是取自第一条曲线。仅在一次差值计算期间存在。
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub x: Vec<f64>,
    pub y1: Vec<f64>,
    pub y2: Vec<f64>,
}

impl AlignedPair {
    /// 逐点差值 y1 - y2
    pub fn difference(&self) -> Vec<f64> {
        self.y1.iter().zip(&self.y2).map(|(a, b)| a - b).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_x_keeps_pairs_together() {
        let curve = Curve::new("c", vec![2.0, 0.0, 1.0], vec![20.0, 0.0, 10.0]);
        assert!(!curve.is_sorted());

        let sorted = curve.sorted_by_x();
        assert_eq!(sorted.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(sorted.y, vec![0.0, 10.0, 20.0]);
        assert_eq!(sorted.name, "c");
    }

    #[test]
    fn test_x_range() {
        let curve = Curve::new("c", vec![3.0, -1.0, 2.0], vec![0.0; 3]);
        assert_eq!(curve.x_range(), (-1.0, 3.0));
    }

    #[test]
    fn test_difference() {
        let pair = AlignedPair {
            x: vec![0.0, 1.0],
            y1: vec![5.0, 3.0],
            y2: vec![1.0, 4.0],
        };
        assert_eq!(pair.difference(), vec![4.0, -1.0]);
    }

    #[test]
    fn test_failure_display_name() {
        let failure = LoadFailure::new("/data/run_01.gr", LoadErrorKind::FileMissing);
        assert_eq!(failure.display_name(), "run_01.gr");
    }
}
