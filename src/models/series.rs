//! # 绘图序列模型
//!
//! 绘图模式引擎的输出单元。渲染层直接消费，不做修改。
//!
//! ## 依赖关系
//! - 被 `analysis/modes.rs` 创建
//! - 被 `plot/render.rs` 和 `plot/export.rs` 消费

/// 一条待绘制的线
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub x: Vec<f64>,
    /// 未加偏移的 y 值
    pub y: Vec<f64>,
    /// 绘制时叠加到 y 上的竖直偏移
    pub y_offset_applied: f64,
}

impl PlotSeries {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>, y_offset_applied: f64) -> Self {
        PlotSeries {
            label: label.into(),
            x,
            y,
            y_offset_applied,
        }
    }

    /// 加偏移后的绘制点
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let offset = self.y_offset_applied;
        self.x.iter().zip(&self.y).map(move |(x, y)| (*x, *y + offset))
    }
}

/// 差值矩阵中因加载失败被跳过的曲线对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPair {
    pub first: String,
    pub second: String,
}

/// 一次绘图模式调用的完整输出
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOutput {
    pub xlabel: String,
    pub ylabel: String,
    pub series: Vec<PlotSeries>,
    /// 在每条序列的偏移处绘制水平基线（差值矩阵）
    pub baselines: bool,
    pub skipped: Vec<SkippedPair>,
}

impl PlotOutput {
    /// 所有绘制点的 (x_min, x_max, y_min, y_max)
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.series.iter().flat_map(|s| s.points()).peekable();
        points.peek()?;

        let init = (
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
        );
        let bounds = points
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(init, |(x0, x1, y0, y1), (x, y)| {
                (x0.min(x), x1.max(x), y0.min(y), y1.max(y))
            });

        if bounds.0.is_finite() {
            Some(bounds)
        } else {
            None
        }
    }

    /// 限定 x 区间内绘制点的 y 范围
    pub fn y_bounds_within(&self, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
        let (lo, hi) = self
            .series
            .iter()
            .flat_map(|s| s.points())
            .filter(|(x, y)| *x >= x_min && *x <= x_max && y.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
                (lo.min(y), hi.max(y))
            });

        if lo.is_finite() {
            Some((lo, hi))
        } else {
            None
        }
    }
}
