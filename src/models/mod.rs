//! # 数据模型模块
//!
//! 定义曲线、加载失败记录和绘图序列。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `analysis/`, `plot/` 使用
//! - 子模块: curve, series

pub mod curve;
pub mod series;

pub use curve::{AlignedPair, Curve, CurveLoad, LoadFailure};
pub use series::{PlotOutput, PlotSeries, SkippedPair};
