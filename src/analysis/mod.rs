//! # 曲线比较模块
//!
//! 曲线对齐与四种比较绘图模式，只处理数据，不调用任何渲染接口。
//!
//! ## 子模块
//! - `align`: 两条曲线对齐到公共网格
//! - `modes`: overlay / waterfall / direct-diff / diff-matrix
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/` 数据模型

pub mod align;
pub mod modes;

pub use align::align;
pub use modes::{run_mode, ModeParams, PlotMode};
