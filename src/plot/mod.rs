//! # 绘图输出模块
//!
//! 把绘图模式引擎的输出交给渲染器或导出为数据文件。
//! 本模块只读取 `PlotOutput`，不修改其中的序列。
//!
//! ## 子模块
//! - `render`: 使用 `plotters` 生成 PNG / SVG 图像
//! - `export`: 导出 CSV 数据
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/series.rs` 的 PlotOutput

pub mod export;
pub mod render;

pub use render::{render_plot, LegendPlacement, RenderOptions};
