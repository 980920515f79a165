//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 绘图模式（互斥）
//! - 默认: 叠加绘制
//! - `--waterfall`: 竖直错开绘制
//! - `--diff`: 两个文件的差值
//! - `--diffmatrix`: 所有文件两两差值
//!
//! 输出相关参数可以用 `EASYPLOT_*` 环境变量设置默认值。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use crate::analysis::PlotMode;
use crate::plot::LegendPlacement;

use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// easyplot - 两列数据快速绘图与比较
#[derive(Parser, Debug)]
#[command(name = "easyplot")]
#[command(version)]
#[command(about = "Plot and visualize two-column data (any file extension)")]
#[command(long_about = "Plot and visualize two-column data (any file extension).

Files carrying a '#L' label line use its axis names; plain numeric files are
read as-is. Unreadable files are reported and skipped.

example usage:

  # plot data overlaid
  easyplot file.gr file.txt ...

  # waterfall with 2.0 spacing, legend outside
  easyplot data/ --waterfall --yspace 2 --legend-right")]
#[command(group(ArgGroup::new("mode").args(["waterfall", "diffmatrix", "diff"])))]
pub struct Cli {
    /// Files or directories
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Plot waterfall plot of data
    #[arg(long, default_value_t = false)]
    pub waterfall: bool,

    /// Plot the differences of every pair of datasets
    #[arg(long, default_value_t = false)]
    pub diffmatrix: bool,

    /// Plot the difference between two datasets
    #[arg(long, default_value_t = false)]
    pub diff: bool,

    /// Vertical spacing between datasets (waterfall and difference matrix)
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, env = "EASYPLOT_YSPACE")]
    pub yspace: f64,

    /// Lower x-axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub xmin: Option<f64>,

    /// Upper x-axis limit
    #[arg(long, allow_negative_numbers = true)]
    pub xmax: Option<f64>,

    /// Place the legend outside the plot, on the right
    #[arg(long, default_value_t = false)]
    pub legend_right: bool,

    /// Output file
    #[arg(short, long, default_value = "easyplot.png", env = "EASYPLOT_OUTPUT")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1050, env = "EASYPLOT_WIDTH")]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 600, env = "EASYPLOT_HEIGHT")]
    pub height: u32,

    /// Title for the plot
    #[arg(long)]
    pub title: Option<String>,

    /// Glob pattern for files inside directories (e.g., "*.gr,*.xy")
    #[arg(long, default_value = "*", env = "EASYPLOT_PATTERN")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}

impl Cli {
    /// 选中的绘图模式
    pub fn plot_mode(&self) -> PlotMode {
        if self.diff {
            PlotMode::DirectDiff
        } else if self.diffmatrix {
            PlotMode::DiffMatrix
        } else if self.waterfall {
            PlotMode::Waterfall
        } else {
            PlotMode::Overlay
        }
    }

    /// 图例位置
    pub fn legend_placement(&self) -> LegendPlacement {
        if self.legend_right {
            LegendPlacement::Right
        } else {
            LegendPlacement::Inside
        }
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (series, x, y, offset)
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Svg => write!(f, "svg"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
