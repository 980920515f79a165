//! # 图表渲染
//!
//! 使用 `plotters` 库把 `PlotOutput` 绘制为 PNG 或 SVG。
//!
//! ## 功能
//! - 每条序列一条线，绘制在 `y + y_offset_applied` 处
//! - 可选 x 轴范围（`--xmin` / `--xmax`）
//! - 差值矩阵在每条序列的偏移处绘制基线
//! - 图例位于图内右上角，或图外右侧
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/series.rs` 的 PlotOutput
//! - 使用 `plotters` 渲染图表

use crate::error::{EasyplotError, Result};
use crate::models::PlotOutput;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// 图外图例时图表所占宽度比例
const CHART_FRACTION: f64 = 0.8;
const LEGEND_TOP: i32 = 40;
const LEGEND_ROW_HEIGHT: i32 = 22;

/// 序列颜色循环（matplotlib tab10）
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// 图例位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPlacement {
    /// 图内右上角
    Inside,
    /// 图外右侧
    Right,
}

/// 渲染选项
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    pub xmin: Option<f64>,
    pub xmax: Option<f64>,
    pub legend: LegendPlacement,
    pub svg: bool,
}

/// 生成图表文件
pub fn render_plot(output: &PlotOutput, output_path: &Path, opts: &RenderOptions) -> Result<()> {
    let (x_range, y_range) = plot_ranges(output, opts.xmin, opts.xmax)?;

    if opts.svg {
        let root = SVGBackend::new(output_path, (opts.width, opts.height)).into_drawing_area();
        draw_plot(&root, output, opts, x_range, y_range)?;
        root.present()
            .map_err(|e| EasyplotError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (opts.width, opts.height)).into_drawing_area();
        draw_plot(&root, output, opts, x_range, y_range)?;
        root.present()
            .map_err(|e| EasyplotError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 第 i 条序列的颜色
pub fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// 计算坐标轴范围
///
/// x 取数据范围，可被 `xmin` / `xmax` 覆盖；y 取可见点的范围并留白。
pub fn plot_ranges(
    output: &PlotOutput,
    xmin: Option<f64>,
    xmax: Option<f64>,
) -> Result<(Range<f64>, Range<f64>)> {
    let (data_x0, data_x1, _, _) = output.bounds().ok_or_else(|| EasyplotError::EmptyResult {
        mode: "render".to_string(),
        reason: "no finite data points".to_string(),
    })?;

    let x0 = xmin.unwrap_or(data_x0);
    let x1 = xmax.unwrap_or(data_x1);

    let (x0, x1) = if x0 < x1 {
        (x0, x1)
    } else if xmin.is_none() && xmax.is_none() {
        // 所有点共用一个 x
        pad_range(x0, x1)
    } else {
        return Err(EasyplotError::InvalidRange(format!(
            "x-axis limits {} .. {} (xmin must be below xmax and the data)",
            x0, x1
        )));
    };

    let (mut y0, mut y1) = output.y_bounds_within(x0, x1).unwrap_or((0.0, 0.0));
    if output.baselines {
        for series in &output.series {
            y0 = y0.min(series.y_offset_applied);
            y1 = y1.max(series.y_offset_applied);
        }
    }
    let (y0, y1) = pad_range(y0, y1);

    Ok((x0..x1, y0..y1))
}

/// 留白 5%，范围过小时固定留白
fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let padding = if span.abs() < 1e-12 { 0.5 } else { span * 0.05 };
    (lo - padding, hi + padding)
}

fn render_err<E: std::fmt::Debug>(e: E) -> EasyplotError {
    EasyplotError::RenderError(format!("{:?}", e))
}

/// 按图例位置划分画布并绘制
fn draw_plot<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    output: &PlotOutput,
    opts: &RenderOptions,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    match opts.legend {
        LegendPlacement::Inside => draw_chart(root, output, opts, x_range, y_range, true),
        LegendPlacement::Right => {
            let (width, _) = root.dim_in_pixel();
            let split = (width as f64 * CHART_FRACTION) as i32;
            let (chart_area, legend_area) = root.split_horizontally(split);
            draw_chart(&chart_area, output, opts, x_range, y_range, false)?;
            draw_side_legend(&legend_area, output)
        }
    }
}

/// 绘制坐标系、基线和所有序列
fn draw_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    output: &PlotOutput,
    opts: &RenderOptions,
    x_range: Range<f64>,
    y_range: Range<f64>,
    inner_legend: bool,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x0, x1) = (x_range.start, x_range.end);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60);
    if let Some(title) = &opts.title {
        builder.caption(title, ("sans-serif", 24).into_font());
    }

    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(output.xlabel.as_str())
        .y_desc(output.ylabel.as_str())
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(render_err)?;

    if output.baselines {
        for series in &output.series {
            let level = series.y_offset_applied;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(x0, level), (x1, level)],
                    BLACK.stroke_width(1),
                )))
                .map_err(render_err)?;
        }
    }

    for (i, series) in output.series.iter().enumerate() {
        let color = series_color(i);
        let points: Vec<(f64, f64)> = series
            .points()
            .filter(|(x, y)| x.is_finite() && y.is_finite() && *x >= x0 && *x <= x1)
            .collect();

        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(render_err)?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if inner_legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

/// 在图表右侧的独立区域绘制图例
fn draw_side_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    output: &PlotOutput,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let font = ("sans-serif", 14).into_font();

    for (i, series) in output.series.iter().enumerate() {
        let color = series_color(i);
        let y = LEGEND_TOP + i as i32 * LEGEND_ROW_HEIGHT;

        area.draw(&PathElement::new(
            vec![(8, y), (32, y)],
            color.stroke_width(2),
        ))
        .map_err(render_err)?;
        area.draw(&Text::new(
            series.label.clone(),
            (40, y - 7),
            font.clone(),
        ))
        .map_err(render_err)?;
    }

    Ok(())
}
