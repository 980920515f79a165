//! # 绘图模式引擎
//!
//! 四种比较策略，均为从有序加载结果到绘图序列的纯函数。
//!
//! ## 模式
//! - `Overlay`: 每条曲线一条线，无偏移
//! - `Waterfall`: 第 i 条成功加载的曲线偏移 `i * yspace`
//! - `DirectDiff`: 恰好两个输入，绘制 `y1 - y2`
//! - `DiffMatrix`: 每个无序对 (i < j) 的差值，第 k 对偏移 `k * yspace`
//!
//! 加载失败的输入被排除（差值矩阵中跳过相关曲线对），不会终止整个模式；
//! 只有参数个数错误和无可绘制内容会使模式失败。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `analysis/align.rs` 对齐曲线

use super::align::align;
use crate::error::{EasyplotError, Result};
use crate::models::{Curve, CurveLoad, PlotOutput, PlotSeries, SkippedPair};
use crate::models::curve::{DEFAULT_XLABEL, DEFAULT_YLABEL};

use std::fmt;

/// 比较绘图模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    Overlay,
    Waterfall,
    DirectDiff,
    DiffMatrix,
}

impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotMode::Overlay => write!(f, "overlay"),
            PlotMode::Waterfall => write!(f, "waterfall"),
            PlotMode::DirectDiff => write!(f, "diff"),
            PlotMode::DiffMatrix => write!(f, "diff-matrix"),
        }
    }
}

/// 模式参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    /// 相邻序列之间的竖直间距（waterfall / diff-matrix）
    pub yspace: f64,
}

impl Default for ModeParams {
    fn default() -> Self {
        ModeParams { yspace: 1.0 }
    }
}

/// 执行绘图模式
pub fn run_mode(mode: PlotMode, loads: &[CurveLoad], params: &ModeParams) -> Result<PlotOutput> {
    if !params.yspace.is_finite() {
        return Err(EasyplotError::InvalidArgument(format!(
            "yspace must be a finite number, got {}",
            params.yspace
        )));
    }

    let output = match mode {
        PlotMode::Overlay => stacked(loads, 0.0),
        PlotMode::Waterfall => stacked(loads, params.yspace),
        PlotMode::DirectDiff => direct_diff(loads)?,
        PlotMode::DiffMatrix => diff_matrix(loads, params.yspace),
    };

    if output.series.is_empty() {
        let reason = match mode {
            PlotMode::DiffMatrix => "no pair of readable files",
            _ => "no readable files",
        };
        return Err(EasyplotError::EmptyResult {
            mode: mode.to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(output)
}

/// overlay 与 waterfall：第 i 条曲线偏移 `i * yspace`
fn stacked(loads: &[CurveLoad], yspace: f64) -> PlotOutput {
    let curves: Vec<&Curve> = loads.iter().filter_map(|l| l.as_ref().ok()).collect();
    let (xlabel, ylabel) = axis_labels(curves.first().copied());

    let series = curves
        .iter()
        .enumerate()
        .map(|(i, c)| PlotSeries::new(&c.name, c.x.clone(), c.y.clone(), i as f64 * yspace))
        .collect();

    PlotOutput {
        xlabel,
        ylabel,
        series,
        baselines: false,
        skipped: Vec::new(),
    }
}

/// 两条曲线的直接差值
fn direct_diff(loads: &[CurveLoad]) -> Result<PlotOutput> {
    if loads.len() != 2 {
        return Err(EasyplotError::ArityError {
            mode: PlotMode::DirectDiff.to_string(),
            expected: 2,
            found: loads.len(),
        });
    }

    let first = loads[0].as_ref().map_err(|f| f.clone())?;
    let second = loads[1].as_ref().map_err(|f| f.clone())?;

    let (xlabel, ylabel) = axis_labels(Some(first));

    Ok(PlotOutput {
        xlabel,
        ylabel: format!("Δ{}", ylabel),
        series: vec![difference_series(first, second, 0.0)],
        baselines: false,
        skipped: Vec::new(),
    })
}

/// 所有无序曲线对的差值
fn diff_matrix(loads: &[CurveLoad], yspace: f64) -> PlotOutput {
    let mut series = Vec::new();
    let mut skipped = Vec::new();

    for i in 0..loads.len() {
        for j in (i + 1)..loads.len() {
            match (&loads[i], &loads[j]) {
                (Ok(a), Ok(b)) => {
                    let offset = yspace * (series.len() + 1) as f64;
                    series.push(difference_series(a, b, offset));
                }
                _ => skipped.push(SkippedPair {
                    first: input_name(&loads[i]),
                    second: input_name(&loads[j]),
                }),
            }
        }
    }

    let reference = loads.iter().find_map(|l| l.as_ref().ok());
    let (xlabel, ylabel) = axis_labels(reference);

    PlotOutput {
        xlabel,
        ylabel: format!("Δ{}", ylabel),
        series,
        baselines: true,
        skipped,
    }
}

/// `reference - other`，在参考曲线的网格上
fn difference_series(reference: &Curve, other: &Curve, offset: f64) -> PlotSeries {
    let pair = align(reference, other);
    let diff = pair.difference();

    PlotSeries::new(
        format!("{} - {}", reference.name, other.name),
        pair.x,
        diff,
        offset,
    )
}

fn axis_labels(curve: Option<&Curve>) -> (String, String) {
    match curve {
        Some(c) => (c.xlabel.clone(), c.ylabel.clone()),
        None => (DEFAULT_XLABEL.to_string(), DEFAULT_YLABEL.to_string()),
    }
}

fn input_name(load: &CurveLoad) -> String {
    match load {
        Ok(curve) => curve.name.clone(),
        Err(failure) => failure.display_name(),
    }
}
