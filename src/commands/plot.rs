//! # 绘图命令实现
//!
//! 收集输入文件、逐个加载曲线、执行绘图模式并输出图像或数据。
//!
//! ## 流程
//! 1. 展开文件和目录（缺失路径报告后跳过）
//! 2. 按输入顺序逐个加载（失败的文件报告后跳过）
//! 3. 执行绘图模式
//! 4. 渲染 PNG / SVG 或导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的 Cli
//! - 使用 `batch/` 收集文件
//! - 使用 `parsers/` 加载曲线
//! - 使用 `analysis/` 执行绘图模式
//! - 使用 `plot/` 渲染和导出

use crate::analysis::{self, ModeParams, PlotMode};
use crate::batch::FileCollector;
use crate::cli::{Cli, OutputFormat};
use crate::error::Result;
use crate::models::{CurveLoad, PlotOutput};
use crate::parsers;
use crate::plot::{self, RenderOptions};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 执行绘图命令
pub fn execute(args: Cli) -> Result<()> {
    let mode = args.plot_mode();
    output::print_header(&format!("Beamline Data Plot ({})", mode));

    let collected = FileCollector::new(args.files.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    for path in &collected.missing {
        output::print_warning(&format!("Skipping missing path: {}", path.display()));
    }

    if collected.files.is_empty() {
        output::print_warning("No valid files found.");
        return Ok(());
    }

    output::print_info(&format!("Found {} input files", collected.files.len()));

    let loads = load_all(&collected.files);
    print_curve_table(&loads);

    let params = ModeParams {
        yspace: args.yspace,
    };
    let plot_output = build_plot(mode, &loads, &params)?;

    let format = args
        .format
        .unwrap_or_else(|| guess_format_from_extension(&args.output));

    match format {
        OutputFormat::Png | OutputFormat::Svg => {
            let opts = RenderOptions {
                width: args.width,
                height: args.height,
                title: args.title.clone(),
                xmin: args.xmin,
                xmax: args.xmax,
                legend: args.legend_placement(),
                svg: format == OutputFormat::Svg,
            };
            plot::render_plot(&plot_output, &args.output, &opts)?;
        }
        OutputFormat::Csv => plot::export::to_csv(&plot_output, &args.output)?,
    }

    output::print_separator();
    output::print_done(&format!(
        "{} series ({}) saved to '{}'",
        plot_output.series.len(),
        format,
        args.output.display()
    ));

    Ok(())
}

/// 按输入顺序加载所有文件，失败的文件立即报告
pub fn load_all(files: &[PathBuf]) -> Vec<CurveLoad> {
    files
        .iter()
        .map(|path| {
            let load = parsers::load_curve(path);
            if let Err(failure) = &load {
                output::print_load_failure(failure);
            }
            load
        })
        .collect()
}

/// 执行绘图模式并报告跳过的曲线对
pub fn build_plot(mode: PlotMode, loads: &[CurveLoad], params: &ModeParams) -> Result<PlotOutput> {
    let plot_output = analysis::run_mode(mode, loads, params)?;

    for pair in &plot_output.skipped {
        output::print_skip(&format!("{} vs {}", pair.first, pair.second));
    }

    output::print_success(&format!(
        "{} series to plot, x = {}, y = {}",
        plot_output.series.len(),
        plot_output.xlabel,
        plot_output.ylabel
    ));

    Ok(plot_output)
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        _ => OutputFormat::Png,
    }
}

/// 打印已加载曲线的概要表格
fn print_curve_table(loads: &[CurveLoad]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "File")]
        name: String,
        #[tabled(rename = "Points")]
        points: usize,
        #[tabled(rename = "x range")]
        x_range: String,
        #[tabled(rename = "x label")]
        xlabel: String,
        #[tabled(rename = "y label")]
        ylabel: String,
    }

    let rows: Vec<CurveRow> = loads
        .iter()
        .filter_map(|l| l.as_ref().ok())
        .map(|c| {
            let (lo, hi) = c.x_range();
            CurveRow {
                name: c.name.clone(),
                points: c.len(),
                x_range: format!("{:.4} – {:.4}", lo, hi),
                xlabel: c.xlabel.clone(),
                ylabel: c.ylabel.clone(),
            }
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("Loaded {} of {} files", rows.len(), loads.len()));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EasyplotError, LoadErrorKind};
    use std::fs;

    fn fixture_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("easyplot-cmd-{}-{}", std::process::id(), test));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_overlay_skips_text_only_file() {
        let dir = fixture_dir("overlay");
        let good = dir.join("good.gr");
        let bad = dir.join("bad.txt");
        fs::write(&good, "#L r($\\AA$) G($\\AA^{-2}$)\n0 1\n1 2\n").unwrap();
        fs::write(&bad, "just some notes\nno data\n").unwrap();

        let loads = load_all(&[good, bad]);
        assert!(matches!(
            &loads[1],
            Err(f) if matches!(f.reason, LoadErrorKind::UnparsableFormat(_))
        ));

        let out = build_plot(PlotMode::Overlay, &loads, &ModeParams::default()).unwrap();
        assert_eq!(out.series.len(), 1);
        assert_eq!(out.series[0].label, "good.gr");
        assert_eq!(out.xlabel, "r(Å)");
    }

    #[test]
    fn test_direct_diff_on_files() {
        let dir = fixture_dir("diff");
        let a = dir.join("a.xy");
        let b = dir.join("b.xy");
        fs::write(&a, "0 1\n1 2\n2 3\n").unwrap();
        fs::write(&b, "0 2\n2 4\n").unwrap();

        let loads = load_all(&[a, b]);
        let out = build_plot(PlotMode::DirectDiff, &loads, &ModeParams::default()).unwrap();
        assert_eq!(out.series[0].label, "a.xy - b.xy");
        assert_eq!(out.series[0].y[1], -1.0);
    }

    #[test]
    fn test_direct_diff_three_files() {
        let dir = fixture_dir("arity");
        let files: Vec<PathBuf> = ["a", "b", "c"]
            .iter()
            .map(|n| {
                let p = dir.join(n);
                fs::write(&p, "0 1\n").unwrap();
                p
            })
            .collect();

        let loads = load_all(&files);
        let err = build_plot(PlotMode::DirectDiff, &loads, &ModeParams::default()).unwrap_err();
        assert!(matches!(err, EasyplotError::ArityError { found: 3, .. }));
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("out.SVG")), OutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("out.csv")), OutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("out")), OutputFormat::Png);
    }
}
