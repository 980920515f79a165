//! # 数据导出
//!
//! 把绘图序列导出为长格式 CSV（每个绘制点一行）。
//!
//! ## 格式
//! ```text
//! series,x,y,offset
//! a.gr - b.gr,0.01,1.25,1.0
//! ```
//! `y` 已包含偏移，与图上看到的一致。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `csv` 与 `serde` 写入

use crate::error::{EasyplotError, Result};
use crate::models::PlotOutput;

use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct SeriesRow<'a> {
    series: &'a str,
    x: f64,
    y: f64,
    offset: f64,
}

/// 导出到文件
pub fn to_csv(output: &PlotOutput, output_path: &Path) -> Result<()> {
    let wtr = csv::Writer::from_path(output_path).map_err(EasyplotError::CsvError)?;
    write_rows(output, wtr)
}

/// 写入任意输出流
pub fn write_rows<W: Write>(output: &PlotOutput, mut wtr: csv::Writer<W>) -> Result<()> {
    for series in &output.series {
        for (x, y) in series.points() {
            wtr.serialize(SeriesRow {
                series: &series.label,
                x,
                y,
                offset: series.y_offset_applied,
            })?;
        }
    }

    wtr.flush()
        .map_err(|e| EasyplotError::CsvError(csv::Error::from(e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlotSeries;

    #[test]
    fn test_rows_include_offset() {
        let output = PlotOutput {
            xlabel: "X".to_string(),
            ylabel: "ΔY".to_string(),
            series: vec![
                PlotSeries::new("a - b", vec![0.0, 1.0], vec![1.0, -1.0], 0.0),
                PlotSeries::new("a - c", vec![0.0], vec![2.0], 1.5),
            ],
            baselines: true,
            skipped: vec![],
        };

        let mut buf = Vec::new();
        write_rows(&output, csv::Writer::from_writer(&mut buf)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "series,x,y,offset\na - b,0.0,1.0,0.0\na - b,1.0,-1.0,0.0\na - c,0.0,3.5,1.5\n"
        );
    }
}
