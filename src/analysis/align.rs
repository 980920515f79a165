//! # 曲线对齐
//!
//! 把两条可能采样在不同 x 网格上的曲线变换到同一网格。
//!
//! ## 规则
//! - 网格总是取自第一条曲线（参考曲线），因此对齐与参数顺序有关
//! - x 网格在容差内逐点相等时不做重采样
//! - 否则对第二条曲线做分段线性插值；超出范围的点取边界值
//! - x 非升序的曲线先按 x 稳定排序
//!
//! ## 依赖关系
//! - 被 `analysis/modes.rs` 使用
//! - 使用 `models/curve.rs`

use crate::models::{AlignedPair, Curve};

/// 绝对容差
pub const ABS_TOLERANCE: f64 = 1e-8;
/// 相对容差
pub const REL_TOLERANCE: f64 = 1e-5;

/// 两个网格是否逐点相等（在容差内）
pub fn grids_match(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| p == q || (p - q).abs() <= ABS_TOLERANCE + REL_TOLERANCE * q.abs())
}

/// 对齐两条曲线
pub fn align(reference: &Curve, other: &Curve) -> AlignedPair {
    if grids_match(&reference.x, &other.x) {
        return AlignedPair {
            x: reference.x.clone(),
            y1: reference.y.clone(),
            y2: other.y.clone(),
        };
    }

    let reference = reference.sorted_by_x();
    let other = other.sorted_by_x();

    let y2 = reference
        .x
        .iter()
        .map(|&xq| interpolate(&other.x, &other.y, xq))
        .collect();

    AlignedPair {
        x: reference.x,
        y1: reference.y,
        y2,
    }
}

/// 分段线性插值
///
/// `xp` 必须升序且非空。超出范围时返回边界值，落在节点上时返回节点值。
/// `xq` 为 NaN 时返回 NaN。
pub fn interpolate(xp: &[f64], fp: &[f64], xq: f64) -> f64 {
    if xq.is_nan() {
        return f64::NAN;
    }

    let last = xp.len() - 1;

    if last == 0 || xq <= xp[0] {
        return fp[0];
    }
    if xq >= xp[last] {
        return fp[last];
    }

    // 第一个大于 xq 的节点；xp 含 NaN 时二分结果不可靠，限制在 [1, last]
    let hi = xp.partition_point(|&v| v <= xq).clamp(1, last);
    let lo = hi - 1;

    if xp[lo] == xq {
        return fp[lo];
    }

    let t = (xq - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_grids_not_resampled() {
        let c1 = Curve::new("a", vec![0.0, 0.1, 0.2], vec![1.0, 2.0, 3.0]);
        let c2 = Curve::new("b", vec![0.0, 0.1 + 1e-12, 0.2], vec![7.0, 8.0, 9.0]);

        let pair = align(&c1, &c2);
        assert_eq!(pair.x, c1.x);
        assert_eq!(pair.y1, c1.y);
        assert_eq!(pair.y2, c2.y);
    }

    #[test]
    fn test_identical_unsorted_grids_kept_as_is() {
        let c1 = Curve::new("a", vec![2.0, 0.0, 1.0], vec![1.0, 2.0, 3.0]);
        let c2 = Curve::new("b", vec![2.0, 0.0, 1.0], vec![4.0, 5.0, 6.0]);

        let pair = align(&c1, &c2);
        assert_eq!(pair.x, vec![2.0, 0.0, 1.0]);
        assert_eq!(pair.y2, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_interpolates_between_points() {
        let a = Curve::new("a", vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]);
        let b = Curve::new("b", vec![0.0, 2.0], vec![2.0, 4.0]);

        let pair = align(&a, &b);
        assert_eq!(pair.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(pair.y2, vec![2.0, 3.0, 4.0]);
        assert_eq!(pair.difference()[1], -1.0);
    }

    #[test]
    fn test_exact_at_shared_points() {
        let a = Curve::new("a", vec![0.0, 0.3, 0.5, 0.7, 1.0], vec![0.0; 5]);
        let b = Curve::new(
            "b",
            vec![0.0, 0.25, 0.5, 0.75, 1.0],
            vec![0.1, 1.7, -2.3, 4.9, 3.3],
        );

        let pair = align(&a, &b);
        assert_eq!(pair.y2[0], 0.1);
        assert_eq!(pair.y2[2], -2.3);
        assert_eq!(pair.y2[4], 3.3);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let a = Curve::new("a", vec![-1.0, 0.5, 5.0], vec![0.0; 3]);
        let b = Curve::new("b", vec![0.0, 1.0], vec![10.0, 20.0]);

        let pair = align(&a, &b);
        assert_eq!(pair.y2, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_unsorted_inputs_are_sorted() {
        let a = Curve::new("a", vec![2.0, 0.0, 1.0], vec![30.0, 10.0, 20.0]);
        let b = Curve::new("b", vec![2.0, 0.0], vec![4.0, 2.0]);

        let pair = align(&a, &b);
        assert_eq!(pair.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(pair.y1, vec![10.0, 20.0, 30.0]);
        assert_eq!(pair.y2, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_grid_is_order_dependent() {
        let a = Curve::new("a", vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]);
        let b = Curve::new("b", vec![0.0, 2.0], vec![2.0, 4.0]);

        assert_eq!(align(&a, &b).x.len(), 3);
        assert_eq!(align(&b, &a).x.len(), 2);
    }

    #[test]
    fn test_nan_x_in_reference_does_not_panic() {
        let a = crate::parsers::parse_curve_content("0 1\nnan 2\n2 3\n", "a.xy").unwrap();
        let b = Curve::new("b", vec![0.0, 2.0], vec![2.0, 4.0]);

        let pair = align(&a, &b);
        // NaN 排到最后
        assert_eq!(pair.x[..2], [0.0, 2.0]);
        assert!(pair.x[2].is_nan());
        assert_eq!(pair.y2[..2], [2.0, 4.0]);
        assert!(pair.y2[2].is_nan());
    }

    #[test]
    fn test_nan_x_in_other_does_not_panic() {
        let a = Curve::new("a", vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]);
        let b = Curve::new("b", vec![-f64::NAN, 0.0, 2.0], vec![9.0, 2.0, 4.0]);

        let pair = align(&a, &b);
        assert_eq!(pair.x, a.x);
        assert_eq!(pair.y2.len(), 3);
        assert_eq!(pair.y2[2], 4.0);
    }

    #[test]
    fn test_interpolate_edge_inputs() {
        assert!(interpolate(&[0.0, 1.0], &[1.0, 2.0], f64::NAN).is_nan());
        assert_eq!(interpolate(&[f64::NAN], &[5.0], 1.0), 5.0);
        assert_eq!(interpolate(&[3.0], &[5.0], 1.0), 5.0);
    }

    #[test]
    fn test_grids_match_tolerance() {
        assert!(grids_match(&[100.0], &[100.0005]));
        assert!(!grids_match(&[100.0], &[100.01]));
        assert!(!grids_match(&[0.0, 1.0], &[0.0]));
    }
}
