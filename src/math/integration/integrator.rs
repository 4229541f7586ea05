use std::ops::Range;

use num_traits::{
    Float,
    NumCast
};

use crate::math::integration::integrationerror::IntegrationError;

// ─────────────────────────────────────────────────────────────────────────────
// Integrator
// ─────────────────────────────────────────────────────────────────────────────
//
// 兩種策略（sequential / concurrent）共用同一組 mesh 公式：
//
//   h   = (x2 - x1) / n
//   sum = Σ_{j=0}^{n-1} f(x1 + j·h)
//   I   ≈ h·sum - 0.5·h·f(x1) + 0.5·h·f(x2)
//
// 與標準寫法 h·[0.5·f(x1) + f(x1+h) + ... + 0.5·f(x2)] 代數等價。
// 差別在於 sum 可以任意切成數段各自累加，endpoint correction 只在最後做一次。

/// 一維定積分的 composite trapezoidal rule。
///
/// 實作者只負責「sum 如何累加」，mesh step 與 endpoint correction 一律使用
/// 本模組的共用函數。
pub trait Integrator<T>
where
    T: Float + Send + Sync,
{
    fn nodes(&self) -> usize;

    fn integrate<F>(&self, f: F, x1: T, x2: T) -> Result<T, IntegrationError>
    where
        F: Fn(T) -> T + Sync;
}

pub fn validate_bounds<T: Float>(x1: T, x2: T) -> Result<(), IntegrationError> {
    if x1.is_finite() && x2.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::NonFiniteBound)
    }
}

/// `h = (x2 - x1) / n`，呼叫端需保證 `n >= 1`。
pub fn mesh_step<T: Float>(x1: T, x2: T, n: usize) -> T {
    (x2 - x1) / index_to_float(n)
}

/// 第 `j` 個節點 `x1 + j·h`。
#[inline]
pub fn node<T: Float>(x1: T, h: T, j: usize) -> T {
    x1 + index_to_float::<T>(j) * h
}

/// 依序累加 `range` 內各節點的函數值，由 0 起算。
pub fn accumulate<T, F>(f: &F, x1: T, h: T, range: Range<usize>) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let mut sum = T::zero();
    for j in range {
        sum = sum + f(node(x1, h, j));
    }
    sum
}

pub fn endpoint_correction<T, F>(f: &F, x1: T, x2: T, h: T, sum: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let half = T::one() / (T::one() + T::one());
    h * sum - half * h * f(x1) + half * h * f(x2)
}

// usize -> f32/f64 不會失敗；其他型別無法表示時以 NaN 傳遞，不 panic
#[inline]
fn index_to_float<T: Float>(j: usize) -> T {
    <T as NumCast>::from(j).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mesh_step_follows_orientation() {
        assert_abs_diff_eq!(mesh_step(0.0_f64, 1.0, 4), 0.25);
        assert_abs_diff_eq!(mesh_step(1.0_f64, 0.0, 4), -0.25);
    }

    #[test]
    fn accumulate_sums_left_nodes() {
        // f(x) = x, nodes 0, 0.5, 1.0, 1.5
        let sum = accumulate(&|x: f64| x, 0.0, 0.5, 0..4);
        assert_abs_diff_eq!(sum, 3.0);
    }

    #[test]
    fn accumulate_over_empty_range_is_zero() {
        let sum = accumulate(&|_: f64| 1.0, 0.0, 0.5, 3..3);
        assert_eq!(sum, 0.0);
    }

    #[test]
    fn correction_turns_left_sum_into_trapezoid() {
        // x^2 on [0, 1], n = 2: trapezoid = 0.5 * (0 + 2*0.25 + 1) / 2 = 0.375
        let f = |x: f64| x * x;
        let h = mesh_step(0.0, 1.0, 2);
        let sum = accumulate(&f, 0.0, h, 0..2);
        assert_abs_diff_eq!(endpoint_correction(&f, 0.0, 1.0, h, sum), 0.375, epsilon = 1e-15);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(validate_bounds(0.0_f64, 1.0).is_ok());
        assert!(matches!(validate_bounds(f64::NAN, 1.0), Err(IntegrationError::NonFiniteBound)));
        assert!(matches!(validate_bounds(0.0_f32, f32::INFINITY), Err(IntegrationError::NonFiniteBound)));
    }
}
