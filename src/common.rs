// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers and the linear solvers behind the splines.

use alloc::vec::Vec;

/// The float methods this crate needs, backed by `libm` when `std` is off.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatFuncs: Sized {
    fn abs(self) -> Self;
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn sqrt(self) -> Self;
}

#[cfg(not(feature = "std"))]
impl FloatFuncs for f64 {
    #[inline]
    fn abs(self) -> f64 {
        libm::fabs(self)
    }

    #[inline]
    fn ceil(self) -> f64 {
        libm::ceil(self)
    }

    #[inline]
    fn floor(self) -> f64 {
        libm::floor(self)
    }

    #[inline]
    fn sqrt(self) -> f64 {
        libm::sqrt(self)
    }
}

/// Solve a tridiagonal linear system using the Thomas algorithm.
///
/// Row `i` of the system reads
/// `sub[i] * x[i - 1] + diag[i] * x[i] + sup[i] * x[i + 1] = rhs[i]`,
/// where `sub[0]` and `sup[n - 1]` are ignored. All four slices must have
/// the same length.
///
/// This is one forward elimination pass followed by one back substitution
/// pass, with no pivoting. It is stable for diagonally dominant systems such
/// as the ones arising from cubic spline interpolation. A zero pivot yields
/// non-finite values rather than an error.
pub fn solve_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(
        sub.len() == n && sup.len() == n && rhs.len() == n,
        "tridiagonal bands must have equal length"
    );
    if n == 0 {
        return Vec::new();
    }
    let mut c = Vec::with_capacity(n);
    let mut d = Vec::with_capacity(n);
    c.push(sup[0] / diag[0]);
    d.push(rhs[0] / diag[0]);
    for i in 1..n {
        let m = diag[i] - sub[i] * c[i - 1];
        c.push(sup[i] / m);
        d.push((rhs[i] - sub[i] * d[i - 1]) / m);
    }
    let mut x = d;
    for i in (0..n - 1).rev() {
        x[i] -= c[i] * x[i + 1];
    }
    x
}

/// Solve a cyclic tridiagonal linear system.
///
/// Like [`solve_tridiagonal`], but row `0` also couples to `x[n - 1]`
/// through `sub[0]`, and row `n - 1` couples to `x[0]` through `sup[n - 1]`.
/// This is the shape of the system for a periodic spline.
///
/// The corner entries are folded out with the Sherman-Morrison formula,
/// which reduces the problem to two plain tridiagonal solves. At least three
/// unknowns are required; smaller systems return an empty vector.
pub fn solve_cyclic_tridiagonal(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Vec<f64> {
    let n = diag.len();
    debug_assert!(
        sub.len() == n && sup.len() == n && rhs.len() == n,
        "tridiagonal bands must have equal length"
    );
    if n < 3 {
        return Vec::new();
    }
    // corner entries: top right, bottom left
    let beta = sub[0];
    let alpha = sup[n - 1];
    let gamma = -diag[0];

    let mut diag_mod = diag.to_vec();
    diag_mod[0] = diag[0] - gamma;
    diag_mod[n - 1] = diag[n - 1] - alpha * beta / gamma;

    let x = solve_tridiagonal(sub, &diag_mod, sup, rhs);

    let mut u = alloc::vec![0.0; n];
    u[0] = gamma;
    u[n - 1] = alpha;
    let z = solve_tridiagonal(sub, &diag_mod, sup, &u);

    let fact = (x[0] + beta * x[n - 1] / gamma) / (1.0 + z[0] + beta * z[n - 1] / gamma);
    x.iter().zip(&z).map(|(xi, zi)| xi - fact * zi).collect()
}
