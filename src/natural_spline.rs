// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural cubic spline interpolation of `y(x)`.
//!
//! The spline passes through every input point and has zero second
//! derivative at both ends. The second derivatives at the interior knots are
//! the solution of a symmetric tridiagonal system, solved with
//! [`solve_tridiagonal`].
//!
//! The x coordinates of the input must be strictly increasing. Repeated x
//! values make a segment width zero, and the resulting coefficients (and all
//! output that depends on them) are not finite.
//!
//! [`solve_tridiagonal`]: crate::common::solve_tridiagonal

use alloc::vec::Vec;

use crate::common::solve_tridiagonal;
use crate::config::clamp_spline_size;
use crate::{Point, SplinePolynomial, DEFAULT_SPLINE_SIZE};

/// A solved natural cubic spline.
#[derive(Clone, Debug, PartialEq)]
pub struct NaturalSpline {
    knots: Vec<Point>,
    polynomials: Vec<SplinePolynomial>,
}

impl NaturalSpline {
    /// Solve the spline through `points`.
    ///
    /// Returns `None` for fewer than three points.
    pub fn new(points: &[Point]) -> Option<NaturalSpline> {
        let n = points.len();
        if n < 3 {
            return None;
        }
        let mut widths = Vec::with_capacity(n - 1);
        let mut slopes = Vec::with_capacity(n - 1);
        for w in points.windows(2) {
            let h = w[1].x - w[0].x;
            widths.push(h);
            slopes.push((w[1].y - w[0].y) / h);
        }

        let m = n - 2;
        let mut sub = Vec::with_capacity(m);
        let mut diag = Vec::with_capacity(m);
        let mut sup = Vec::with_capacity(m);
        let mut rhs = Vec::with_capacity(m);
        for k in 0..m {
            sub.push(widths[k]);
            diag.push(2.0 * (widths[k] + widths[k + 1]));
            sup.push(widths[k + 1]);
            rhs.push(6.0 * (slopes[k + 1] - slopes[k]));
        }
        let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs);

        // natural boundary: zero curvature at both ends
        let mut curvatures = Vec::with_capacity(n);
        curvatures.push(0.0);
        curvatures.extend_from_slice(&interior);
        curvatures.push(0.0);

        let polynomials = (0..n - 1)
            .map(|i| {
                SplinePolynomial::from_curvatures(
                    widths[i],
                    points[i + 1].y - points[i].y,
                    curvatures[i],
                    curvatures[i + 1],
                )
            })
            .collect();
        Some(NaturalSpline {
            knots: points.to_vec(),
            polynomials,
        })
    }

    /// The interpolated points.
    #[inline]
    pub fn knots(&self) -> &[Point] {
        &self.knots
    }

    /// One polynomial per segment, relative to the segment's start knot.
    #[inline]
    pub fn polynomials(&self) -> &[SplinePolynomial] {
        &self.polynomials
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the knot range the first or last segment is extrapolated.
    pub fn eval(&self, x: f64) -> f64 {
        let idx = self.knots.partition_point(|p| p.x <= x);
        let i = idx.saturating_sub(1).min(self.polynomials.len() - 1);
        self.eval_segment(i, x)
    }

    #[inline]
    fn eval_segment(&self, i: usize, x: f64) -> f64 {
        let knot = self.knots[i];
        knot.y + self.polynomials[i].value_at(x - knot.x)
    }
}

/// Resamples a natural cubic spline through the input at equally spaced x.
///
/// ```
/// use curvefit::{NaturalSplineFitter, Point};
///
/// let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)].map(Point::from);
/// let fitted = NaturalSplineFitter::new(50).fit(&points);
/// assert_eq!(fitted.len(), 50);
/// assert_eq!(fitted[0], points[0]);
/// assert_eq!(fitted[49], points[4]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalSplineFitter {
    spline_size: usize,
}

impl NaturalSplineFitter {
    /// Create a fitter producing `spline_size` points.
    ///
    /// Sizes below [`MIN_SPLINE_SIZE`](crate::MIN_SPLINE_SIZE) are raised to it.
    pub fn new(spline_size: usize) -> Self {
        NaturalSplineFitter {
            spline_size: clamp_spline_size(spline_size),
        }
    }

    /// The number of points produced by [`fit`](Self::fit).
    #[inline]
    pub fn spline_size(&self) -> usize {
        self.spline_size
    }

    /// Fit the points and resample.
    ///
    /// Inputs with fewer than three points are returned unchanged.
    pub fn fit(&self, points: &[Point]) -> Vec<Point> {
        match NaturalSpline::new(points) {
            Some(spline) => resample_by_x(spline.knots(), self.spline_size, |i, x| {
                spline.eval_segment(i, x)
            }),
            None => points.to_vec(),
        }
    }
}

impl Default for NaturalSplineFitter {
    fn default() -> Self {
        NaturalSplineFitter::new(DEFAULT_SPLINE_SIZE)
    }
}

/// Sample `count` points at equally spaced x between the first and last knot.
///
/// `eval` receives the index of the segment enclosing x and x itself. The
/// segment cursor only moves forward, so the knots must be sorted by x. The
/// first and last samples are the end knots themselves.
pub(crate) fn resample_by_x(
    knots: &[Point],
    count: usize,
    eval: impl Fn(usize, f64) -> f64,
) -> Vec<Point> {
    let n = knots.len();
    let x0 = knots[0].x;
    let x1 = knots[n - 1].x;
    let delta = (x1 - x0) / (count - 1) as f64;

    let mut result = Vec::with_capacity(count);
    result.push(knots[0]);
    let mut j = 0;
    for i in 1..count - 1 {
        let x = (x0 + i as f64 * delta).min(x1);
        while j + 2 < n && x > knots[j + 1].x {
            j += 1;
        }
        result.push(Point::new(x, eval(j, x)));
    }
    result.push(knots[n - 1]);
    result
}
