// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Local Bézier interpolation of `y(x)`.

use alloc::vec::Vec;

use crate::config::clamp_spline_size;
use crate::natural_spline::resample_by_x;
use crate::{Point, SplinePolynomial, DEFAULT_SPLINE_SIZE};

/// Estimate the inner control points of a cubic Bézier from `p1` to `p2`.
///
/// `p0` and `p3` are the neighbours before and after the segment; pass `p1`
/// (or `p2`) again at the ends of an open polyline. The tangent at `p1` is
/// parallel to `p2 - p0`, and the one at `p2` to `p3 - p1`.
///
/// The handles are a sixth of the neighbour chord long, or a third when the
/// neighbour coincides with the endpoint, so that an end without incoming
/// direction aims at the opposite end. When the neighbour chord is long
/// compared to the segment, the handle is instead scaled down to half the
/// segment length, which keeps the curve from overshooting.
pub fn bezier_control_points(p0: Point, p1: Point, p2: Point, p3: Point) -> (Point, Point) {
    let d02 = p0.distance(p2);
    let d13 = p1.distance(p3);
    let d12_2 = 0.5 * p1.distance(p2);
    if d12_2 == 0.0 {
        return (p1, p2);
    }

    let s1 = if d02 / 6.0 < d12_2 {
        let div = if p0 != p1 { 6.0 } else { 3.0 };
        p1 + (p2 - p0) / div
    } else {
        p1 + (p2 - p0) * (d12_2 / d02)
    };
    let s2 = if d13 / 6.0 < d12_2 {
        let div = if p2 != p3 { 6.0 } else { 3.0 };
        p2 - (p3 - p1) / div
    } else {
        p2 - (p3 - p1) * (d12_2 / d13)
    };
    (s1, s2)
}

/// Resamples a local Bézier interpolation of the input at equally spaced x.
///
/// Each input segment gets the Bézier from [`bezier_control_points`]; the
/// output takes the y coordinate of that Bézier, with the curve parameter
/// mapped linearly onto the segment's x range. No system is solved, so a
/// change to one input point only moves the curve near it.
///
/// The x coordinates of the input must be non-decreasing. Repeated x values
/// give segments of zero width; decreasing ones are not detected and give
/// meaningless output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierCurveFitter {
    spline_size: usize,
}

impl BezierCurveFitter {
    /// Create a fitter producing `spline_size` points.
    ///
    /// Sizes below [`MIN_SPLINE_SIZE`](crate::MIN_SPLINE_SIZE) are raised to it.
    pub fn new(spline_size: usize) -> Self {
        BezierCurveFitter {
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
        if points.len() < 3 {
            return points.to_vec();
        }
        let intervals = y_intervals(points);
        resample_by_x(points, self.spline_size, |j, x| {
            let (p1, p2) = (points[j], points[j + 1]);
            let t = (x - p1.x) / (p2.x - p1.x);
            p1.y + intervals[j].value_at(t)
        })
    }
}

impl Default for BezierCurveFitter {
    fn default() -> Self {
        BezierCurveFitter::new(DEFAULT_SPLINE_SIZE)
    }
}

/// The y component of each segment's Bézier, as a polynomial in the curve
/// parameter relative to the segment start.
fn y_intervals(points: &[Point]) -> Vec<SplinePolynomial> {
    let n = points.len();
    (0..n - 1)
        .map(|j| {
            let p0 = if j == 0 { points[0] } else { points[j - 1] };
            let p1 = points[j];
            let p2 = points[j + 1];
            let p3 = if j + 2 < n { points[j + 2] } else { points[n - 1] };
            let (s1, s2) = bezier_control_points(p0, p1, p2, p3);
            SplinePolynomial::new(
                p2.y - p1.y + 3.0 * (s1.y - s2.y),
                3.0 * (p1.y - 2.0 * s1.y + s2.y),
                3.0 * (s1.y - p1.y),
            )
        })
        .collect()
}
