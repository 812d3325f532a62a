// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed parametric spline interpolation.
//!
//! The input polygon is read as closed: after the last point the curve runs
//! back to the first one. Both coordinates become periodic cubic splines of a
//! common chord-length parameter, so the fitted curve is C² continuous
//! everywhere, including across the seam. The periodic spline needs the
//! cyclic tridiagonal solve in [`solve_cyclic_tridiagonal`].
//!
//! [`solve_cyclic_tridiagonal`]: crate::common::solve_cyclic_tridiagonal

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::common::solve_cyclic_tridiagonal;
use crate::config::clamp_spline_size;
use crate::{increment_chordal, Point, SplinePolynomial, DEFAULT_SPLINE_SIZE};

/// The smallest parameter step between two consecutive points.
///
/// Coincident or very close points would otherwise produce segments of zero
/// width.
pub const MIN_PARAMETER_STEP: f64 = 1.0;

/// A periodic cubic spline of one variable.
///
/// The values repeat with [`period`](Self::period): the segment after the
/// last knot leads back to the first value, and slope and curvature match
/// there as well.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodicSpline {
    params: Vec<f64>,
    values: Vec<f64>,
    period: f64,
    polynomials: Vec<SplinePolynomial>,
}

impl PeriodicSpline {
    /// Solve the periodic spline through `(params[i], values[i])`.
    ///
    /// `params` must be strictly increasing and span less than `period`.
    /// Returns `None` if fewer than three knots are given or the two slices
    /// differ in length.
    pub fn new(params: &[f64], values: &[f64], period: f64) -> Option<PeriodicSpline> {
        let n = params.len();
        if n < 3 || values.len() != n {
            return None;
        }
        let width = |i: usize| {
            if i + 1 < n {
                params[i + 1] - params[i]
            } else {
                params[0] + period - params[n - 1]
            }
        };
        let widths: Vec<f64> = (0..n).map(width).collect();
        let slopes: Vec<f64> = (0..n)
            .map(|i| (values[(i + 1) % n] - values[i]) / widths[i])
            .collect();

        let mut sub = Vec::with_capacity(n);
        let mut diag = Vec::with_capacity(n);
        let mut sup = Vec::with_capacity(n);
        let mut rhs = Vec::with_capacity(n);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            sub.push(widths[prev]);
            diag.push(2.0 * (widths[prev] + widths[i]));
            sup.push(widths[i]);
            rhs.push(6.0 * (slopes[i] - slopes[prev]));
        }
        let curvatures = solve_cyclic_tridiagonal(&sub, &diag, &sup, &rhs);

        let polynomials = (0..n)
            .map(|i| {
                SplinePolynomial::from_curvatures(
                    widths[i],
                    values[(i + 1) % n] - values[i],
                    curvatures[i],
                    curvatures[(i + 1) % n],
                )
            })
            .collect();
        Some(PeriodicSpline {
            params: params.to_vec(),
            values: values.to_vec(),
            period,
            polynomials,
        })
    }

    /// The length of one period in parameter space.
    #[inline]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// One polynomial per segment; the last one closes the period.
    #[inline]
    pub fn polynomials(&self) -> &[SplinePolynomial] {
        &self.polynomials
    }

    /// Evaluate the spline at `t`; any `t` is folded into the base period.
    pub fn eval(&self, t: f64) -> f64 {
        let t0 = self.params[0];
        let mut u = t - t0;
        u -= (u / self.period).floor() * self.period;
        let u = t0 + u;
        let i = self
            .params
            .partition_point(|p| *p <= u)
            .saturating_sub(1);
        self.values[i] + self.polynomials[i].value_at(u - self.params[i])
    }
}

/// A closed curve through a polygon, as two periodic splines of a shared
/// parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParametricSpline {
    params: Vec<f64>,
    x: PeriodicSpline,
    y: PeriodicSpline,
}

impl ParametricSpline {
    /// Solve the closed spline through `points`.
    ///
    /// The parameter advances by the distance between consecutive points,
    /// but never by less than [`MIN_PARAMETER_STEP`]. A last point equal to
    /// the first is taken as an explicit seam and dropped, as long as three
    /// points are left. Returns `None` for fewer than three points.
    pub fn new(points: &[Point]) -> Option<ParametricSpline> {
        let points = match points {
            [first, rest @ .., last] if first == last && rest.len() >= 2 => {
                &points[..rest.len() + 1]
            }
            _ => points,
        };
        if points.len() < 3 {
            return None;
        }
        let step = |p1: Point, p2: Point| increment_chordal(p1, p2).max(MIN_PARAMETER_STEP);

        let mut params = Vec::with_capacity(points.len());
        let mut t = 0.0;
        params.push(t);
        for w in points.windows(2) {
            t += step(w[0], w[1]);
            params.push(t);
        }
        let period = t + step(points[points.len() - 1], points[0]);

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        Some(ParametricSpline {
            x: PeriodicSpline::new(&params, &xs, period)?,
            y: PeriodicSpline::new(&params, &ys, period)?,
            params,
        })
    }

    /// The parameter value of each input point.
    #[inline]
    pub fn parameters(&self) -> &[f64] {
        &self.params
    }

    /// The parameter length of the full loop.
    #[inline]
    pub fn period(&self) -> f64 {
        self.x.period()
    }

    /// The spline for the x coordinate.
    #[inline]
    pub fn x_spline(&self) -> &PeriodicSpline {
        &self.x
    }

    /// The spline for the y coordinate.
    #[inline]
    pub fn y_spline(&self) -> &PeriodicSpline {
        &self.y
    }

    /// The point at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        Point::new(self.x.eval(t), self.y.eval(t))
    }
}

/// Resamples a closed parametric spline through the input.
///
/// The samples are equally spaced in parameter over one full period, both
/// ends included, so the first and last samples are both the first input
/// point and the output draws as a closed polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParametricSplineFitter {
    spline_size: usize,
}

impl ParametricSplineFitter {
    /// Create a fitter producing `spline_size` points.
    ///
    /// Sizes below [`MIN_SPLINE_SIZE`](crate::MIN_SPLINE_SIZE) are raised to it.
    pub fn new(spline_size: usize) -> Self {
        ParametricSplineFitter {
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
        let Some(spline) = ParametricSpline::new(points) else {
            return points.to_vec();
        };
        let delta = spline.period() / (self.spline_size - 1) as f64;
        (0..self.spline_size)
            .map(|i| spline.eval(i as f64 * delta))
            .collect()
    }
}

impl Default for ParametricSplineFitter {
    fn default() -> Self {
        ParametricSplineFitter::new(DEFAULT_SPLINE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn hexagon(radius: f64) -> Vec<Point> {
        (0..6)
            .map(|i| {
                let th = i as f64 * core::f64::consts::PI / 3.0;
                Point::new(radius * th.cos(), radius * th.sin())
            })
            .collect()
    }

    #[test]
    fn hexagon_scenario() {
        let points = hexagon(10.0);
        let fitted = ParametricSplineFitter::new(100).fit(&points);
        assert_eq!(fitted.len(), 100);

        // closed loop
        assert_near(fitted[0], fitted[99], 1e-9);
        assert_near(fitted[0], points[0], 1e-9);

        // no wild overshoot beyond the polygon
        for p in &fitted {
            assert!(p.x.abs() <= 11.0 && p.y.abs() <= 11.0, "{p:?}");
            assert!(p.to_vec2().hypot() >= 8.0, "{p:?}");
        }

        // tangent direction is continuous across the seam
        let d_start = (fitted[1] - fitted[0]).normalize();
        let d_end = (fitted[99] - fitted[98]).normalize();
        assert!(d_start.dot(d_end) > 0.99);
    }

    #[test]
    fn interpolates_input() {
        let points: Vec<Point> = [(0.0, 0.0), (5.0, 1.0), (7.0, 6.0), (3.0, 9.0), (-2.0, 4.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        let spline = ParametricSpline::new(&points).unwrap();
        for (p, t) in points.iter().zip(spline.parameters()) {
            assert_near(spline.eval(*t), *p, 1e-9);
        }
        assert_near(spline.eval(spline.period()), points[0], 1e-9);
    }

    #[test]
    fn periodic_seam_is_smooth() {
        let params = [0.0, 1.0, 2.5, 3.0, 4.5];
        let values = [1.0, -2.0, 0.5, 3.0, 2.0];
        let spline = PeriodicSpline::new(&params, &values, 6.0).unwrap();
        let polys = spline.polynomials();
        let last = polys.last().unwrap();
        let h = 6.0 - 4.5;
        assert!((last.value_at(h) + values[4] - values[0]).abs() < 1e-9);
        assert!((last.slope_at(h) - polys[0].slope_at(0.0)).abs() < 1e-9);
        assert!((last.curvature_at(h) - polys[0].curvature_at(0.0)).abs() < 1e-9);
        // evaluation wraps in both directions
        assert!((spline.eval(2.5 + 6.0) - 0.5).abs() < 1e-9);
        assert!((spline.eval(1.0 - 12.0) + 2.0).abs() < 1e-9);
    }

    #[test]
    fn parameter_step_floor() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let spline = ParametricSpline::new(&points).unwrap();
        let params = spline.parameters();
        assert!((params[1] - 1.0).abs() < 1e-12);
        assert!((params[2] - (1.0 + 9.9)).abs() < 1e-12);
    }

    #[test]
    fn explicit_seam_is_dropped() {
        let mut points = hexagon(10.0);
        let open = ParametricSpline::new(&points).unwrap();
        points.push(points[0]);
        let closed = ParametricSpline::new(&points).unwrap();
        assert_eq!(open, closed);
    }

    #[test]
    fn short_closed_input_is_fitted() {
        let fitter = ParametricSplineFitter::new(50);
        let there_and_back = [(0.0, 0.0), (5.0, 5.0), (0.0, 0.0)].map(Point::from);
        let fitted = fitter.fit(&there_and_back);
        assert_eq!(fitted.len(), 50);
        assert!(fitted.iter().all(|p| p.is_finite()));
        assert_near(fitted[0], there_and_back[0], 1e-9);

        let same = [Point::new(1.0, 1.0); 3];
        let fitted = fitter.fit(&same);
        assert_eq!(fitted.len(), 50);
        for p in &fitted {
            assert_near(*p, same[0], 1e-9);
        }
    }

    #[test]
    fn triangle_is_enough() {
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)];
        let fitted = ParametricSplineFitter::new(20).fit(&points);
        assert_eq!(fitted.len(), 20);
        assert!(fitted.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn short_input_passes_through() {
        let fitter = ParametricSplineFitter::default();
        let two = [Point::new(1.0, 2.0), Point::new(3.0, -1.0)];
        assert_eq!(fitter.fit(&two), two.to_vec());
        assert!(fitter.fit(&[]).is_empty());
        assert_eq!(ParametricSplineFitter::new(0).fit(&hexagon(3.0)).len(), 10);
    }
}
