// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic polynomials without a constant term, the building block of a
//! piecewise cubic spline.

use crate::Point;

/// A cubic polynomial `c3·t³ + c2·t² + c1·t` without constant term.
///
/// A spline segment is described relative to its start knot: the constant
/// term is the ordinate of that knot and `t` is the offset from it. The
/// polynomial itself does not know either.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplinePolynomial {
    /// Coefficient of the cubic term.
    pub c3: f64,
    /// Coefficient of the quadratic term.
    pub c2: f64,
    /// Coefficient of the linear term.
    pub c1: f64,
}

impl SplinePolynomial {
    /// Create a polynomial from its coefficients.
    #[inline]
    pub const fn new(c3: f64, c2: f64, c1: f64) -> SplinePolynomial {
        SplinePolynomial { c3, c2, c1 }
    }

    /// The value at `t`.
    #[inline]
    pub fn value_at(&self, t: f64) -> f64 {
        ((self.c3 * t + self.c2) * t + self.c1) * t
    }

    /// The first derivative at `t`.
    #[inline]
    pub fn slope_at(&self, t: f64) -> f64 {
        (3.0 * self.c3 * t + 2.0 * self.c2) * t + self.c1
    }

    /// The second derivative at `t`.
    #[inline]
    pub fn curvature_at(&self, t: f64) -> f64 {
        6.0 * self.c3 * t + 2.0 * self.c2
    }

    /// The polynomial that starts at the origin with slope `m1` and reaches
    /// `(dx, dy)` with slope `m2`.
    ///
    /// `dx` must not be zero; the coefficients are not finite otherwise.
    pub fn from_slopes(dx: f64, dy: f64, m1: f64, m2: f64) -> SplinePolynomial {
        let c2 = (3.0 * dy / dx - 2.0 * m1 - m2) / dx;
        let c3 = ((m2 - m1) / dx - 2.0 * c2) / (3.0 * dx);
        SplinePolynomial::new(c3, c2, m1)
    }

    /// Like [`from_slopes`](Self::from_slopes), for the segment from `p1` to `p2`.
    #[inline]
    pub fn from_slopes_points(p1: Point, p2: Point, m1: f64, m2: f64) -> SplinePolynomial {
        Self::from_slopes(p2.x - p1.x, p2.y - p1.y, m1, m2)
    }

    /// The polynomial that starts at the origin with second derivative `cv1`
    /// and reaches `(dx, dy)` with second derivative `cv2`.
    ///
    /// `dx` must not be zero; the coefficients are not finite otherwise.
    pub fn from_curvatures(dx: f64, dy: f64, cv1: f64, cv2: f64) -> SplinePolynomial {
        let c3 = (cv2 - cv1) / (6.0 * dx);
        let c2 = 0.5 * cv1;
        let c1 = dy / dx - (c3 * dx + c2) * dx;
        SplinePolynomial::new(c3, c2, c1)
    }

    /// Like [`from_curvatures`](Self::from_curvatures), for the segment from
    /// `p1` to `p2`.
    #[inline]
    pub fn from_curvatures_points(p1: Point, p2: Point, cv1: f64, cv2: f64) -> SplinePolynomial {
        Self::from_curvatures(p2.x - p1.x, p2.y - p1.y, cv1, cv2)
    }
}
