// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic B-spline approximation, emitted as a Bézier path.
//!
//! The input points are the control polygon of a cubic B-spline. Each edge
//! `P[i] → P[i + 1]` carries a knot interval `d[i]`, taken from the chosen
//! [`SplineParametrization`]. The edge is split in the ratio
//! `d[i - 1] : d[i] : d[i + 1]`, which gives the two inner control points of
//! the Bézier segment for that edge, and the junction between two segments
//! divides the line between their neighbouring control points in the ratio
//! `d[i - 1] : d[i]`. With uniform intervals this reduces to the familiar
//! one third / two thirds blends and midpoint junctions.
//!
//! This is a local method: no system is solved, and one segment depends only
//! on the points around its edge.

use core::str::FromStr;

use crate::{BezPath, ParseKindError, Point, SplineParametrization};

/// How the ends of the control polygon are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryType {
    /// An open curve that starts at the first point and ends at the last.
    #[default]
    Conditional,
    /// A closed loop: the last point is followed by the first, and the path
    /// returns to where it started.
    Closed,
    /// Like [`Closed`](Self::Closed), but the segment across the seam is not
    /// emitted. The ends of the open path still join smoothly if the seam is
    /// drawn by other means.
    Periodic,
}

impl BoundaryType {
    /// Every boundary type, in declaration order.
    pub const ALL: [BoundaryType; 3] = [
        BoundaryType::Conditional,
        BoundaryType::Closed,
        BoundaryType::Periodic,
    ];

    /// The lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            BoundaryType::Conditional => "conditional",
            BoundaryType::Closed => "closed",
            BoundaryType::Periodic => "periodic",
        }
    }

    /// Whether the control polygon wraps around from the last point to the first.
    #[inline]
    pub fn is_wrapping(self) -> bool {
        !matches!(self, BoundaryType::Conditional)
    }
}

impl FromStr for BoundaryType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("boundary type", s))
    }
}

/// Builds a cubic Bézier path approximating a B-spline over the input points.
///
/// ```
/// use curvefit::{BasisSplineFitter, BoundaryType, ParamCurve, Point};
///
/// let points = [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)].map(Point::from);
/// let segs: Vec<_> = BasisSplineFitter::new().fit(&points).segments().collect();
/// assert_eq!(segs.len(), 3);
/// assert_eq!(segs[0].start(), points[0]);
/// assert_eq!(segs[2].end(), points[3]);
///
/// let closed = BasisSplineFitter::new()
///     .with_boundary_type(BoundaryType::Closed)
///     .fit(&points);
/// let segs: Vec<_> = closed.segments().collect();
/// assert_eq!(segs[0].start(), segs[segs.len() - 1].end());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisSplineFitter {
    parametrization: SplineParametrization,
    boundary_type: BoundaryType,
}

impl BasisSplineFitter {
    /// The fewest points that produce a path.
    pub const MIN_POINTS: usize = 4;

    /// A fitter with uniform parametrization and an open boundary.
    pub fn new() -> Self {
        BasisSplineFitter {
            parametrization: SplineParametrization::Uniform,
            boundary_type: BoundaryType::Conditional,
        }
    }

    /// Set the parametrization used for the knot intervals.
    #[must_use]
    pub fn with_parametrization(mut self, parametrization: SplineParametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    /// Set the boundary type.
    #[must_use]
    pub fn with_boundary_type(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = boundary_type;
        self
    }

    /// The parametrization used for the knot intervals.
    #[inline]
    pub fn parametrization(&self) -> SplineParametrization {
        self.parametrization
    }

    /// The boundary type.
    #[inline]
    pub fn boundary_type(&self) -> BoundaryType {
        self.boundary_type
    }

    /// How many points before and after an edge influence its segment.
    #[inline]
    pub fn locality(&self) -> usize {
        2
    }

    /// Build the path.
    ///
    /// Fewer than [`MIN_POINTS`](Self::MIN_POINTS) points give an empty path.
    ///
    /// Except with [`SplineParametrization::Uniform`], consecutive knot
    /// intervals must not both be zero, and must not cancel out. Two repeated
    /// points in a row under a distance-based parametrization, or y values
    /// that go up and down by the same amount under
    /// [`SplineParametrization::Y`], give path points that are not finite.
    pub fn fit(&self, points: &[Point]) -> BezPath {
        if points.len() < Self::MIN_POINTS {
            return BezPath::new();
        }
        match self.parametrization {
            SplineParametrization::Uniform => uniform_path(points, self.boundary_type),
            p => parametrized_path(points, self.boundary_type, |p1, p2| p.increment(p1, p2)),
        }
    }
}

impl Default for BasisSplineFitter {
    fn default() -> Self {
        BasisSplineFitter::new()
    }
}

fn uniform_path(points: &[Point], boundary_type: BoundaryType) -> BezPath {
    let n = points.len();
    let third = |a: Point, b: Point| a.lerp(b, 1.0 / 3.0);

    let mut path = BezPath::new();
    let mut cp1 = third(points[0], points[1]);
    let start = if boundary_type.is_wrapping() {
        third(points[0], points[n - 1]).midpoint(cp1)
    } else {
        points[0]
    };
    path.move_to(start);

    for i in 1..n - 1 {
        let cp2 = third(points[i], points[i - 1]);
        let cp3 = third(points[i], points[i + 1]);
        path.curve_to(cp1, cp2, cp2.midpoint(cp3));
        cp1 = cp3;
    }

    let cp2 = third(points[n - 1], points[n - 2]);
    match boundary_type {
        BoundaryType::Conditional => path.curve_to(cp1, cp2, points[n - 1]),
        BoundaryType::Closed | BoundaryType::Periodic => {
            let cp3 = third(points[n - 1], points[0]);
            path.curve_to(cp1, cp2, cp2.midpoint(cp3));
            if boundary_type == BoundaryType::Closed {
                let cp4 = third(points[0], points[n - 1]);
                path.curve_to(cp3, cp4, start);
                path.close_path();
            }
        }
    }
    path
}

fn parametrized_path(
    points: &[Point],
    boundary_type: BoundaryType,
    param: impl Fn(Point, Point) -> f64,
) -> BezPath {
    let n = points.len();
    let wrapping = boundary_type.is_wrapping();
    let edges = if wrapping { n } else { n - 1 };
    let pt = |i: usize| points[i % n];
    let interval = |i: usize| param(pt(i), pt(i + 1));
    // the inner control points of edge i for the window (d[i-1], d[i], d[i+1])
    let inner = |i: usize, t0: f64, t1: f64, t2: f64| {
        let s = t0 + t1 + t2;
        (
            pt(i).lerp(pt(i + 1), t0 / s),
            pt(i).lerp(pt(i + 1), (t0 + t1) / s),
        )
    };

    let (mut t0, mut t1, mut t2) = if wrapping {
        (interval(n - 1), interval(0), interval(1))
    } else {
        let t = interval(0);
        (t, t, interval(1))
    };
    let (mut a, mut b) = inner(0, t0, t1, t2);

    let start = if wrapping {
        let (_, b_last) = inner(n - 1, interval(n - 2), t0, t1);
        b_last.lerp(a, t0 / (t0 + t1))
    } else {
        points[0]
    };
    let mut path = BezPath::new();
    path.move_to(start);

    for i in 0..edges - 1 {
        let t3 = if wrapping || i + 2 < edges {
            interval(i + 2)
        } else {
            t2
        };
        (t0, t1, t2) = (t1, t2, t3);
        let (a_next, b_next) = inner(i + 1, t0, t1, t2);
        path.curve_to(a, b, b.lerp(a_next, t0 / (t0 + t1)));
        (a, b) = (a_next, b_next);
    }

    match boundary_type {
        BoundaryType::Conditional => path.curve_to(a, b, points[n - 1]),
        BoundaryType::Closed => {
            path.curve_to(a, b, start);
            path.close_path();
        }
        BoundaryType::Periodic => {}
    }
    path
}
