// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve parametrization: how far apart two consecutive points are along
//! the curve parameter.

use core::str::FromStr;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{ParseKindError, Point};

/// The metric used to space consecutive points along the curve parameter.
///
/// Every variant is a pure function of two points, see [`increment`].
///
/// [`increment`]: SplineParametrization::increment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SplineParametrization {
    /// Every step is `1.0`.
    Uniform,
    /// The difference of the x coordinates.
    ///
    /// Only meaningful for increasing x; the increment is negative otherwise.
    X,
    /// The difference of the y coordinates.
    Y,
    /// The Euclidean distance.
    #[default]
    Chordal,
    /// The square root of the Euclidean distance.
    Centripetal,
    /// The sum of the absolute coordinate differences.
    Manhattan,
}

impl SplineParametrization {
    /// Every parametrization, in declaration order.
    pub const ALL: [SplineParametrization; 6] = [
        SplineParametrization::Uniform,
        SplineParametrization::X,
        SplineParametrization::Y,
        SplineParametrization::Chordal,
        SplineParametrization::Centripetal,
        SplineParametrization::Manhattan,
    ];

    /// The parameter increment between two consecutive points.
    #[inline]
    pub fn increment(self, p1: Point, p2: Point) -> f64 {
        match self {
            SplineParametrization::Uniform => increment_uniform(p1, p2),
            SplineParametrization::X => increment_x(p1, p2),
            SplineParametrization::Y => increment_y(p1, p2),
            SplineParametrization::Chordal => increment_chordal(p1, p2),
            SplineParametrization::Centripetal => increment_centripetal(p1, p2),
            SplineParametrization::Manhattan => increment_manhattan(p1, p2),
        }
    }

    /// The lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SplineParametrization::Uniform => "uniform",
            SplineParametrization::X => "x",
            SplineParametrization::Y => "y",
            SplineParametrization::Chordal => "chordal",
            SplineParametrization::Centripetal => "centripetal",
            SplineParametrization::Manhattan => "manhattan",
        }
    }
}

impl FromStr for SplineParametrization {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("parametrization", s))
    }
}

/// Uniform increment, always `1.0`.
#[inline]
pub fn increment_uniform(_p1: Point, _p2: Point) -> f64 {
    1.0
}

/// Increment along x, `p2.x - p1.x`.
#[inline]
pub fn increment_x(p1: Point, p2: Point) -> f64 {
    p2.x - p1.x
}

/// Increment along y, `p2.y - p1.y`.
#[inline]
pub fn increment_y(p1: Point, p2: Point) -> f64 {
    p2.y - p1.y
}

/// Chordal increment, the Euclidean distance.
#[inline]
pub fn increment_chordal(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Centripetal increment, `(dx² + dy²)^¼`.
#[inline]
pub fn increment_centripetal(p1: Point, p2: Point) -> f64 {
    p1.distance(p2).sqrt()
}

/// Manhattan increment, `|dx| + |dy|`.
#[inline]
pub fn increment_manhattan(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).abs() + (p2.y - p1.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn increments() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(4.0, -3.0);
        assert_eq!(SplineParametrization::Uniform.increment(p1, p2), 1.0);
        assert_eq!(SplineParametrization::X.increment(p1, p2), 3.0);
        assert_eq!(SplineParametrization::Y.increment(p1, p2), -4.0);
        assert_eq!(SplineParametrization::Chordal.increment(p1, p2), 5.0);
        assert_eq!(SplineParametrization::Manhattan.increment(p1, p2), 7.0);
        let c = SplineParametrization::Centripetal.increment(p1, p2);
        assert!((c - 5.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn x_is_signed() {
        let p1 = Point::new(2.0, 0.0);
        let p2 = Point::new(-1.0, 0.0);
        assert_eq!(increment_x(p1, p2), -3.0);
        assert_eq!(increment_chordal(p1, p2), 3.0);
        assert_eq!(increment_uniform(p1, p1), 1.0);
        assert_eq!(increment_chordal(p1, p1), 0.0);
    }

    #[test]
    fn parse_names() {
        for p in SplineParametrization::ALL {
            assert_eq!(p.name().parse::<SplineParametrization>(), Ok(p));
        }
        assert_eq!(
            "Chordal".parse::<SplineParametrization>(),
            Ok(SplineParametrization::Chordal)
        );
        let err = "arc".parse::<SplineParametrization>().unwrap_err();
        assert_eq!(err.kind(), "parametrization");
        assert_eq!(err.name(), "arc");
        assert_eq!(err.to_string(), "Unknown parametrization, \"arc\"");
    }
}
