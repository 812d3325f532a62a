// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitter configuration.

use core::str::FromStr;

use crate::{
    BasisSplineFitter, BezierCurveFitter, BoundaryType, CurveFitter, NaturalSplineFitter,
    ParametricSplineFitter, ParseKindError, SplineParametrization,
};

/// The smallest number of points a resampling fitter produces.
pub const MIN_SPLINE_SIZE: usize = 10;

/// The number of points a resampling fitter produces unless told otherwise.
pub const DEFAULT_SPLINE_SIZE: usize = 250;

#[inline]
pub(crate) fn clamp_spline_size(spline_size: usize) -> usize {
    spline_size.max(MIN_SPLINE_SIZE)
}

/// Which fitting strategy to build from a [`FitterConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FitterKind {
    /// [`NaturalSplineFitter`].
    Natural,
    /// [`ParametricSplineFitter`].
    Parametric,
    /// [`BezierCurveFitter`].
    Bezier,
    /// [`BasisSplineFitter`].
    BasisSpline,
    /// Natural spline for inputs with strictly increasing x, parametric
    /// spline otherwise.
    Auto,
}

impl FitterKind {
    /// Every kind, in declaration order.
    pub const ALL: [FitterKind; 5] = [
        FitterKind::Natural,
        FitterKind::Parametric,
        FitterKind::Bezier,
        FitterKind::BasisSpline,
        FitterKind::Auto,
    ];

    /// The kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            FitterKind::Natural => "natural",
            FitterKind::Parametric => "parametric",
            FitterKind::Bezier => "bezier",
            FitterKind::BasisSpline => "basis-spline",
            FitterKind::Auto => "auto",
        }
    }
}

impl FromStr for FitterKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("fitter kind", s))
    }
}

/// The parameters shared by the fitter family.
///
/// Not every fitter reads every field: `spline_size` applies to the
/// resampling fitters, while `boundary_type` and `parametrization` apply to
/// [`BasisSplineFitter`].
///
/// ```
/// use curvefit::{BoundaryType, FitterConfig, FitterKind, Point};
///
/// let config = FitterConfig::default()
///     .with_spline_size(40)
///     .with_boundary_type(BoundaryType::Closed);
/// let points = [(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)].map(Point::from);
/// let fitted = config.build(FitterKind::Natural).fit(&points);
/// assert_eq!(fitted.points().map(<[Point]>::len), Some(40));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitterConfig {
    /// The number of output points; values below [`MIN_SPLINE_SIZE`] are
    /// raised to it when a fitter is built.
    pub spline_size: usize,
    /// How the ends of the basis spline are treated.
    pub boundary_type: BoundaryType,
    /// The knot spacing of the basis spline.
    pub parametrization: SplineParametrization,
}

impl Default for FitterConfig {
    fn default() -> Self {
        FitterConfig {
            spline_size: DEFAULT_SPLINE_SIZE,
            boundary_type: BoundaryType::Conditional,
            parametrization: SplineParametrization::Chordal,
        }
    }
}

impl FitterConfig {
    /// Set the number of output points, clamped to [`MIN_SPLINE_SIZE`].
    #[must_use]
    pub fn with_spline_size(mut self, spline_size: usize) -> Self {
        self.spline_size = clamp_spline_size(spline_size);
        self
    }

    /// Set the boundary type.
    #[must_use]
    pub fn with_boundary_type(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = boundary_type;
        self
    }

    /// Set the parametrization.
    #[must_use]
    pub fn with_parametrization(mut self, parametrization: SplineParametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    /// Build a fitter of the given kind.
    pub fn build(&self, kind: FitterKind) -> CurveFitter {
        let spline_size = clamp_spline_size(self.spline_size);
        match kind {
            FitterKind::Natural => CurveFitter::Natural(NaturalSplineFitter::new(spline_size)),
            FitterKind::Parametric => {
                CurveFitter::Parametric(ParametricSplineFitter::new(spline_size))
            }
            FitterKind::Bezier => CurveFitter::Bezier(BezierCurveFitter::new(spline_size)),
            FitterKind::BasisSpline => CurveFitter::BasisSpline(
                BasisSplineFitter::new()
                    .with_parametrization(self.parametrization)
                    .with_boundary_type(self.boundary_type),
            ),
            FitterKind::Auto => CurveFitter::Auto { spline_size },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FitterConfig::default();
        assert_eq!(config.spline_size, 250);
        assert_eq!(config.boundary_type, BoundaryType::Conditional);
        assert_eq!(config.parametrization, SplineParametrization::Chordal);
    }

    #[test]
    fn spline_size_is_clamped() {
        assert_eq!(FitterConfig::default().with_spline_size(3).spline_size, MIN_SPLINE_SIZE);
        assert_eq!(FitterConfig::default().with_spline_size(11).spline_size, 11);

        // direct field writes are clamped on build
        let config = FitterConfig {
            spline_size: 0,
            ..FitterConfig::default()
        };
        match config.build(FitterKind::Natural) {
            CurveFitter::Natural(f) => assert_eq!(f.spline_size(), MIN_SPLINE_SIZE),
            other => panic!("unexpected fitter {other:?}"),
        }
        assert_eq!(
            config.build(FitterKind::Auto),
            CurveFitter::Auto {
                spline_size: MIN_SPLINE_SIZE
            }
        );
    }

    #[test]
    fn build_every_kind() {
        let config = FitterConfig::default()
            .with_boundary_type(BoundaryType::Periodic)
            .with_parametrization(SplineParametrization::Centripetal);
        for kind in FitterKind::ALL {
            assert_eq!(config.build(kind).kind(), kind);
        }
        match config.build(FitterKind::BasisSpline) {
            CurveFitter::BasisSpline(f) => {
                assert_eq!(f.boundary_type(), BoundaryType::Periodic);
                assert_eq!(f.parametrization(), SplineParametrization::Centripetal);
            }
            other => panic!("unexpected fitter {other:?}"),
        }
    }

    #[test]
    fn parse_kind() {
        for kind in FitterKind::ALL {
            assert_eq!(kind.name().parse::<FitterKind>(), Ok(kind));
        }
        assert_eq!("Basis-Spline".parse(), Ok(FitterKind::BasisSpline));
        let err = "spiral".parse::<FitterKind>().unwrap_err();
        assert_eq!(err.kind(), "fitter kind");
        assert_eq!(err.name(), "spiral");
    }
}
