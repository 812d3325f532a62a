// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fitter family behind one type.

use alloc::vec::Vec;

use crate::{
    BasisSplineFitter, BezPath, BezierCurveFitter, FitterKind, NaturalSplineFitter,
    ParamCurve, ParametricSplineFitter, Point,
};

/// Any of the curve fitters.
///
/// ```
/// use curvefit::{CurveFitter, FitResult, NaturalSplineFitter, Point};
///
/// let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)].map(Point::from);
/// let fitter = CurveFitter::Natural(NaturalSplineFitter::new(20));
/// match fitter.fit(&points) {
///     FitResult::Points(p) => assert_eq!(p.len(), 20),
///     FitResult::Path(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CurveFitter {
    /// Natural cubic spline of `y(x)`.
    Natural(NaturalSplineFitter),
    /// Closed parametric spline.
    Parametric(ParametricSplineFitter),
    /// Local Bézier interpolation of `y(x)`.
    Bezier(BezierCurveFitter),
    /// Bézier path of a B-spline.
    BasisSpline(BasisSplineFitter),
    /// Natural spline when x is strictly increasing, parametric otherwise.
    Auto {
        /// The number of output points.
        spline_size: usize,
    },
}

/// The output of [`CurveFitter::fit`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitResult {
    /// A resampled polyline.
    Points(Vec<Point>),
    /// A path of cubic segments.
    Path(BezPath),
}

impl CurveFitter {
    /// Fit the points.
    pub fn fit(&self, points: &[Point]) -> FitResult {
        match self {
            CurveFitter::Natural(f) => FitResult::Points(f.fit(points)),
            CurveFitter::Parametric(f) => FitResult::Points(f.fit(points)),
            CurveFitter::Bezier(f) => FitResult::Points(f.fit(points)),
            CurveFitter::BasisSpline(f) => FitResult::Path(f.fit(points)),
            CurveFitter::Auto { spline_size } => {
                let points = if is_strictly_increasing_x(points) {
                    NaturalSplineFitter::new(*spline_size).fit(points)
                } else {
                    ParametricSplineFitter::new(*spline_size).fit(points)
                };
                FitResult::Points(points)
            }
        }
    }

    /// The kind this fitter would be built from.
    pub fn kind(&self) -> FitterKind {
        match self {
            CurveFitter::Natural(_) => FitterKind::Natural,
            CurveFitter::Parametric(_) => FitterKind::Parametric,
            CurveFitter::Bezier(_) => FitterKind::Bezier,
            CurveFitter::BasisSpline(_) => FitterKind::BasisSpline,
            CurveFitter::Auto { .. } => FitterKind::Auto,
        }
    }

    /// Whether [`fit`](Self::fit) returns [`FitResult::Path`].
    #[inline]
    pub fn produces_path(&self) -> bool {
        matches!(self, CurveFitter::BasisSpline(_))
    }
}

impl From<NaturalSplineFitter> for CurveFitter {
    fn from(f: NaturalSplineFitter) -> Self {
        CurveFitter::Natural(f)
    }
}

impl From<ParametricSplineFitter> for CurveFitter {
    fn from(f: ParametricSplineFitter) -> Self {
        CurveFitter::Parametric(f)
    }
}

impl From<BezierCurveFitter> for CurveFitter {
    fn from(f: BezierCurveFitter) -> Self {
        CurveFitter::Bezier(f)
    }
}

impl From<BasisSplineFitter> for CurveFitter {
    fn from(f: BasisSplineFitter) -> Self {
        CurveFitter::BasisSpline(f)
    }
}

impl FitResult {
    /// The resampled points, if this is a polyline.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            FitResult::Points(p) => Some(p),
            FitResult::Path(_) => None,
        }
    }

    /// The path, if this is a path.
    pub fn path(&self) -> Option<&BezPath> {
        match self {
            FitResult::Points(_) => None,
            FitResult::Path(p) => Some(p),
        }
    }

    /// Whether the result holds no points or no path elements.
    pub fn is_empty(&self) -> bool {
        match self {
            FitResult::Points(p) => p.is_empty(),
            FitResult::Path(p) => p.is_empty(),
        }
    }

    /// A polyline for drawing.
    ///
    /// Each path segment is sampled at `steps` equal parameter steps, so a
    /// path of `n` segments gives `1 + n * steps` points.
    pub fn to_polyline(&self, steps: usize) -> Vec<Point> {
        match self {
            FitResult::Points(p) => p.clone(),
            FitResult::Path(p) => {
                let steps = steps.max(1);
                let mut result = Vec::new();
                for (i, seg) in p.segments().enumerate() {
                    if i == 0 {
                        result.push(seg.start());
                    }
                    result.extend((1..=steps).map(|k| seg.eval(k as f64 / steps as f64)));
                }
                result
            }
        }
    }
}

fn is_strictly_increasing_x(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x < w[1].x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundaryType, FitterConfig, ParametricSpline};

    fn zigzag() -> Vec<Point> {
        [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    fn square() -> Vec<Point> {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn dispatch_matches_fitters() {
        let points = zigzag();
        let natural = NaturalSplineFitter::new(30);
        assert_eq!(
            CurveFitter::from(natural).fit(&points),
            FitResult::Points(natural.fit(&points))
        );
        let bezier = BezierCurveFitter::new(30);
        assert_eq!(
            CurveFitter::from(bezier).fit(&points),
            FitResult::Points(bezier.fit(&points))
        );
        let basis = BasisSplineFitter::new();
        let fitter = CurveFitter::from(basis);
        assert!(fitter.produces_path());
        assert_eq!(fitter.fit(&points), FitResult::Path(basis.fit(&points)));
    }

    #[test]
    fn auto_picks_by_x_order() {
        let auto = CurveFitter::Auto { spline_size: 40 };
        assert!(!auto.produces_path());

        let points = zigzag();
        assert_eq!(
            auto.fit(&points),
            FitResult::Points(NaturalSplineFitter::new(40).fit(&points))
        );

        let points = square();
        let fitted = auto.fit(&points);
        assert_eq!(
            fitted,
            FitResult::Points(ParametricSplineFitter::new(40).fit(&points))
        );
        let spline = ParametricSpline::new(&points).unwrap();
        let first = fitted.points().unwrap()[0];
        assert!((first - spline.eval(0.0)).hypot() < 1e-12);
    }

    #[test]
    fn result_accessors() {
        let points = zigzag();
        let fitted = CurveFitter::Natural(NaturalSplineFitter::new(12)).fit(&points);
        assert!(fitted.path().is_none());
        assert_eq!(fitted.to_polyline(8).len(), 12);

        let config = FitterConfig::default().with_boundary_type(BoundaryType::Closed);
        let fitted = config.build(FitterKind::BasisSpline).fit(&points);
        let path = fitted.path().unwrap();
        assert!(fitted.points().is_none());
        let polyline = fitted.to_polyline(8);
        assert_eq!(polyline.len(), 1 + 8 * path.segments().count());
        assert_eq!(polyline.first(), polyline.last());
        let seg = path.segments().next().unwrap();
        assert!((polyline[8] - seg.end()).hypot() < 1e-12);

        let empty = CurveFitter::BasisSpline(BasisSplineFitter::new()).fit(&points[..3]);
        assert!(empty.is_empty());
    }
}
