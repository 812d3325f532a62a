// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-based polyline smoothing.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::{bezier_control_points, CubicBez, ParamCurve, Point};

/// Relative slack on the distance threshold.
///
/// Points inserted by a previous pass are spaced `distance` apart only up to
/// rounding, and must not be split again.
const DISTANCE_TOLERANCE: f64 = 1e-9;

/// Insert points along the long edges of a polyline so that it bends smoothly.
///
/// Every edge longer than `distance` is replaced by a cubic Bézier through its
/// endpoints, with control points from [`bezier_control_points`] (the first
/// and last point stand in for their own missing neighbour), sampled at
/// `ceil(length / distance)` equal parameter steps. Shorter edges are kept as
/// they are. All input points appear in the output, in order.
///
/// The output is returned unchanged for fewer than two points, or when
/// `distance` is not positive. Smoothing the output again with the same
/// `distance` changes nothing.
///
/// ```
/// use curvefit::{smooth, Point};
///
/// let smoothed = smooth(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 2.0);
/// assert_eq!(smoothed.len(), 6);
/// ```
pub fn smooth(points: &[Point], distance: f64) -> Vec<Point> {
    let n = points.len();
    if n < 2 || !(distance > 0.0) {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(n);
    result.push(points[0]);
    for i in 0..n - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let steps = (p1.distance(p2) / distance * (1.0 - DISTANCE_TOLERANCE)).ceil() as usize;
        if steps > 1 {
            let p0 = if i == 0 { p1 } else { points[i - 1] };
            let p3 = if i + 2 < n { points[i + 2] } else { p2 };
            let (s1, s2) = bezier_control_points(p0, p1, p2, p3);
            let bez = CubicBez::new(p1, s1, s2, p2);
            result.extend((1..steps).map(|k| bez.eval(k as f64 / steps as f64)));
        }
        result.push(p2);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn edge_lengths(points: &[Point]) -> impl Iterator<Item = f64> + '_ {
        points.windows(2).map(|w| w[0].distance(w[1]))
    }

    #[test]
    fn subdivides_long_edge() {
        let smoothed = smooth(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 2.0);
        assert_eq!(smoothed.len(), 6);
        for (i, p) in smoothed.iter().enumerate() {
            assert!((p.x - 2.0 * i as f64).abs() < 1e-9, "{p:?}");
            assert!(p.y.abs() < 1e-12);
        }
        assert!(edge_lengths(&smoothed).all(|d| d <= 2.0 + 1e-9));
    }

    #[test]
    fn short_edges_unchanged() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(smooth(&points, 2.0), points.to_vec());
    }

    #[test]
    fn degenerate_input() {
        assert!(smooth(&[], 1.0).is_empty());
        let one = [Point::new(3.0, 4.0)];
        assert_eq!(smooth(&one, 1.0), one.to_vec());
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert_eq!(smooth(&points, 0.0), points.to_vec());
        assert_eq!(smooth(&points, -1.0), points.to_vec());
        assert_eq!(smooth(&points, f64::NAN), points.to_vec());
    }

    #[test]
    fn keeps_input_points_in_order() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let smoothed = smooth(&points, 1.0);
        assert_eq!(smoothed[0], points[0]);
        assert_eq!(*smoothed.last().unwrap(), points[3]);
        let mut rest = smoothed.iter();
        for p in &points {
            assert!(rest.any(|q| q == p), "{p:?} missing");
        }
        assert!(smoothed.len() > 25);
        assert!(edge_lengths(&smoothed).all(|d| d < 1.5));
    }

    #[test]
    fn fixed_point_below_threshold() {
        let smoothed = smooth(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 2.0);
        assert_eq!(smooth(&smoothed, 2.0), smoothed);

        let dense: Vec<Point> = (0..20)
            .map(|i| Point::new(i as f64 * 0.5, (i as f64 * 0.3).sin()))
            .collect();
        assert_eq!(smooth(&dense, 1.0), dense);
    }

    #[test]
    fn whole_multiples_of_distance() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let distance = rng.random_range(0.1..5.0);
            let steps = rng.random_range(1..200);
            // lengths that are whole multiples of the distance, or close to it
            let length = distance * (steps as f64 + rng.random_range(0..3) as f64 * 0.5);
            let th = rng.random_range(0.0..core::f64::consts::TAU);
            let p1 = Point::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            let p2 = p1 + kurbo::Vec2::from_angle(th) * length;

            let smoothed = smooth(&[p1, p2], distance);
            for d in edge_lengths(&smoothed) {
                assert!(d > 0.49 * distance, "edge {d} for distance {distance}");
                assert!(d < distance * (1.0 + 1e-6), "edge {d} for distance {distance}");
            }
            assert_eq!(smooth(&smoothed, distance), smoothed);
        }
    }
}
