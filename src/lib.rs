// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth curves through sequences of 2D points.
//!
//! The curvefit library turns an ordered sequence of points, such as the
//! samples of a plotted series or the corners of a polygon, into a smooth
//! curve. It offers a family of fitters with a common shape: each either
//! resamples the curve into a new, denser sequence of points, or describes it
//! as a path of cubic Bézier segments.
//!
//! - [`NaturalSplineFitter`]: natural cubic spline of `y(x)`, resampled at
//!   equally spaced x.
//! - [`ParametricSplineFitter`]: closed curve with both coordinates as
//!   periodic splines of a chord-length parameter.
//! - [`BasisSplineFitter`]: a [`BezPath`] of a B-spline, built locally from
//!   windows of four points.
//! - [`BezierCurveFitter`]: local Bézier interpolation of `y(x)`, resampled at
//!   equally spaced x.
//! - [`smooth`]: inserts points along the long edges of a polyline.
//!
//! [`CurveFitter`] holds any of them, and [`FitterConfig`] builds one from a
//! few plain parameters.
//!
//! # Examples
//!
//! Resampling a series:
//! ```
//! use curvefit::{NaturalSplineFitter, Point};
//!
//! let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)].map(Point::from);
//! let fitted = NaturalSplineFitter::new(50).fit(&points);
//! assert_eq!(fitted.len(), 50);
//! assert_eq!(fitted[0], Point::new(0.0, 0.0));
//! assert_eq!(fitted[49], Point::new(4.0, 0.0));
//! ```
//!
//! Building a path, and choosing the fitter from configuration:
//! ```
//! use curvefit::{BoundaryType, FitResult, FitterConfig, FitterKind, Point};
//!
//! let polygon = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)].map(Point::from);
//! let config = FitterConfig::default().with_boundary_type(BoundaryType::Closed);
//! let kind: FitterKind = "basis-spline".parse().unwrap();
//! let FitResult::Path(path) = config.build(kind).fit(&polygon) else {
//!     panic!("expected a path");
//! };
//! assert_eq!(path.segments().count(), 4);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate uses the `alloc` crate regardless.
//!
//! Points, vectors and paths are the [`kurbo`] types, re-exported here. The
//! `serde` and `schemars` features derive serialization and JSON schema
//! support for the configuration types and enable the same features in
//! kurbo; `mint` enables kurbo's conversions for [`Point`] and [`Vec2`].
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names, clippy::bool_to_int_with_if)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("curvefit requires either the `std` or `libm` feature");

extern crate alloc;

mod bezier_curve;
mod bezier_spline;
pub mod common;
mod config;
mod error;
mod fitter;
mod natural_spline;
mod parametric_spline;
mod parametrization;
mod polynomial;
mod smooth;

pub use kurbo;
pub use kurbo::{BezPath, CubicBez, ParamCurve, PathEl, PathSeg, Point, Vec2};

pub use crate::bezier_curve::*;
pub use crate::bezier_spline::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::fitter::*;
pub use crate::natural_spline::*;
pub use crate::parametric_spline::*;
pub use crate::parametrization::*;
pub use crate::polynomial::*;
pub use crate::smooth::*;
