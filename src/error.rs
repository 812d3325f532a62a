// Copyright 2024 the Curvefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from parsing fitter configuration.

use alloc::string::String;
use core::fmt;

/// An error which can be returned when parsing a configuration name such as
/// a [`SplineParametrization`] or a [`BoundaryType`].
///
/// [`SplineParametrization`]: crate::SplineParametrization
/// [`BoundaryType`]: crate::BoundaryType
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    kind: &'static str,
    name: String,
}

impl ParseKindError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        ParseKindError {
            kind,
            name: name.into(),
        }
    }

    /// The kind of value that was being parsed, e.g. `"parametrization"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The name that did not match any known value.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}, \"{}\"", self.kind, self.name)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseKindError {}
