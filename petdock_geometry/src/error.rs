// Copyright 2025 the Petdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when geometry configuration or host input is unusable.
///
/// Geometry queries themselves never fail; these errors only surface from
/// validation at construction time.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// The widget scale is non-finite or not strictly positive.
    InvalidScale(f64),
    /// The screen size is non-finite or negative.
    InvalidScreen {
        /// Reported screen width.
        width: f64,
        /// Reported screen height.
        height: f64,
    },
    /// A metrics field is non-finite or out of its allowed range.
    InvalidMetric {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// An edge-offset key does not have the form `stage{N}_{normal|dying}`.
    MalformedOffsetKey(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale(scale) => write!(f, "widget scale {scale} must be finite and > 0"),
            Self::InvalidScreen { width, height } => {
                write!(f, "screen size {width}x{height} must be finite and non-negative")
            }
            Self::InvalidMetric { field, value } => {
                write!(f, "metric `{field}` has unusable value {value}")
            }
            Self::MalformedOffsetKey(key) => {
                write!(f, "edge offset key {key:?} is not `stage<N>_<normal|dying>`")
            }
        }
    }
}

impl core::error::Error for GeometryError {}
