//! Validated construction-time parameters.
//!
//! Scalar parameters are checked once when a field node is built, never
//! at evaluation time. Per-axis parameters accept either one value for
//! every axis or an explicit sequence, and are normalized to a fixed
//! length [`PerAxis`] array.

use crate::error::ConfigError;
use smallvec::SmallVec;

/// A parameter normalized to one value per spatial axis.
pub type PerAxis<T> = SmallVec<[T; 4]>;

/// Check that `value` is finite.
pub fn finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Check that `value` is finite and `>= 0`.
pub fn non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-negative",
        })
    }
}

/// Smoothing radius for the smooth boolean operations.
///
/// Always finite and non-negative. A radius of zero is the hard-boolean
/// limit of the smoothing kernel.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SmoothingRadius(f64);

impl SmoothingRadius {
    /// Validate and wrap a radius.
    pub fn new(k: f64) -> Result<Self, ConfigError> {
        non_negative("k", k).map(Self)
    }

    /// Validate an optional radius, passing `None` through.
    pub fn from_option(k: Option<f64>) -> Result<Option<Self>, ConfigError> {
        k.map(Self::new).transpose()
    }

    /// The radius value.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// A parameter given either once for all axes or per axis.
///
/// # Examples
///
/// ```
/// use tessel_core::AxisParam;
///
/// let uniform: AxisParam<f64> = 2.0.into();
/// assert_eq!(uniform.resolve("spacing", 3).unwrap().as_slice(), &[2.0, 2.0, 2.0]);
///
/// let per_axis: AxisParam<f64> = [1.0, 0.0].into();
/// assert!(per_axis.resolve("spacing", 3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum AxisParam<T> {
    /// The same value on every axis.
    Uniform(T),
    /// One value per axis; the length must equal the spatial dimension.
    PerAxis(Vec<T>),
}

impl<T: Copy> AxisParam<T> {
    /// Number of axes this parameter pins down, if it is per-axis.
    pub fn axis_count(&self) -> Option<usize> {
        match self {
            Self::Uniform(_) => None,
            Self::PerAxis(v) => Some(v.len()),
        }
    }

    /// Normalize to exactly `dim` values.
    ///
    /// Returns `Err(ConfigError::AxisCountMismatch)` if a per-axis value
    /// has the wrong length.
    pub fn resolve(&self, name: &'static str, dim: usize) -> Result<PerAxis<T>, ConfigError> {
        match self {
            Self::Uniform(v) => Ok(SmallVec::from_elem(*v, dim)),
            Self::PerAxis(v) if v.len() == dim => Ok(SmallVec::from_slice(v)),
            Self::PerAxis(v) => Err(ConfigError::AxisCountMismatch {
                name,
                expected: dim,
                actual: v.len(),
            }),
        }
    }
}

macro_rules! axis_param_from {
    ($($t:ty),*) => {$(
        impl From<$t> for AxisParam<$t> {
            fn from(v: $t) -> Self {
                Self::Uniform(v)
            }
        }

        impl<const N: usize> From<[$t; N]> for AxisParam<$t> {
            fn from(v: [$t; N]) -> Self {
                Self::PerAxis(v.to_vec())
            }
        }

        impl From<Vec<$t>> for AxisParam<$t> {
            fn from(v: Vec<$t>) -> Self {
                Self::PerAxis(v)
            }
        }

        impl From<&[$t]> for AxisParam<$t> {
            fn from(v: &[$t]) -> Self {
                Self::PerAxis(v.to_vec())
            }
        }
    )*};
}

axis_param_from!(f64, u32);
