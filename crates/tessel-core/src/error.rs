//! Error types for Tessel distance fields.
//!
//! Organized by the phase in which the failure is detected: batch
//! construction, field-graph construction (config), and evaluation.
//! Every failure is a deterministic function of malformed input; nothing
//! here is retried or recovered internally.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`PointBatch`](crate::PointBatch) or
/// [`DistanceBatch`](crate::DistanceBatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchError {
    /// A point batch was declared with spatial dimension 0.
    ZeroDimension,
    /// The flat buffer length does not match the declared shape.
    LengthMismatch {
        /// Number of scalars implied by the shape.
        expected: usize,
        /// Number of scalars actually supplied.
        actual: usize,
    },
    /// Two batches that must share a batch shape do not.
    ShapeMismatch {
        /// The shape that was required.
        expected: Vec<usize>,
        /// The shape that was supplied.
        actual: Vec<usize>,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "spatial dimension must be at least 1"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} scalars, shape requires {expected}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "batch shape {actual:?} does not match {expected:?}")
            }
        }
    }
}

impl Error for BatchError {}

/// Errors raised while evaluating a field on a point batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// The point batch dimension differs from the dimension the field
    /// was built for. Never broadcast.
    DimensionMismatch {
        /// Name of the field that rejected the batch.
        field: String,
        /// Dimension the field requires.
        expected: usize,
        /// Dimension of the supplied points.
        actual: usize,
    },
    /// A field returned distances whose batch shape differs from the
    /// batch shape of its input points.
    ShapeMismatch {
        /// Name of the field that broke the evaluation contract.
        field: String,
        /// Batch shape of the input points.
        expected: Vec<usize>,
        /// Batch shape of the returned distances.
        actual: Vec<usize>,
    },
    /// A batch could not be assembled during evaluation.
    Batch(BatchError),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field '{field}' expects {expected}-dimensional points, got {actual}"
            ),
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field '{field}' returned batch shape {actual:?}, expected {expected:?}"
            ),
            Self::Batch(e) => write!(f, "batch: {e}"),
        }
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Batch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BatchError> for EvalError {
    fn from(e: BatchError) -> Self {
        Self::Batch(e)
    }
}

/// Errors detected while constructing a field graph.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A scalar parameter is out of its valid range.
    InvalidParameter {
        /// Parameter name (e.g. `"k"`, `"spacing"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the valid range.
        reason: &'static str,
    },
    /// A per-axis parameter has the wrong number of components.
    AxisCountMismatch {
        /// Parameter name.
        name: &'static str,
        /// Number of axes of the field.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },
    /// Operands of one combinator require different dimensions.
    DimensionMismatch {
        /// Dimension established by an earlier operand or parameter.
        expected: usize,
        /// Conflicting dimension.
        actual: usize,
    },
    /// The spatial dimension could not be derived from the operand or
    /// any parameter.
    UnknownDimension {
        /// The combinator that needed it.
        name: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid {name} = {value}: {reason}"),
            Self::AxisCountMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{name} has {actual} components, field has {expected} axes"
            ),
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "operand dimension {actual} conflicts with {expected}")
            }
            Self::UnknownDimension { name } => {
                write!(f, "{name}: spatial dimension cannot be derived, set it explicitly")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_error_exposes_batch_source() {
        let e = EvalError::from(BatchError::ZeroDimension);
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "batch: spatial dimension must be at least 1");
    }

    #[test]
    fn dimension_mismatch_display_names_field() {
        let e = EvalError::DimensionMismatch {
            field: "ball".into(),
            expected: 3,
            actual: 2,
        };
        assert_eq!(e.to_string(), "field 'ball' expects 3-dimensional points, got 2");
        assert!(e.source().is_none());
    }

    #[test]
    fn config_error_display() {
        let e = ConfigError::InvalidParameter {
            name: "k",
            value: -1.0,
            reason: "must be finite and non-negative",
        };
        assert_eq!(e.to_string(), "invalid k = -1: must be finite and non-negative");
    }
}
