//! Pointwise transforms of a single field.
//!
//! - **Negate**: `-d`, the complement solid.
//! - **Dilate**: `d - r`, grows the solid by `r`.
//! - **Erode**: `d + r`, shrinks the solid by `r`.
//! - **Shell**: `|d| - t/2`, a hollow shell of total thickness `t` centred
//!   on the original surface.
//!
//! Dilation and erosion are exact offsets only for true Euclidean
//! distance fields.

use tessel_core::param;
use tessel_core::{ConfigError, DistanceBatch, EvalError, Field, PointBatch, Sdf};

/// A pointwise transform applied by a [`Unary`] node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOp {
    /// Flip inside and outside.
    Negate,
    /// Grow by the given radius.
    Dilate(f64),
    /// Shrink by the given radius.
    Erode(f64),
    /// Hollow out to the given total thickness.
    Shell(f64),
}

impl UnaryOp {
    /// Node name for this transform.
    pub fn name(self) -> &'static str {
        match self {
            Self::Negate => "negate",
            Self::Dilate(_) => "dilate",
            Self::Erode(_) => "erode",
            Self::Shell(_) => "shell",
        }
    }

    /// Apply the transform to one distance.
    #[inline]
    pub fn apply(self, d: f64) -> f64 {
        match self {
            Self::Negate => -d,
            Self::Dilate(r) => d - r,
            Self::Erode(r) => d + r,
            Self::Shell(t) => d.abs() - t / 2.0,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Negate => Ok(self),
            Self::Dilate(r) => param::non_negative("r", r).map(Self::Dilate),
            Self::Erode(r) => param::non_negative("r", r).map(Self::Erode),
            Self::Shell(t) => param::non_negative("thickness", t).map(Self::Shell),
        }
    }
}

/// A pointwise transform of one operand.
#[derive(Debug)]
pub struct Unary {
    op: UnaryOp,
    operand: [Field; 1],
}

impl Unary {
    /// Wrap `operand` in the transform `op`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a radius or thickness is negative, NaN or infinite.
    pub fn new(op: UnaryOp, operand: &Field) -> Result<Self, ConfigError> {
        Ok(Self::with_valid_op(op.validate()?, operand))
    }

    /// Complement of `operand`. Infallible, as negation takes no parameter.
    pub fn negate(operand: &Field) -> Self {
        Self::with_valid_op(UnaryOp::Negate, operand)
    }

    fn with_valid_op(op: UnaryOp, operand: &Field) -> Self {
        log::debug!("{}: {:?} of '{}'", op.name(), op, operand.name());
        Self {
            op,
            operand: [operand.clone()],
        }
    }

    /// The transform applied by this node.
    pub fn op(&self) -> UnaryOp {
        self.op
    }
}

impl Sdf for Unary {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn dim(&self) -> Option<usize> {
        self.operand[0].dim()
    }

    fn operands(&self) -> &[Field] {
        &self.operand
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        let op = self.op;
        Ok(self.operand[0].evaluate(points)?.map(|d| op.apply(d)))
    }
}

/// The complement of `other`.
pub fn negate(other: &Field) -> Field {
    Field::new(Unary::negate(other))
}

/// `other` grown outwards by `r`.
pub fn dilate(other: &Field, r: f64) -> Result<Field, ConfigError> {
    Unary::new(UnaryOp::Dilate(r), other).map(Field::new)
}

/// `other` shrunk inwards by `r`.
pub fn erode(other: &Field, r: f64) -> Result<Field, ConfigError> {
    Unary::new(UnaryOp::Erode(r), other).map(Field::new)
}

/// A shell of total `thickness` centred on the surface of `other`.
pub fn shell(other: &Field, thickness: f64) -> Result<Field, ConfigError> {
    Unary::new(UnaryOp::Shell(thickness), other).map(Field::new)
}
