//! Boolean combinators: union, difference, intersection.
//!
//! All three fold their operands left to right. The accumulator starts as
//! the first operand's distance; each further operand is combined with the
//! accumulator using either the hard elementwise `min`/`max` or the
//! quadratic smoothing kernel, as chosen per step by [`Step::resolve`].
//!
//! Constructed via [`union`], [`difference`] and [`intersection`], or
//! directly with [`Boolean::new`].

use crate::smooth::{self, Step};
use tessel_core::{
    common_dim, ConfigError, DistanceBatch, EvalError, Field, PointBatch, Sdf, SmoothingRadius,
};

/// The boolean operation a [`Boolean`] node folds with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BooleanOp {
    /// Inside if inside any operand.
    Union,
    /// Inside the first operand and outside every later one.
    Difference,
    /// Inside if inside every operand.
    Intersection,
}

impl BooleanOp {
    /// Node name for this operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Difference => "difference",
            Self::Intersection => "intersection",
        }
    }

    /// Hard (non-smooth) combination of accumulator `d1` with `d2`.
    #[inline]
    pub fn hard(self, d1: f64, d2: f64) -> f64 {
        match self {
            Self::Union => d1.min(d2),
            Self::Difference => d1.max(-d2),
            Self::Intersection => d1.max(d2),
        }
    }

    /// Combine accumulator `d1` with `d2` according to `step`.
    #[inline]
    pub fn apply(self, step: Step, d1: f64, d2: f64) -> f64 {
        match (self, step) {
            (_, Step::Hard) => self.hard(d1, d2),
            (Self::Union, Step::Smooth(k)) => smooth::smooth_union(d1, d2, k),
            (Self::Difference, Step::Smooth(k)) => smooth::smooth_difference(d1, d2, k),
            (Self::Intersection, Step::Smooth(k)) => smooth::smooth_intersection(d1, d2, k),
        }
    }
}

/// A left fold of a boolean operation over two or more fields.
///
/// # Examples
///
/// ```
/// use tessel_core::{Field, PointBatch};
/// use tessel_ops::union;
///
/// let left = Field::from_fn("left", Some(1), |p| (p[0] + 1.0).abs() - 0.5);
/// let right = Field::from_fn("right", Some(1), |p| (p[0] - 1.0).abs() - 0.5);
///
/// let both = union(&left, &[right.clone()], None).unwrap();
/// let pts = PointBatch::from_points(&[[-1.0], [0.0], [1.0]]).unwrap();
/// assert_eq!(both.evaluate(&pts).unwrap().values(), &[-0.5, 0.5, -0.5]);
///
/// // A smooth union pulls the gap between the two solids inwards.
/// let smooth = union(&left, &[right], Some(1.0)).unwrap();
/// assert!(smooth.evaluate(&pts).unwrap()[1] < 0.5);
/// ```
#[derive(Debug)]
pub struct Boolean {
    op: BooleanOp,
    operands: Vec<Field>,
    k: Option<SmoothingRadius>,
    dim: Option<usize>,
}

impl Boolean {
    /// Build a fold of `op` starting at `base` and combining `others` in
    /// order.
    ///
    /// `k` is the call-level smoothing radius; when `None`, each step uses
    /// the radius carried by its operand, if any.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `k` is negative, NaN or infinite
    /// - two operands require different spatial dimensions
    pub fn new(
        op: BooleanOp,
        base: &Field,
        others: &[Field],
        k: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let k = SmoothingRadius::from_option(k)?;
        let mut operands = Vec::with_capacity(others.len() + 1);
        operands.push(base.clone());
        operands.extend_from_slice(others);
        let dim = common_dim(&operands)?;

        log::debug!(
            "{}: {} operands, k={:?}, dim={:?}",
            op.name(),
            operands.len(),
            k.map(SmoothingRadius::get),
            dim
        );

        Ok(Self {
            op,
            operands,
            k,
            dim,
        })
    }

    /// The folded operation.
    pub fn op(&self) -> BooleanOp {
        self.op
    }

    /// The call-level smoothing radius, if any.
    pub fn k(&self) -> Option<SmoothingRadius> {
        self.k
    }

    /// The step used to fold in `operand`.
    pub fn step_for(&self, operand: &Field) -> Step {
        Step::resolve(self.k, operand.smoothing())
    }
}

impl Sdf for Boolean {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn dim(&self) -> Option<usize> {
        self.dim
    }

    fn operands(&self) -> &[Field] {
        &self.operands
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        // `operands` always starts with the base field.
        let mut acc = self.operands[0].evaluate(points)?;
        for operand in &self.operands[1..] {
            let d2 = operand.evaluate(points)?;
            let step = self.step_for(operand);
            let op = self.op;
            acc = acc.zip_with(&d2, |d1, d2| op.apply(step, d1, d2))?;
        }
        Ok(acc)
    }
}

/// Union of `base` and every field in `others`.
///
/// Hard steps take the elementwise minimum; smooth steps round the seam
/// inwards by up to `k / 4`.
///
/// `k` applies to every step and overrides any radius the operands carry.
/// `Some(0.0)` is not treated as absent: it forces hard steps even for
/// operands that carry a radius. Pass `None` to use the carried radii.
pub fn union(base: &Field, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
    Boolean::new(BooleanOp::Union, base, others, k).map(Field::new)
}

/// `base` with each field in `others` subtracted in turn.
///
/// Hard steps compute `max(d1, -d2)`. Each subtraction sees the already
/// cut accumulator.
///
/// `k` applies to every step and overrides any radius the operands carry.
/// `Some(0.0)` is not treated as absent: it forces hard steps even for
/// operands that carry a radius. Pass `None` to use the carried radii.
pub fn difference(base: &Field, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
    Boolean::new(BooleanOp::Difference, base, others, k).map(Field::new)
}

/// Intersection of `base` and every field in `others`.
///
/// `k` applies to every step and overrides any radius the operands carry.
/// `Some(0.0)` is not treated as absent: it forces hard steps even for
/// operands that carry a radius. Pass `None` to use the carried radii.
pub fn intersection(base: &Field, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
    Boolean::new(BooleanOp::Intersection, base, others, k).map(Field::new)
}
