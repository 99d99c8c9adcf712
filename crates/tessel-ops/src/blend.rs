//! Linear blend of distance values.
//!
//! Folds left to right with `d1 = k·d2 + (1 − k)·d1`. This cross-fades
//! field values for morphing effects; the result is not a true distance
//! field.
//!
//! The weight for each step is the call-level `k` if given, otherwise the
//! radius carried by the operand being folded in, otherwise
//! [`DEFAULT_BLEND`]. A weight of zero is honoured at every level; the
//! step is never skipped.

use tessel_core::param;
use tessel_core::{common_dim, ConfigError, DistanceBatch, EvalError, Field, PointBatch, Sdf};

/// Weight used when neither the call nor the operand supplies one.
pub const DEFAULT_BLEND: f64 = 0.5;

/// A left fold of linear interpolation over two or more fields.
#[derive(Debug)]
pub struct Blend {
    operands: Vec<Field>,
    k: Option<f64>,
    dim: Option<usize>,
}

impl Blend {
    /// Build a blend starting at `base` and folding in `others` in order.
    ///
    /// `k` may lie outside `[0, 1]` (extrapolation) but must be finite.
    pub fn new(base: &Field, others: &[Field], k: Option<f64>) -> Result<Self, ConfigError> {
        let k = k.map(|k| param::finite("k", k)).transpose()?;
        let mut operands = Vec::with_capacity(others.len() + 1);
        operands.push(base.clone());
        operands.extend_from_slice(others);
        let dim = common_dim(&operands)?;

        log::debug!("blend: {} operands, k={k:?}, dim={dim:?}", operands.len());

        Ok(Self { operands, k, dim })
    }

    /// Weight used to fold in `operand`.
    pub fn weight_for(&self, operand: &Field) -> f64 {
        self.k
            .or_else(|| operand.smoothing().map(|k| k.get()))
            .unwrap_or(DEFAULT_BLEND)
    }
}

impl Sdf for Blend {
    fn name(&self) -> &str {
        "blend"
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
            let k = self.weight_for(operand);
            acc = acc.zip_with(&d2, |d1, d2| k * d2 + (1.0 - k) * d1)?;
        }
        Ok(acc)
    }
}

/// Blend `base` towards each field in `others` in turn.
pub fn blend(base: &Field, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
    Blend::new(base, others, k).map(Field::new)
}
