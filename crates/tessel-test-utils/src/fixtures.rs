//! Closed-form reference fields.
//!
//! - [`Ball`]: exact Euclidean distance to a sphere of any dimension.
//! - [`HalfSpace`]: signed distance to the plane `n·p = offset`.
//! - [`Constant`]: the same value everywhere, in any dimension.

use tessel_core::{DistanceBatch, EvalError, Field, PointBatch, Sdf};

/// A sphere (disk in 2D, interval in 1D).
#[derive(Clone, Debug)]
pub struct Ball {
    pub center: Vec<f64>,
    pub radius: f64,
}

impl Sdf for Ball {
    fn name(&self) -> &str {
        "ball"
    }

    fn dim(&self) -> Option<usize> {
        Some(self.center.len())
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        Ok(points.map_to_distances(|p| {
            let sq: f64 = p
                .iter()
                .zip(&self.center)
                .map(|(x, c)| (x - c) * (x - c))
                .sum();
            sq.sqrt() - self.radius
        }))
    }
}

/// Everything on the side of the plane the normal points away from.
#[derive(Clone, Debug)]
pub struct HalfSpace {
    /// Unit normal.
    pub normal: Vec<f64>,
    pub offset: f64,
}

impl HalfSpace {
    /// Normalises `normal`.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is empty or has zero length.
    pub fn new(normal: &[f64], offset: f64) -> Self {
        let len = normal.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!(len > 0.0, "half-space normal must be non-zero");
        Self {
            normal: normal.iter().map(|x| x / len).collect(),
            offset,
        }
    }
}

impl Sdf for HalfSpace {
    fn name(&self) -> &str {
        "half_space"
    }

    fn dim(&self) -> Option<usize> {
        Some(self.normal.len())
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        Ok(points.map_to_distances(|p| {
            p.iter().zip(&self.normal).map(|(x, n)| x * n).sum::<f64>() - self.offset
        }))
    }
}

/// A dimension-agnostic field with one value everywhere.
#[derive(Clone, Copy, Debug)]
pub struct Constant(pub f64);

impl Sdf for Constant {
    fn name(&self) -> &str {
        "constant"
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        Ok(points.map_to_distances(|_| self.0))
    }
}

/// A [`Ball`] wrapped as a [`Field`].
pub fn ball(center: &[f64], radius: f64) -> Field {
    Field::new(Ball {
        center: center.to_vec(),
        radius,
    })
}

/// A [`HalfSpace`] wrapped as a [`Field`].
pub fn half_space(normal: &[f64], offset: f64) -> Field {
    Field::new(HalfSpace::new(normal, offset))
}

/// A [`Constant`] wrapped as a [`Field`].
pub fn constant(value: f64) -> Field {
    Field::new(Constant(value))
}
