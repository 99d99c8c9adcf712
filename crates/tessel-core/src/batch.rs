//! Flat point and distance batches.
//!
//! A [`PointBatch`] is conceptually an array of shape `[..., D]`: a batch
//! shape of arbitrary rank followed by one trailing spatial axis. A
//! [`DistanceBatch`] has the same batch shape and no trailing axis. Both
//! are stored row-major in a single `Vec<f64>`.

use crate::error::BatchError;
use smallvec::SmallVec;
use std::ops::Index;

/// Batch shape of a point or distance batch (excluding the spatial axis).
///
/// An empty shape denotes a single point. The `SmallVec<[usize; 4]>`
/// avoids heap allocation for batches of rank up to 4.
pub type BatchShape = SmallVec<[usize; 4]>;

fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))
}

/// A batch of points of fixed spatial dimension.
///
/// # Examples
///
/// ```
/// use tessel_core::PointBatch;
///
/// let batch = PointBatch::from_points(&[[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
/// assert_eq!(batch.dim(), 2);
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch.point(1), &[2.0, 3.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PointBatch {
    coords: Vec<f64>,
    shape: BatchShape,
    dim: usize,
}

impl PointBatch {
    /// Build a batch from a flat row-major coordinate buffer.
    ///
    /// `shape` is the batch shape without the trailing spatial axis;
    /// `coords.len()` must equal `product(shape) * dim`.
    pub fn new(coords: Vec<f64>, shape: &[usize], dim: usize) -> Result<Self, BatchError> {
        if dim == 0 {
            return Err(BatchError::ZeroDimension);
        }
        let expected = element_count(shape)
            .and_then(|n| n.checked_mul(dim))
            .unwrap_or(usize::MAX);
        if coords.len() != expected {
            return Err(BatchError::LengthMismatch {
                expected,
                actual: coords.len(),
            });
        }
        Ok(Self {
            coords,
            shape: SmallVec::from_slice(shape),
            dim,
        })
    }

    /// Build a one-dimensional batch (shape `[n]`) from fixed-size points.
    pub fn from_points<const D: usize>(points: &[[f64; D]]) -> Result<Self, BatchError> {
        let coords = points.iter().flat_map(|p| p.iter().copied()).collect();
        Self::new(coords, &[points.len()], D)
    }

    /// Build a batch holding exactly one point (empty batch shape).
    pub fn single(point: &[f64]) -> Result<Self, BatchError> {
        Self::new(point.to_vec(), &[], point.len())
    }

    /// Spatial dimension `D`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Batch shape, excluding the spatial axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of points in the batch.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Returns `true` if the batch holds no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The flat row-major coordinate buffer.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Coordinates of the `i`-th point in row-major batch order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn point(&self, i: usize) -> &[f64] {
        &self.coords[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over points in row-major batch order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f64> {
        self.coords.chunks_exact(self.dim)
    }

    /// Produce a new batch of the same shape and dimension by rewriting
    /// each point.
    ///
    /// `f` receives the point index, the source coordinates, and the
    /// destination slice to fill.
    pub fn remap<F>(&self, mut f: F) -> PointBatch
    where
        F: FnMut(usize, &[f64], &mut [f64]),
    {
        let mut coords = vec![0.0; self.coords.len()];
        for (i, (src, dst)) in self
            .coords
            .chunks_exact(self.dim)
            .zip(coords.chunks_exact_mut(self.dim))
            .enumerate()
        {
            f(i, src, dst);
        }
        PointBatch {
            coords,
            shape: self.shape.clone(),
            dim: self.dim,
        }
    }

    /// Evaluate a pointwise function over every point.
    pub fn map_to_distances<F>(&self, f: F) -> DistanceBatch
    where
        F: Fn(&[f64]) -> f64,
    {
        DistanceBatch {
            values: self.iter().map(f).collect(),
            shape: self.shape.clone(),
        }
    }
}

/// Signed distances for a batch of points.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceBatch {
    values: Vec<f64>,
    shape: BatchShape,
}

impl DistanceBatch {
    /// Build a distance batch from a flat buffer and batch shape.
    pub fn new(values: Vec<f64>, shape: &[usize]) -> Result<Self, BatchError> {
        let expected = element_count(shape).unwrap_or(usize::MAX);
        if values.len() != expected {
            return Err(BatchError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            values,
            shape: SmallVec::from_slice(shape),
        })
    }

    /// Batch shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of distances.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the batch holds no distances.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The flat row-major distance buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the batch, returning the flat buffer.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Apply `f` to every distance in place.
    pub fn map<F>(mut self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        for v in &mut self.values {
            *v = f(*v);
        }
        self
    }

    /// Combine with another batch of the same shape, elementwise.
    ///
    /// `f` receives `(self[i], other[i])` and its result replaces `self[i]`.
    pub fn zip_with<F>(mut self, other: &DistanceBatch, f: F) -> Result<Self, BatchError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape != other.shape {
            return Err(BatchError::ShapeMismatch {
                expected: self.shape.to_vec(),
                actual: other.shape.to_vec(),
            });
        }
        for (a, &b) in self.values.iter_mut().zip(&other.values) {
            *a = f(*a, b);
        }
        Ok(self)
    }
}

impl Index<usize> for DistanceBatch {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_rejects_zero_dimension() {
        assert_eq!(
            PointBatch::new(vec![], &[0], 0),
            Err(BatchError::ZeroDimension)
        );
    }

    #[test]
    fn new_rejects_length_mismatch() {
        assert_eq!(
            PointBatch::new(vec![0.0; 5], &[2], 3),
            Err(BatchError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn multi_rank_batch_shape() {
        let b = PointBatch::new(vec![0.0; 2 * 3 * 2], &[2, 3], 2).unwrap();
        assert_eq!(b.shape(), &[2, 3]);
        assert_eq!(b.len(), 6);
        assert_eq!(b.dim(), 2);
    }

    #[test]
    fn single_point_has_empty_shape() {
        let b = PointBatch::single(&[1.0, 2.0, 3.0]).unwrap();
        assert!(b.shape().is_empty());
        assert_eq!(b.len(), 1);
        assert_eq!(b.point(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_batch_is_valid() {
        let b = PointBatch::from_points::<3>(&[]).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.shape(), &[0]);
        let d = b.map_to_distances(|_| 0.0);
        assert!(d.is_empty());
    }

    // ── Mapping ─────────────────────────────────────────────────

    #[test]
    fn remap_preserves_shape() {
        let b = PointBatch::new(vec![1.0, 2.0, 3.0, 4.0], &[1, 2], 2).unwrap();
        let shifted = b.remap(|_, src, dst| {
            dst[0] = src[0] - 1.0;
            dst[1] = src[1] + 1.0;
        });
        assert_eq!(shifted.shape(), &[1, 2]);
        assert_eq!(shifted.coords(), &[0.0, 3.0, 2.0, 5.0]);
    }

    #[test]
    fn map_to_distances_keeps_batch_shape() {
        let b = PointBatch::new(vec![3.0, 4.0, 0.0, 0.0], &[2, 1], 2).unwrap();
        let d = b.map_to_distances(|p| (p[0] * p[0] + p[1] * p[1]).sqrt());
        assert_eq!(d.shape(), &[2, 1]);
        assert_eq!(d.values(), &[5.0, 0.0]);
    }

    #[test]
    fn zip_with_rejects_shape_mismatch() {
        let a = DistanceBatch::new(vec![1.0, 2.0], &[2]).unwrap();
        let b = DistanceBatch::new(vec![1.0, 2.0], &[1, 2]).unwrap();
        assert!(matches!(
            a.zip_with(&b, f64::min),
            Err(BatchError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn zip_with_combines_elementwise() {
        let a = DistanceBatch::new(vec![1.0, 5.0], &[2]).unwrap();
        let b = DistanceBatch::new(vec![3.0, 2.0], &[2]).unwrap();
        let m = a.zip_with(&b, f64::min).unwrap();
        assert_eq!(m.values(), &[1.0, 2.0]);
        assert_eq!(m[1], 2.0);
    }

    proptest! {
        #[test]
        fn point_accessor_matches_flat_layout(
            dim in 1usize..5,
            n in 0usize..20,
        ) {
            let coords: Vec<f64> = (0..n * dim).map(|i| i as f64).collect();
            let b = PointBatch::new(coords, &[n], dim).unwrap();
            prop_assert_eq!(b.len(), n);
            for (i, p) in b.iter().enumerate() {
                prop_assert_eq!(p, b.point(i));
                prop_assert_eq!(p[0], (i * dim) as f64);
            }
        }
    }
}
