//! The [`Sdf`] trait, the shared [`Field`] handle, and closure-backed fields.

use crate::batch::{DistanceBatch, PointBatch};
use crate::error::{ConfigError, EvalError};
use crate::param::SmoothingRadius;
use std::fmt;
use std::sync::Arc;

/// A signed distance field node.
///
/// Maps a batch of points to a batch of signed distances: negative inside
/// the solid, positive outside, zero on the boundary. Implementations must
/// be elementwise independent (no point's distance may depend on any other
/// point in the batch) and must return a batch with the same batch shape
/// as the input.
///
/// Nodes are normally held behind a [`Field`] handle, which checks the
/// point dimension and output shape around every call to
/// [`evaluate`](Sdf::evaluate).
///
/// # Thread Safety
///
/// `Send + Sync` is required so that a composed field graph can be shared
/// across threads by the host program.
pub trait Sdf: Send + Sync + 'static {
    /// Human-readable node name, used in errors and graph inspection.
    fn name(&self) -> &str;

    /// Spatial dimension this node requires, or `None` if it accepts any.
    fn dim(&self) -> Option<usize> {
        None
    }

    /// Child fields this node was built from, in fold order.
    fn operands(&self) -> &[Field] {
        &[]
    }

    /// Evaluate the node on a batch of points.
    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError>;
}

/// Shared handle to a distance field node.
///
/// Cloning is cheap (one reference count increment). A handle may carry a
/// preferred smoothing radius that the boolean combinators use when the
/// caller does not pass an explicit one; see [`with_smoothing`](Field::with_smoothing).
///
/// # Examples
///
/// ```
/// use tessel_core::{Field, PointBatch};
///
/// let disk = Field::from_fn("disk", Some(2), |p| (p[0] * p[0] + p[1] * p[1]).sqrt() - 1.0);
/// let points = PointBatch::from_points(&[[0.0, 0.0], [2.0, 0.0]]).unwrap();
/// let d = disk.evaluate(&points).unwrap();
/// assert_eq!(d.values(), &[-1.0, 1.0]);
///
/// // Wrong dimensionality fails fast instead of broadcasting.
/// let points3 = PointBatch::from_points(&[[0.0, 0.0, 0.0]]).unwrap();
/// assert!(disk.evaluate(&points3).is_err());
/// ```
#[derive(Clone)]
pub struct Field {
    node: Arc<dyn Sdf>,
    smoothing: Option<SmoothingRadius>,
}

impl Field {
    /// Wrap a node in a new handle with no carried smoothing.
    pub fn new<S: Sdf>(node: S) -> Self {
        Self {
            node: Arc::new(node),
            smoothing: None,
        }
    }

    /// Wrap an already shared node.
    pub fn from_arc(node: Arc<dyn Sdf>) -> Self {
        Self {
            node,
            smoothing: None,
        }
    }

    /// Build a field from a pointwise closure. See [`FnField`].
    pub fn from_fn<F>(name: impl Into<String>, dim: Option<usize>, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::new(FnField::new(name, dim, f))
    }

    /// Return a handle to the same node carrying smoothing radius `k`.
    ///
    /// The boolean combinators use this radius for the step that folds in
    /// this operand, unless the call supplies its own `k`.
    pub fn with_smoothing(&self, k: f64) -> Result<Field, ConfigError> {
        let k = SmoothingRadius::new(k)?;
        log::debug!("field '{}' carries smoothing radius {}", self.name(), k.get());
        Ok(Self {
            node: Arc::clone(&self.node),
            smoothing: Some(k),
        })
    }

    /// Return a handle to the same node with no carried smoothing.
    pub fn without_smoothing(&self) -> Field {
        Self {
            node: Arc::clone(&self.node),
            smoothing: None,
        }
    }

    /// Smoothing radius carried by this handle, if any.
    pub fn smoothing(&self) -> Option<SmoothingRadius> {
        self.smoothing
    }

    /// Name of the underlying node.
    pub fn name(&self) -> &str {
        self.node.name()
    }

    /// Spatial dimension the underlying node requires, if fixed.
    pub fn dim(&self) -> Option<usize> {
        self.node.dim()
    }

    /// Child fields of the underlying node.
    pub fn operands(&self) -> &[Field] {
        self.node.operands()
    }

    /// The underlying node.
    pub fn node(&self) -> &dyn Sdf {
        &*self.node
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Field) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Number of nodes in the field graph, counting shared subgraphs once
    /// per reference.
    pub fn node_count(&self) -> usize {
        1 + self.operands().iter().map(Field::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.operands().iter().map(Field::depth).max().unwrap_or(0)
    }

    /// Evaluate the field on a batch of points.
    ///
    /// Returns `Err(EvalError::DimensionMismatch)` if the node requires a
    /// different spatial dimension, and `Err(EvalError::ShapeMismatch)` if
    /// the node returns a batch of the wrong shape.
    pub fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        if let Some(expected) = self.dim() {
            if points.dim() != expected {
                return Err(EvalError::DimensionMismatch {
                    field: self.name().to_string(),
                    expected,
                    actual: points.dim(),
                });
            }
        }
        let out = self.node.evaluate(points)?;
        if out.shape() != points.shape() {
            return Err(EvalError::ShapeMismatch {
                field: self.name().to_string(),
                expected: points.shape().to_vec(),
                actual: out.shape().to_vec(),
            });
        }
        Ok(out)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("dim", &self.dim())
            .field("smoothing", &self.smoothing)
            .field("operands", &self.operands())
            .finish()
    }
}

/// Resolve the spatial dimension shared by a set of operands.
///
/// Dimension-agnostic operands are ignored. Returns
/// `Err(ConfigError::DimensionMismatch)` if two operands disagree.
pub fn common_dim<'a, I>(fields: I) -> Result<Option<usize>, ConfigError>
where
    I: IntoIterator<Item = &'a Field>,
{
    let mut dim = None;
    for field in fields {
        match (dim, field.dim()) {
            (Some(expected), Some(actual)) if expected != actual => {
                return Err(ConfigError::DimensionMismatch { expected, actual });
            }
            (None, Some(actual)) => dim = Some(actual),
            _ => {}
        }
    }
    Ok(dim)
}

type PointFn = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// A field defined by a pointwise closure.
///
/// This is how host programs plug primitive shapes into the combinators.
pub struct FnField {
    name: String,
    dim: Option<usize>,
    f: Box<PointFn>,
}

impl FnField {
    /// Create a closure-backed field. `dim = None` accepts points of any
    /// dimension.
    pub fn new<F>(name: impl Into<String>, dim: Option<usize>, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            dim,
            f: Box::new(f),
        }
    }
}

impl fmt::Debug for FnField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnField")
            .field("name", &self.name)
            .field("dim", &self.dim)
            .finish_non_exhaustive()
    }
}

impl Sdf for FnField {
    fn name(&self) -> &str {
        &self.name
    }

    fn dim(&self) -> Option<usize> {
        self.dim
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        Ok(points.map_to_distances(|p| (self.f)(p)))
    }
}
