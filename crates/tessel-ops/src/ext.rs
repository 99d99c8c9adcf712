//! Method-call sugar for building field graphs.

use crate::blend::blend;
use crate::boolean::{difference, intersection, union};
use crate::repeat::{Repeat, RepeatBuilder};
use crate::unary::{dilate, erode, negate, shell};
use tessel_core::{AxisParam, ConfigError, Field};

/// Combinator methods on [`Field`].
///
/// Each method forwards to the free function of the same name with `self`
/// as the first operand.
///
/// ```
/// use tessel_core::{Field, PointBatch};
/// use tessel_ops::FieldExt;
///
/// let plane = Field::from_fn("plane", Some(2), |p| p[1]);
/// let post = Field::from_fn("post", Some(2), |p| p[0].abs() - 0.25);
///
/// let fence = plane
///     .union(&[post.repeat(1.0).padding(1u32).build_field().unwrap()], Some(0.1))
///     .unwrap()
///     .shell(0.05)
///     .unwrap();
/// let d = fence.evaluate(&PointBatch::from_points(&[[0.25, 5.0]]).unwrap()).unwrap();
/// assert!(d[0] < 0.0);
/// ```
pub trait FieldExt {
    /// See [`union`](crate::union()).
    fn union(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError>;
    /// See [`difference`](crate::difference()).
    fn difference(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError>;
    /// See [`intersection`](crate::intersection()).
    fn intersection(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError>;
    /// See [`blend`](crate::blend()).
    fn blend(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError>;
    /// See [`negate`](crate::negate()).
    fn negate(&self) -> Field;
    /// See [`dilate`](crate::dilate()).
    fn dilate(&self, r: f64) -> Result<Field, ConfigError>;
    /// See [`erode`](crate::erode()).
    fn erode(&self, r: f64) -> Result<Field, ConfigError>;
    /// See [`shell`](crate::shell()).
    fn shell(&self, thickness: f64) -> Result<Field, ConfigError>;
    /// Start a [`Repeat`] builder with this field as the operand.
    fn repeat(&self, spacing: impl Into<AxisParam<f64>>) -> RepeatBuilder;
}

impl FieldExt for Field {
    fn union(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
        union(self, others, k)
    }

    fn difference(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
        difference(self, others, k)
    }

    fn intersection(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
        intersection(self, others, k)
    }

    fn blend(&self, others: &[Field], k: Option<f64>) -> Result<Field, ConfigError> {
        blend(self, others, k)
    }

    fn negate(&self) -> Field {
        negate(self)
    }

    fn dilate(&self, r: f64) -> Result<Field, ConfigError> {
        dilate(self, r)
    }

    fn erode(&self, r: f64) -> Result<Field, ConfigError> {
        erode(self, r)
    }

    fn shell(&self, thickness: f64) -> Result<Field, ConfigError> {
        shell(self, thickness)
    }

    fn repeat(&self, spacing: impl Into<AxisParam<f64>>) -> RepeatBuilder {
        Repeat::builder(self, spacing)
    }
}
