//! Core types and traits for Tessel distance fields.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tessel workspace:
//! the [`Sdf`] node trait, the shared [`Field`] handle, point and
//! distance batches, validated parameters, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod error;
pub mod field;
pub mod param;

pub use batch::{BatchShape, DistanceBatch, PointBatch};
pub use error::{BatchError, ConfigError, EvalError};
pub use field::{common_dim, Field, FnField, Sdf};
pub use param::{AxisParam, PerAxis, SmoothingRadius};
