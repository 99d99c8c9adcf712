//! Tessel: composable signed distance field combinators.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Tessel sub-crates. For most users, adding `tessel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // Primitive shapes are plain closures over a point.
//! let disk = Field::from_fn("disk", Some(2), |p| p[0].hypot(p[1]) - 0.4);
//! let floor = Field::from_fn("floor", Some(2), |p| p[1] + 0.2);
//!
//! // A row of disks on unit spacing, checking one neighbour each side,
//! // smoothly merged into the floor.
//! let row = disk.repeat([1.0, 0.0]).padding([1u32, 0]).build_field().unwrap();
//! let scene = floor.union(&[row], Some(0.1)).unwrap();
//!
//! let points = PointBatch::from_points(&[[3.0, 0.0], [3.5, 1.0]]).unwrap();
//! let d = scene.evaluate(&points).unwrap();
//! assert!(d[0] < 0.0);
//! assert!(d[1] > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | Batches, the `Sdf` trait, `Field`, parameters, errors |
//! | [`ops`] | `tessel-ops` | Boolean, blend, unary and repeat combinators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tessel-core`).
///
/// Contains [`types::PointBatch`], [`types::DistanceBatch`], the
/// [`types::Sdf`] trait, the [`types::Field`] handle, and the error types.
pub use tessel_core as types;

/// Combinators (`tessel-ops`).
///
/// Free functions such as [`ops::union()`] and [`ops::repeat()`], their node
/// types, and the [`ops::FieldExt`] method-call sugar.
pub use tessel_ops as ops;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tessel_core::{DistanceBatch, Field, PointBatch, Sdf};

    // Parameters
    pub use tessel_core::{AxisParam, SmoothingRadius};

    // Errors
    pub use tessel_core::{BatchError, ConfigError, EvalError};

    // Combinators
    pub use tessel_ops::{
        blend, difference, dilate, erode, intersection, negate, repeat, shell, union, FieldExt,
    };
}
