//! Combinators for Tessel distance fields.
//!
//! Every combinator takes one or more [`Field`](tessel_core::Field)
//! handles plus scalar parameters and returns a new field. Operands are
//! shared, never copied or mutated, and combinators nest arbitrarily.
//!
//! # Combinators
//!
//! | Function | Node | Result |
//! |----------|------|--------|
//! | [`union()`] | [`Boolean`] | inside any operand, optionally smoothed |
//! | [`difference()`] | [`Boolean`] | first operand minus the rest |
//! | [`intersection()`] | [`Boolean`] | inside every operand |
//! | [`blend()`] | [`Blend`] | linear cross-fade of field values |
//! | [`negate()`] | [`Unary`] | complement |
//! | [`dilate()`] / [`erode()`] | [`Unary`] | grow / shrink by a radius |
//! | [`shell()`] | [`Unary`] | hollow shell around the surface |
//! | [`repeat()`] | [`Repeat`] | periodic tiling with neighbour search |
//!
//! # Smoothing
//!
//! The boolean combinators choose, for each operand they fold in, between
//! the hard `min`/`max` and the quadratic kernel in [`smooth`]. A
//! call-level `k` wins; otherwise the radius carried by the operand
//! ([`Field::with_smoothing`](tessel_core::Field::with_smoothing)) is used;
//! otherwise the step is hard.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blend;
pub mod boolean;
pub mod ext;
pub mod repeat;
pub mod smooth;
pub mod unary;

pub use blend::{blend, Blend, DEFAULT_BLEND};
pub use boolean::{difference, intersection, union, Boolean, BooleanOp};
pub use ext::FieldExt;
pub use repeat::{repeat, Repeat, RepeatBuilder};
pub use smooth::Step;
pub use unary::{dilate, erode, negate, shell, Unary, UnaryOp};
