//! Test utilities for Tessel development.
//!
//! Provides closed-form reference fields ([`Ball`], [`HalfSpace`],
//! [`Constant`]), deterministic point batches, and the field-contract
//! checks in [`compliance`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use fixtures::{ball, constant, half_space, Ball, Constant, HalfSpace};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::PointBatch;

/// `n` evenly spaced 2D points from `(start, 0)` to `(end, 0)` inclusive.
///
/// With `n == 1` the batch holds only `(start, 0)`.
pub fn line_points(start: f64, end: f64, n: usize) -> PointBatch {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    let coords = (0..n)
        .flat_map(|i| [start + step * i as f64, 0.0])
        .collect();
    PointBatch::new(coords, &[n], 2).unwrap()
}

/// `n` points of dimension `dim` drawn uniformly from `[-extent, extent)`.
///
/// The same `seed` always yields the same batch.
pub fn random_points(seed: u64, n: usize, dim: usize, extent: f64) -> PointBatch {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let coords = (0..n * dim)
        .map(|_| rng.gen_range(-extent..extent))
        .collect();
    PointBatch::new(coords, &[n], dim).unwrap()
}

/// A regular `nx × ny` grid of 2D points covering `[-extent, extent]²`,
/// with batch shape `[ny, nx]`.
pub fn grid_points(nx: usize, ny: usize, extent: f64) -> PointBatch {
    let axis = |n: usize, i: usize| {
        if n > 1 {
            -extent + 2.0 * extent * i as f64 / (n - 1) as f64
        } else {
            0.0
        }
    };
    let mut coords = Vec::with_capacity(nx * ny * 2);
    for j in 0..ny {
        for i in 0..nx {
            coords.push(axis(nx, i));
            coords.push(axis(ny, j));
        }
    }
    PointBatch::new(coords, &[ny, nx], 2).unwrap()
}
