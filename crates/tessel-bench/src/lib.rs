//! Benchmark profiles for the Tessel combinators.
//!
//! - [`point_cloud`]: deterministic random points via seed
//! - [`csg_profile`]: a nested boolean graph of 16 smoothed balls
//! - [`lattice_profile`]: a padded 3D repeat of a shelled ball

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{ConfigError, Field, PointBatch};
use tessel_ops::FieldExt;
use tessel_test_utils::{ball, half_space, random_points};

/// `n` 3D points in `[-4, 4)³`, deterministic in `seed`.
pub fn point_cloud(seed: u64, n: usize) -> PointBatch {
    random_points(seed, n, 3, 4.0)
}

/// A ring of 16 balls smoothly unioned, cut by a half-space and hollowed.
///
/// Node count: 16 balls, 1 union, 1 half-space, 1 difference, 1 shell.
pub fn csg_profile() -> Result<Field, ConfigError> {
    let balls: Vec<Field> = (0..16)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / 16.0;
            ball(&[2.0 * a.cos(), 2.0 * a.sin(), 0.0], 0.6)
        })
        .collect();
    let ring = balls[0].union(&balls[1..], Some(0.3))?;
    let cut = half_space(&[0.0, 0.0, 1.0], 0.2);
    ring.difference(&[cut], Some(0.1))?.shell(0.05)
}

/// A ball shell tiled on a unit lattice with `padding` neighbours per axis.
///
/// Each evaluation visits `(2 * padding + 1)³` cells per point.
pub fn lattice_profile(padding: u32) -> Result<Field, ConfigError> {
    ball(&[0.0, 0.0, 0.0], 0.45)
        .shell(0.02)?
        .repeat(1.0)
        .padding(padding)
        .build_field()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_build() {
        let csg = csg_profile().unwrap();
        assert_eq!(csg.node_count(), 20);
        assert_eq!(csg.dim(), Some(3));
        let lattice = lattice_profile(1).unwrap();
        assert_eq!(lattice.dim(), Some(3));
        let pts = point_cloud(7, 64);
        assert_eq!(csg.evaluate(&pts).unwrap().len(), 64);
        assert_eq!(lattice.evaluate(&pts).unwrap().len(), 64);
    }
}
