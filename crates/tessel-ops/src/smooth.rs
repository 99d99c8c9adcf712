//! Quadratic smoothing kernel shared by the boolean combinators.
//!
//! Each kernel blends a running accumulator `d1` with the next operand's
//! distance `d2` over a radius `k`:
//!
//! 1. a blend factor `h`, always clipped to `[0, 1]`;
//! 2. a linear interpolation `m` between the two distances;
//! 3. a quadratic correction of magnitude `k·h·(1-h)`.
//!
//! The result is C¹-continuous across a band of width about `k` around the
//! seam. Away from the seam `h` saturates at 0 or 1, the correction
//! vanishes, and the kernel returns exactly the hard boolean result.
//!
//! The kernels require `k > 0`; [`Step::resolve`] never produces a
//! smoothing step with a zero radius.

use tessel_core::SmoothingRadius;

/// Smooth minimum (union) of `d1` and `d2` over radius `k`.
#[inline]
pub fn smooth_union(d1: f64, d2: f64, k: f64) -> f64 {
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    let m = d2 + (d1 - d2) * h;
    m - k * h * (1.0 - h)
}

/// Smooth subtraction of `d2`'s solid from `d1`'s solid over radius `k`.
#[inline]
pub fn smooth_difference(d1: f64, d2: f64, k: f64) -> f64 {
    let h = (0.5 - 0.5 * (d2 + d1) / k).clamp(0.0, 1.0);
    let m = d1 + (-d2 - d1) * h;
    m + k * h * (1.0 - h)
}

/// Smooth maximum (intersection) of `d1` and `d2` over radius `k`.
#[inline]
pub fn smooth_intersection(d1: f64, d2: f64, k: f64) -> f64 {
    let h = (0.5 - 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    let m = d2 + (d1 - d2) * h;
    m + k * h * (1.0 - h)
}

/// How one pairwise step of a boolean fold combines its inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Elementwise `min`/`max`.
    Hard,
    /// Quadratic smoothing with a strictly positive radius.
    Smooth(f64),
}

impl Step {
    /// Pick the step for folding in one operand.
    ///
    /// The call-level radius wins over the operand-carried one; with
    /// neither, the step is hard. A resolved radius of zero is the hard
    /// limit of the kernel and yields [`Step::Hard`].
    pub fn resolve(explicit: Option<SmoothingRadius>, carried: Option<SmoothingRadius>) -> Self {
        match explicit.or(carried) {
            Some(k) if k.get() > 0.0 => Self::Smooth(k.get()),
            _ => Self::Hard,
        }
    }
}
