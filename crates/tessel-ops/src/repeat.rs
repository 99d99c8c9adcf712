//! Domain repetition: periodic tiling of a field.
//!
//! Each point is assigned to its nearest lattice cell
//! (`round(point / spacing)` per axis, optionally clamped to
//! `[-count, count]`), mapped into that cell's local frame, and the base
//! field is evaluated there. A single cell lookup leaves seams when the
//! base shape reaches across a cell boundary, so the lookup is widened to
//! every cell within `padding` steps per axis and the candidates are
//! combined with an elementwise minimum.
//!
//! An axis with zero spacing is not repeated: its cell index is always 0
//! and its padding is forced to 0.
//!
//! Cell indices round half to even, so a point exactly on a boundary
//! between cells 0 and 1 belongs to cell 0, and one between cells 1 and 2
//! belongs to cell 2.
//!
//! Constructed via the builder pattern: [`Repeat::builder`].

use tessel_core::param::{self, PerAxis};
use tessel_core::{AxisParam, ConfigError, DistanceBatch, EvalError, Field, PointBatch, Sdf};

/// Periodic tiling of a base field.
///
/// # Examples
///
/// ```
/// use tessel_core::{Field, PointBatch};
/// use tessel_ops::Repeat;
///
/// let dot = Field::from_fn("dot", Some(2), |p| (p[0] * p[0] + p[1] * p[1]).sqrt() - 0.5);
/// let grid = Repeat::builder(&dot, 2.0).build().unwrap();
///
/// assert_eq!(grid.cell_index(&[4.1, -1.9]).as_slice(), &[2, -1]);
///
/// let tiled = Field::new(grid);
/// let pts = PointBatch::from_points(&[[4.0, -2.0]]).unwrap();
/// assert_eq!(tiled.evaluate(&pts).unwrap().values(), &[-0.5]);
/// ```
#[derive(Debug)]
pub struct Repeat {
    operand: [Field; 1],
    dim: usize,
    spacing: PerAxis<f64>,
    count: Option<PerAxis<u32>>,
    padding: PerAxis<u32>,
    offsets: Vec<PerAxis<i64>>,
}

/// Builder for [`Repeat`].
///
/// Required: the operand and `spacing`. Defaults: no `count` (infinite
/// tiling), `padding` 0, dimension taken from the operand or from any
/// per-axis parameter.
#[derive(Clone, Debug)]
pub struct RepeatBuilder {
    operand: Field,
    spacing: AxisParam<f64>,
    count: Option<AxisParam<u32>>,
    padding: AxisParam<u32>,
    dim: Option<usize>,
}

impl Repeat {
    /// Create a builder tiling `operand` with cell size `spacing`.
    pub fn builder(operand: &Field, spacing: impl Into<AxisParam<f64>>) -> RepeatBuilder {
        RepeatBuilder {
            operand: operand.clone(),
            spacing: spacing.into(),
            count: None,
            padding: AxisParam::Uniform(0),
            dim: None,
        }
    }

    /// Cell size per axis.
    pub fn spacing(&self) -> &[f64] {
        &self.spacing
    }

    /// Per-axis cell index bound, if the tiling is finite.
    pub fn count(&self) -> Option<&[u32]> {
        self.count.as_deref()
    }

    /// Effective neighbour search radius per axis (0 on unrepeated axes).
    pub fn padding(&self) -> &[u32] {
        &self.padding
    }

    /// Neighbour cell offsets searched for every point, first axis
    /// varying slowest.
    pub fn neighbour_offsets(&self) -> &[PerAxis<i64>] {
        &self.offsets
    }

    /// The (clamped) cell a point belongs to, before neighbour offsets.
    ///
    /// # Panics
    ///
    /// Panics if `point` has fewer than [`dim`](Sdf::dim) coordinates.
    pub fn cell_index(&self, point: &[f64]) -> PerAxis<i64> {
        (0..self.dim)
            .map(|axis| self.axis_cell(axis, point[axis]) as i64)
            .collect()
    }

    #[inline]
    fn axis_cell(&self, axis: usize, x: f64) -> f64 {
        let s = self.spacing[axis];
        let q = if s != 0.0 { x / s } else { 0.0 };
        let cell = q.round_ties_even();
        match &self.count {
            Some(count) => {
                let c = f64::from(count[axis]);
                cell.clamp(-c, c)
            }
            None => cell,
        }
    }
}

impl RepeatBuilder {
    /// Bound the tiling to cells `-count..=count` on each axis.
    pub fn count(mut self, count: impl Into<AxisParam<u32>>) -> Self {
        self.count = Some(count.into());
        self
    }

    /// Search `padding` neighbouring cells in each direction (default: 0).
    pub fn padding(mut self, padding: impl Into<AxisParam<u32>>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the spatial dimension explicitly.
    ///
    /// Needed only when the operand is dimension-agnostic and every
    /// parameter is given as a single scalar.
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = Some(dim);
        self
    }

    fn resolve_dim(&self) -> Result<usize, ConfigError> {
        if let Some(0) = self.dim {
            return Err(ConfigError::InvalidParameter {
                name: "dim",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        match (self.dim, self.operand.dim()) {
            (Some(expected), Some(actual)) if expected != actual => {
                return Err(ConfigError::DimensionMismatch { expected, actual });
            }
            _ => {}
        }
        self.dim
            .or_else(|| self.operand.dim())
            .or_else(|| self.spacing.axis_count())
            .or_else(|| self.count.as_ref().and_then(AxisParam::axis_count))
            .or_else(|| self.padding.axis_count())
            .filter(|&d| d > 0)
            .ok_or(ConfigError::UnknownDimension { name: "repeat" })
    }

    /// Build the tiling, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the dimension cannot be derived, or is 0
    /// - an explicit dimension conflicts with the operand's
    /// - a per-axis parameter has the wrong number of components
    /// - a spacing component is negative, NaN or infinite
    /// - the neighbour search would need more than `usize::MAX` cells
    pub fn build(self) -> Result<Repeat, ConfigError> {
        let dim = self.resolve_dim()?;

        let spacing = self.spacing.resolve("spacing", dim)?;
        for &s in &spacing {
            param::non_negative("spacing", s)?;
        }
        let count = self
            .count
            .as_ref()
            .map(|c| c.resolve("count", dim))
            .transpose()?;
        let mut padding = self.padding.resolve("padding", dim)?;
        for (p, &s) in padding.iter_mut().zip(&spacing) {
            if s == 0.0 {
                *p = 0;
            }
        }

        let mut candidates = 1usize;
        for &p in &padding {
            candidates = (p as usize)
                .checked_mul(2)
                .and_then(|n| n.checked_add(1))
                .and_then(|n| candidates.checked_mul(n))
                .ok_or(ConfigError::InvalidParameter {
                    name: "padding",
                    value: f64::from(p),
                    reason: "neighbour search too large",
                })?;
        }
        let offsets = neighbour_offsets(&padding);
        debug_assert_eq!(offsets.len(), candidates);

        log::debug!(
            "repeat '{}': dim={dim}, spacing={spacing:?}, count={count:?}, padding={padding:?}, {candidates} candidate cells",
            self.operand.name(),
        );

        Ok(Repeat {
            operand: [self.operand],
            dim,
            spacing,
            count,
            padding,
            offsets,
        })
    }

    /// Build the tiling and wrap it in a [`Field`].
    pub fn build_field(self) -> Result<Field, ConfigError> {
        self.build().map(Field::new)
    }
}

/// Cartesian product of `-p..=p` over each axis, first axis slowest.
fn neighbour_offsets(padding: &[u32]) -> Vec<PerAxis<i64>> {
    let mut offsets: Vec<PerAxis<i64>> = vec![PerAxis::new()];
    for &p in padding {
        let p = i64::from(p);
        offsets = offsets
            .into_iter()
            .flat_map(|prefix| {
                (-p..=p).map(move |o| {
                    let mut next = prefix.clone();
                    next.push(o);
                    next
                })
            })
            .collect();
    }
    offsets
}

impl Sdf for Repeat {
    fn name(&self) -> &str {
        "repeat"
    }

    fn dim(&self) -> Option<usize> {
        Some(self.dim)
    }

    fn operands(&self) -> &[Field] {
        &self.operand
    }

    fn evaluate(&self, points: &PointBatch) -> Result<DistanceBatch, EvalError> {
        let dim = self.dim;
        if points.dim() != dim {
            return Err(EvalError::DimensionMismatch {
                field: self.name().to_string(),
                expected: dim,
                actual: points.dim(),
            });
        }
        log::trace!(
            "repeat: {} points x {} candidate cells",
            points.len(),
            self.offsets.len()
        );

        let cells: Vec<f64> = points
            .iter()
            .flat_map(|p| p.iter().enumerate().map(|(axis, &x)| self.axis_cell(axis, x)))
            .collect();

        let local_frame = |offset: &PerAxis<i64>| {
            points.remap(|i, src, dst| {
                let cell = &cells[i * dim..(i + 1) * dim];
                for axis in 0..dim {
                    let index = cell[axis] + offset[axis] as f64;
                    dst[axis] = src[axis] - self.spacing[axis] * index;
                }
            })
        };

        // `offsets` always holds at least the zero offset.
        let mut acc = self.operand[0].evaluate(&local_frame(&self.offsets[0]))?;
        for offset in &self.offsets[1..] {
            let d = self.operand[0].evaluate(&local_frame(offset))?;
            acc = acc.zip_with(&d, f64::min)?;
        }
        Ok(acc)
    }
}

/// Tile `other` with cell size `spacing`, optional bound `count`, and
/// neighbour search radius `padding`.
pub fn repeat(
    other: &Field,
    spacing: impl Into<AxisParam<f64>>,
    count: Option<AxisParam<u32>>,
    padding: impl Into<AxisParam<u32>>,
) -> Result<Field, ConfigError> {
    let mut builder = Repeat::builder(other, spacing).padding(padding);
    builder.count = count;
    builder.build_field()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use proptest::prelude::*;
    use tessel_test_utils::{ball, constant};

    fn disk() -> Field {
        ball(&[0.0, 0.0], 0.5)
    }

    fn eval_at(f: &Field, p: [f64; 2]) -> f64 {
        f.evaluate(&PointBatch::from_points(&[p]).unwrap()).unwrap()[0]
    }

    // ── Cell assignment ─────────────────────────────────────────

    #[test]
    fn corner_point_rounds_to_origin_cell() {
        let r = Repeat::builder(&disk(), [2.0, 2.0]).build().unwrap();
        assert_eq!(r.cell_index(&[1.0, 1.0]).as_slice(), &[0, 0]);
    }

    #[test]
    fn ties_round_half_to_even() {
        let r = Repeat::builder(&disk(), 2.0).build().unwrap();
        assert_eq!(r.cell_index(&[1.0, 0.0]).as_slice(), &[0, 0]);
        assert_eq!(r.cell_index(&[3.0, 0.0]).as_slice(), &[2, 0]);
        assert_eq!(r.cell_index(&[-1.0, -3.0]).as_slice(), &[0, -2]);
        assert_eq!(r.cell_index(&[1.0001, 0.0]).as_slice(), &[1, 0]);
    }

    #[test]
    fn count_clamps_cells() {
        let r = Repeat::builder(&disk(), 1.0).count([1u32, 3]).build().unwrap();
        assert_eq!(r.cell_index(&[10.2, -10.2]).as_slice(), &[1, -3]);
        assert_eq!(r.count(), Some(&[1u32, 3][..]));

        // Beyond the last cell the distance keeps growing.
        let f = Field::new(r);
        assert!((eval_at(&f, [3.0, 0.0]) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_spacing_axis_is_not_repeated() {
        let r = Repeat::builder(&disk(), [2.0, 0.0]).padding(3u32).build().unwrap();
        assert_eq!(r.padding(), &[3, 0]);
        assert_eq!(r.cell_index(&[4.0, 100.0]).as_slice(), &[2, 0]);
        assert_eq!(r.neighbour_offsets().len(), 7);

        let f = Field::new(r);
        let d = eval_at(&f, [4.0, 3.0]);
        assert!(d.is_finite());
        assert!((d - 2.5).abs() < 1e-12);
    }

    // ── Neighbour search ────────────────────────────────────────

    #[test]
    fn neighbour_offsets_are_cartesian_product() {
        let r = Repeat::builder(&disk(), 1.0).padding([1u32, 2]).build().unwrap();
        let offsets = r.neighbour_offsets();
        assert_eq!(offsets.len(), 3 * 5);
        let unique: IndexSet<_> = offsets.iter().collect();
        assert_eq!(unique.len(), offsets.len());
        assert_eq!(offsets[0].as_slice(), &[-1, -2]);
        assert_eq!(offsets[1].as_slice(), &[-1, -1]);
        assert_eq!(offsets[14].as_slice(), &[1, 2]);
    }

    #[test]
    fn zero_padding_samples_one_cell() {
        let r = Repeat::builder(&disk(), 2.0).build().unwrap();
        assert_eq!(r.neighbour_offsets().len(), 1);
        assert_eq!(r.neighbour_offsets()[0].as_slice(), &[0, 0]);
    }

    #[test]
    fn padding_closes_seams() {
        // Radius 1.5 exceeds half the spacing, so each copy reaches into
        // the neighbouring cells.
        let big = ball(&[0.0, 0.0], 1.5);
        let narrow = repeat(&big, 2.0, None, 0u32).unwrap();
        let wide = repeat(&big, 2.0, None, 1u32).unwrap();

        // Just past the 0|1 boundary both searches agree on the nearest copy.
        let p = [1.01, 0.0];
        let d_narrow = eval_at(&narrow, p);
        let d_wide = eval_at(&wide, p);
        assert!((d_narrow - (0.99 - 1.5)).abs() < 1e-12);
        assert!((d_wide - (0.99 - 1.5)).abs() < 1e-12);

        let q = [1.0, 1.0];
        assert!(eval_at(&wide, q) <= eval_at(&narrow, q));

        // A shape offset from its cell centre overlaps the next cell.
        let offset = ball(&[0.8, 0.0], 0.9);
        let narrow = repeat(&offset, 2.0, None, 0u32).unwrap();
        let wide = repeat(&offset, 2.0, None, 1u32).unwrap();
        let seam = [1.2, 0.0];
        assert!(eval_at(&wide, seam) < eval_at(&narrow, seam));
        assert!(eval_at(&wide, seam) < 0.0);
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn dimension_from_per_axis_parameter() {
        let r = Repeat::builder(&constant(1.0), [1.0, 2.0, 3.0]).build().unwrap();
        assert_eq!(r.dim(), Some(3));
    }

    #[test]
    fn unknown_dimension_rejected() {
        assert_eq!(
            Repeat::builder(&constant(1.0), 1.0).build().unwrap_err(),
            ConfigError::UnknownDimension { name: "repeat" }
        );
        assert!(Repeat::builder(&constant(1.0), 1.0).dim(2).build().is_ok());
    }

    #[test]
    fn explicit_dimension_must_match_operand() {
        assert_eq!(
            Repeat::builder(&disk(), 1.0).dim(3).build().unwrap_err(),
            ConfigError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert!(matches!(
            Repeat::builder(&disk(), 1.0).dim(0).build(),
            Err(ConfigError::InvalidParameter { name: "dim", .. })
        ));
    }

    #[test]
    fn malformed_axis_lengths_rejected() {
        assert!(matches!(
            Repeat::builder(&disk(), [1.0, 1.0, 1.0]).build(),
            Err(ConfigError::AxisCountMismatch { name: "spacing", expected: 2, actual: 3 })
        ));
        assert!(matches!(
            Repeat::builder(&disk(), 1.0).padding([1u32]).build(),
            Err(ConfigError::AxisCountMismatch { name: "padding", .. })
        ));
        assert!(matches!(
            Repeat::builder(&disk(), 1.0).count(vec![1u32, 1, 1]).build(),
            Err(ConfigError::AxisCountMismatch { name: "count", .. })
        ));
    }

    #[test]
    fn negative_spacing_rejected() {
        assert!(matches!(
            Repeat::builder(&disk(), [1.0, -1.0]).build(),
            Err(ConfigError::InvalidParameter { name: "spacing", .. })
        ));
    }

    #[test]
    fn node_rejects_wrong_dimension_without_field_handle() {
        let r = Repeat::builder(&disk(), 2.0).build().unwrap();
        let pts = PointBatch::from_points(&[[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(
            Sdf::evaluate(&r, &pts),
            Err(EvalError::DimensionMismatch {
                field: "repeat".into(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn evaluation_preserves_batch_shape() {
        let f = repeat(&disk(), 1.5, None, 1u32).unwrap();
        let pts = PointBatch::new((0..24).map(|i| i as f64 * 0.3).collect(), &[3, 4], 2).unwrap();
        let d = f.evaluate(&pts).unwrap();
        assert_eq!(d.shape(), &[3, 4]);
    }

    proptest! {
        #[test]
        fn tiling_is_periodic(
            x in -3.0f64..3.0, y in -3.0f64..3.0,
            i in -5i32..5, j in -5i32..5,
        ) {
            let f = repeat(&disk(), 2.0, None, 1u32).unwrap();
            let a = eval_at(&f, [x, y]);
            let b = eval_at(&f, [x + 2.0 * f64::from(i), y + 2.0 * f64::from(j)]);
            prop_assert!((a - b).abs() < 1e-9);
        }

        #[test]
        fn wider_padding_never_increases_distance(
            x in -6.0f64..6.0, y in -6.0f64..6.0,
            r in 0.1f64..2.5,
        ) {
            let base = ball(&[0.3, -0.2], r);
            let p0 = repeat(&base, 2.0, None, 0u32).unwrap();
            let p1 = repeat(&base, 2.0, None, 1u32).unwrap();
            prop_assert!(eval_at(&p1, [x, y]) <= eval_at(&p0, [x, y]));
        }
    }
}
