//! Field contract compliance helpers.
//!
//! These functions check that a [`Field`] honours the evaluation contract:
//! the output has the batch shape of the input, each output value depends
//! only on its own point, evaluation is deterministic, and a field with a
//! fixed dimension rejects points of any other dimension. Reused across
//! the combinator test suites.

use tessel_core::{EvalError, Field, PointBatch};

/// Assert that the output batch shape equals the input batch shape.
pub fn assert_shape_preserved(field: &Field, points: &PointBatch) {
    let out = field.evaluate(points).unwrap();
    assert_eq!(
        out.shape(),
        points.shape(),
        "'{}' changed the batch shape",
        field.name()
    );
    assert_eq!(out.len(), points.len());
}

/// Assert that evaluating points one at a time matches the batched result.
pub fn assert_elementwise(field: &Field, points: &PointBatch) {
    let batched = field.evaluate(points).unwrap();
    for (i, p) in points.iter().enumerate() {
        let single = field.evaluate(&PointBatch::single(p).unwrap()).unwrap();
        let (a, b) = (batched[i], single[0]);
        assert!(
            a == b || (a.is_nan() && b.is_nan()),
            "'{}' at {p:?}: batched {a} != single {b}",
            field.name()
        );
    }
}

/// Assert that two evaluations of the same batch agree bit for bit.
pub fn assert_deterministic(field: &Field, points: &PointBatch) {
    let a = field.evaluate(points).unwrap().into_values();
    let b = field.evaluate(points).unwrap().into_values();
    let same = a
        .iter()
        .zip(&b)
        .all(|(x, y)| x.to_bits() == y.to_bits());
    assert!(same, "'{}' evaluation is non-deterministic", field.name());
}

/// Assert that a field with a fixed dimension rejects mismatched points.
///
/// Dimension-agnostic fields pass trivially.
pub fn assert_rejects_wrong_dimension(field: &Field) {
    let Some(dim) = field.dim() else {
        return;
    };
    let wrong = PointBatch::single(&vec![0.0; dim + 1]).unwrap();
    match field.evaluate(&wrong) {
        Err(EvalError::DimensionMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, dim);
            assert_eq!(actual, dim + 1);
        }
        other => panic!(
            "'{}' accepted {}-D points: {other:?}",
            field.name(),
            dim + 1
        ),
    }
}

/// Assert that every node in the graph reports a dimension compatible with
/// its operands.
pub fn assert_dimensions_consistent(field: &Field) {
    for operand in field.operands() {
        if let (Some(outer), Some(inner)) = (field.dim(), operand.dim()) {
            assert_eq!(
                outer,
                inner,
                "'{}' declares dimension {outer} but operand '{}' has {inner}",
                field.name(),
                operand.name()
            );
        }
        assert_dimensions_consistent(operand);
    }
}

/// Run all compliance checks on `field` with `points`.
pub fn run_full_compliance(field: &Field, points: &PointBatch) {
    assert_shape_preserved(field, points);
    assert_elementwise(field, points);
    assert_deterministic(field, points);
    assert_rejects_wrong_dimension(field);
    assert_dimensions_consistent(field);
}
