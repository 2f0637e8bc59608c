//! Tests for the scoring engine.

use std::sync::atomic::Ordering;

use quirkysat_core::{boxed, FallibleFn, Mapped, Not, QuirkyError, ThresholdSource};
use quirkysat_test::{CountingClause, FailingClause, FibonacciClause, SequenceClause};

use super::*;

fn preference_model() -> Model<i64> {
    Model::weighted(
        vec![
            (boxed(|x: &i64| *x > 1), 10),
            (boxed(|x: &i64| *x < 10), 10),
            (boxed(|x: &i64| x % 2 == 0), 20),
        ],
        Some(20),
    )
    .unwrap()
}

fn parity_clauses() -> Vec<BoxedClause<i64>> {
    vec![
        boxed(|x: &i64| *x > 1),
        boxed(|x: &i64| *x < 10),
        boxed(|x: &i64| x % 2 == 0),
    ]
}

// ============================================================================
// Weighted
// ============================================================================

#[test]
fn test_weighted_preferences() {
    let mut model = preference_model();

    assert!(model.check(&2));
    assert!(model.check(&3));
    assert!(!model.check(&11));
    assert!(model.check(&12));
    assert_eq!(model.score(&11), 10);
    assert_eq!(model.score(&12), 30);
}

#[test]
fn test_weighted_default_threshold_is_weight_sum() {
    let model: Model<i64> = Model::weighted(
        vec![(boxed(|x: &i64| *x > 1), 10), (boxed(|x: &i64| *x < 10), 15)],
        None,
    )
    .unwrap();

    assert_eq!(model.required_score(), 25);
    assert_eq!(model.threshold_source(), ThresholdSource::Derived);
    assert_eq!(model.max_score(), 25);
}

#[test]
fn test_weighted_explicit_zero_threshold_is_kept() {
    let mut model: Model<i64> =
        Model::weighted(vec![(boxed(|_: &i64| false), 10)], Some(0)).unwrap();

    assert_eq!(model.required_score(), 0);
    assert_eq!(model.threshold_source(), ThresholdSource::Explicit);
    assert!(model.check(&0));
}

#[test]
fn test_empty_weighted_model_accepts_everything() {
    let mut model: Model<i64> = Model::weighted(Vec::new(), None).unwrap();

    assert_eq!(model.required_score(), 0);
    assert!(model.is_empty());
    assert!(model.check(&-100));
    assert!(model.check(&100));
}

#[test]
fn test_weighted_score_evaluates_every_clause() {
    let first = CountingClause::always(false);
    let second = CountingClause::always(true);
    let (first_calls, second_calls) = (first.calls(), second.calls());
    let mut model: Model<i64> =
        Model::weighted(vec![(boxed(first), 1), (boxed(second), 1)], None).unwrap();

    assert_eq!(model.score(&0), 1);
    assert!(!model.check(&0));
    assert_eq!(first_calls.load(Ordering::SeqCst), 2);
    assert_eq!(second_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_negative_weight_rejected() {
    let result: Result<Model<i64>> = Model::weighted(vec![(boxed(|_: &i64| true), -1)], None);

    match result {
        Err(QuirkyError::InvalidWeight { clause, .. }) => assert_eq!(clause, "clause-0"),
        other => panic!("expected InvalidWeight, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_nan_weight_rejected() {
    let result: Result<Model<i64, f64>> =
        Model::weighted(vec![(boxed(|_: &i64| true), f64::NAN)], None);
    assert!(matches!(result, Err(QuirkyError::InvalidWeight { .. })));
}

#[test]
fn test_overflowing_weights_rejected() {
    let result: Result<Model<i64>> = Model::weighted(
        vec![(boxed(|_: &i64| true), i64::MAX), (boxed(|_: &i64| true), 1)],
        Some(1),
    );

    match result {
        Err(QuirkyError::InvalidWeight { clause, .. }) => assert_eq!(clause, "clause-1"),
        other => panic!("expected InvalidWeight, got {:?}", other),
    }
}

#[test]
fn test_maximal_weight_scores_without_overflow() {
    let mut model: Model<i64> = Model::weighted(
        vec![(boxed(|_: &i64| true), i64::MAX), (boxed(|_: &i64| true), 0)],
        None,
    )
    .unwrap();

    assert_eq!(model.max_score(), i64::MAX);
    assert_eq!(model.score(&0), i64::MAX);
    assert!(model.check(&0));
}

#[test]
fn test_push_overflowing_weight_rejected() {
    let mut model: Model<i64, u8> =
        Model::weighted(vec![(boxed(|_: &i64| true), 200)], None).unwrap();
    let result = model.push_named_clause("extra", |_: &i64| true, 100);

    assert!(matches!(result, Err(QuirkyError::InvalidWeight { .. })));
    assert_eq!(model.len(), 1);
    assert_eq!(model.score(&0), 200);
}

#[test]
fn test_uniform_count_beyond_weight_range_saturates() {
    let clauses: Vec<BoxedClause<i64>> = (0..300).map(|_| boxed(|_: &i64| true)).collect();
    let mut model: Model<i64, u8> = Model::absolute(clauses);

    assert_eq!(model.required_score(), u8::MAX);
    assert_eq!(model.score(&0), u8::MAX);
    assert!(model.check(&0));
}

#[test]
fn test_negative_threshold_rejected() {
    let result: Result<Model<i64>> =
        Model::weighted(vec![(boxed(|_: &i64| true), 1)], Some(-5));
    assert!(matches!(result, Err(QuirkyError::InvalidThreshold(_))));
}

#[test]
fn test_float_weights() {
    let mut model: Model<i64, f64> = Model::weighted(
        vec![(boxed(|x: &i64| *x > 0), 0.75), (boxed(|x: &i64| *x > 10), 0.5)],
        Some(0.7),
    )
    .unwrap();

    assert_eq!(model.score(&5), 0.75);
    assert!(model.check(&5));
    assert!(!model.check(&-5));
}

// ============================================================================
// Simple
// ============================================================================

#[test]
fn test_simple_counts_passing_clauses() {
    let mut model: Model<i64> = Model::simple(parity_clauses(), Some(2)).unwrap();

    assert!(model.check(&2));
    assert!(model.check(&3));
    assert!(!model.check(&11));
    assert!(model.check(&12));
    assert_eq!(model.score(&11), 1);
    assert_eq!(model.score(&12), 2);
    assert_eq!(model.score(&6), 3);
    assert!(model.check(&6));
}

#[test]
fn test_simple_default_threshold_is_clause_count() {
    let model: Model<i64> = Model::simple(parity_clauses(), None).unwrap();

    assert_eq!(model.required_score(), 3);
    assert_eq!(model.threshold_source(), ThresholdSource::Derived);
}

#[test]
fn test_simple_threshold_clamped() {
    let mut model: Model<i64> = Model::simple(parity_clauses(), Some(7)).unwrap();

    assert_eq!(model.required_score(), 3);
    assert_eq!(model.threshold_source(), ThresholdSource::Clamped);
    assert!(model.check(&6));
}

#[test]
fn test_simple_ignores_pushed_weight() {
    let mut model: Model<i64> = Model::simple(parity_clauses(), Some(2)).unwrap();
    model.push_clause(|x: &i64| *x == 4, 50).unwrap();

    assert_eq!(model.clause_weight("clause-3"), Some(1));
    assert_eq!(model.score(&4), 4);
    assert_eq!(model.required_score(), 2);
    assert_eq!(model.threshold_source(), ThresholdSource::Explicit);
}

#[test]
fn test_simple_push_keeps_derived_threshold() {
    let mut model: Model<i64> = Model::simple(parity_clauses(), None).unwrap();
    model.push_clause(|x: &i64| *x > 100, 30).unwrap();

    assert_eq!(model.clause_weight("clause-3"), Some(1));
    assert_eq!(model.required_score(), 3);
    assert_eq!(model.threshold_source(), ThresholdSource::Derived);
    assert_eq!(model.max_score(), 4);
    assert!(model.check(&4));
}

#[test]
fn test_simple_push_keeps_clamped_threshold() {
    let mut model: Model<i64> = Model::simple(parity_clauses(), Some(7)).unwrap();
    model.push_named_clause("large", |x: &i64| *x > 100, 30).unwrap();

    assert_eq!(model.clause_weight("large"), Some(1));
    assert_eq!(model.required_score(), 3);
    assert_eq!(model.threshold_source(), ThresholdSource::Clamped);
    assert!(model.check(&4));
    assert!(!model.check(&11));
}

#[test]
fn test_default_configuration_is_simple() {
    let mut model: Model<i64> = Model::new(parity_clauses());

    assert_eq!(model.kind(), ModelKind::Simple);
    assert_eq!(model.required_score(), 3);
    assert!(model.check(&4));
    assert!(!model.check(&5));
}

// ============================================================================
// Absolute
// ============================================================================

#[test]
fn test_absolute_range() {
    let mut model: Model<i64> =
        Model::absolute(vec![boxed(|x: &i64| *x > 1), boxed(|x: &i64| *x < 3)]);

    assert!(!model.check(&1));
    assert!(model.check(&2));
    assert!(!model.check(&3));
    assert_eq!(model.required_score(), 2);
    assert_eq!(model.threshold_source(), ThresholdSource::ClauseCount);
}

#[test]
fn test_absolute_short_circuits() {
    let counter = CountingClause::always(true);
    let calls = counter.calls();
    let mut model: Model<i64> =
        Model::absolute(vec![boxed(|x: &i64| *x > 1), boxed(counter)]);

    assert!(!model.check(&0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(model.check(&5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_absolute_score_still_evaluates_everything() {
    let counter = CountingClause::always(true);
    let calls = counter.calls();
    let mut model: Model<i64> =
        Model::absolute(vec![boxed(|x: &i64| *x > 1), boxed(counter)]);

    assert_eq!(model.score(&0), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_absolute_stateful_fibonacci() {
    let mut model: Model<i64> = Model::absolute(vec![boxed(FibonacciClause::new())]);

    assert!(model.check(&1));
    assert!(model.check(&2));
    assert!(model.check(&3));
    assert!(model.check(&5));
    assert!(!model.check(&6));
    assert!(model.check(&13));
}

#[test]
fn test_absolute_push_tracks_clause_count() {
    let mut model: Model<i64> = Model::absolute(vec![boxed(|x: &i64| *x > 1)]);
    model.push_clause(|x: &i64| *x < 3, 9).unwrap();

    assert_eq!(model.len(), 2);
    assert_eq!(model.required_score(), 2);
    assert_eq!(model.max_score(), 2);
    assert!(!model.check(&3));
}

#[test]
fn test_empty_absolute_model_accepts_everything() {
    let mut model: Model<i64> = Model::absolute(Vec::new());
    assert_eq!(model.required_score(), 0);
    assert!(model.check(&1));
}

#[test]
fn test_tuple_input() {
    let doubled_sum = |&(a, b, c): &(i64, i64, i64)| a * 2 + b * 2 == c * 2;
    let mut model: Model<(i64, i64, i64)> = Model::absolute(vec![boxed(doubled_sum)]);

    assert!(model.check(&(2, 3, 5)));
    assert!(!model.check(&(2, 3, 6)));
}

// ============================================================================
// push_clause
// ============================================================================

#[test]
fn test_push_keeps_explicit_threshold() {
    let mut model = preference_model();
    model.push_clause(|x: &i64| *x > 100, 5).unwrap();

    assert_eq!(model.required_score(), 20);
    assert_eq!(model.len(), 4);
    assert_eq!(model.score(&102), 35);
}

#[test]
fn test_push_keeps_derived_threshold() {
    let mut model: Model<i64> = Model::weighted(vec![(boxed(|x: &i64| *x > 1), 10)], None).unwrap();
    model.push_clause(|x: &i64| *x > 5, 10).unwrap();

    assert_eq!(model.required_score(), 10);
    assert!(model.check(&3));
}

#[test]
fn test_push_passing_clause_never_lowers_score() {
    let mut model = preference_model();
    for input in [0, 5, 11, 12] {
        let before = model.score(&input);
        model.push_clause(|_: &i64| true, 1).unwrap();
        assert!(model.score(&input) > before);
    }
}

#[test]
fn test_push_negative_weight_rejected() {
    let mut model = preference_model();
    let result = model.push_named_clause("bad", |_: &i64| true, -1);

    assert!(matches!(result, Err(QuirkyError::InvalidWeight { .. })));
    assert_eq!(model.len(), 3);
}

#[test]
fn test_clause_names() {
    let mut model = preference_model();
    model.push_named_clause("huge", |x: &i64| *x > 1000, 1).unwrap();

    let names: Vec<_> = model.clause_names().collect();
    assert_eq!(names, vec!["clause-0", "clause-1", "clause-2", "huge"]);
    assert_eq!(model.clause_weight("clause-2"), Some(20));
    assert_eq!(model.clause_weight("missing"), None);
}

// ============================================================================
// Faults
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Fault(&'static str);

#[test]
fn test_fault_propagates_unmodified() {
    let after = CountingClause::always(true);
    let calls = after.calls();
    let mut model: Model<i64, i64, Fault> = Model::weighted(
        vec![
            (boxed(|_: &i64| true), 1),
            (boxed(FailingClause::new(Fault("broken"))), 1),
            (boxed(after), 1),
        ],
        None,
    )
    .unwrap();

    assert_eq!(model.try_score(&0), Err(Fault("broken")));
    assert_eq!(model.try_check(&0), Err(Fault("broken")));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_fallible_clause_success() {
    let mut model: Model<str, i64, std::num::ParseIntError> = Model::absolute(vec![
        boxed(FallibleFn::new(|s: &str| s.parse::<i64>().map(|n| n > 0))),
        boxed(|s: &str| s.len() < 4),
    ]);

    assert_eq!(model.try_check("12"), Ok(true));
    assert_eq!(model.try_check("1234"), Ok(false));
    assert!(model.try_check("x").is_err());
}

#[test]
#[should_panic(expected = "clause panicked")]
fn test_clause_panic_propagates() {
    let exploding = |_: &i64| -> bool { panic!("clause panicked") };
    let mut model: Model<i64> = Model::absolute(vec![boxed(exploding)]);
    model.check(&0);
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_model_as_sub_model_clause() {
    let inner: Model<i64> =
        Model::absolute(vec![boxed(|x: &i64| *x > 0), boxed(|x: &i64| *x < 10)]);
    let mut outer: Model<i64> = Model::weighted(
        vec![(boxed(inner), 5), (boxed(|x: &i64| x % 2 == 0), 1)],
        Some(5),
    )
    .unwrap();

    assert!(outer.check(&3));
    assert!(!outer.check(&12));
    assert_eq!(outer.score(&4), 6);
}

#[test]
fn test_mapped_sub_model() {
    let inner: Model<i64> = Model::absolute(vec![boxed(|sum: &i64| sum % 2 == 0)]);
    let mut outer: Model<(i64, i64)> = Model::absolute(vec![boxed(Mapped::new(
        |pair: &(i64, i64)| pair.0 + pair.1,
        inner,
    ))]);

    assert!(outer.check(&(1, 3)));
    assert!(!outer.check(&(1, 2)));
}

#[test]
fn test_not_clause() {
    let mut model: Model<i64> = Model::absolute(vec![boxed(Not::new(|x: &i64| *x == 0))]);
    assert!(model.check(&1));
    assert!(!model.check(&0));
}

#[test]
fn test_sequence_clause_advances_every_call() {
    let mut model: Model<i64> = Model::weighted(
        vec![(boxed(SequenceClause::new([1i64, 2, 3])), 1)],
        Some(1),
    )
    .unwrap();

    assert!(model.check(&1));
    assert!(!model.check(&5));
    assert!(model.check(&3));
    assert!(!model.check(&4));
}

// ============================================================================
// Explanation
// ============================================================================

#[test]
fn test_explain() {
    let mut model = preference_model();
    let explanation = model.explain(&11);

    assert_eq!(explanation.score, 10);
    assert_eq!(explanation.required_score, 20);
    assert!(!explanation.is_satisfied());
    assert_eq!(explanation.passed_count(), 1);
    assert_eq!(explanation.failed_clauses().len(), 2);
    assert_eq!(explanation.outcome("clause-0").map(|o| o.passed), Some(true));
}

#[test]
fn test_explain_absolute_evaluates_everything() {
    let counter = CountingClause::always(true);
    let calls = counter.calls();
    let mut model: Model<i64> = Model::absolute(vec![boxed(|_: &i64| false), boxed(counter)]);

    let explanation = model.explain(&0);
    assert!(!explanation.is_satisfied());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_debug_lists_clause_names() {
    let model = preference_model();
    let debug = format!("{:?}", model);
    assert!(debug.contains("clause-2"));
    assert!(debug.contains("Weighted"));
}
