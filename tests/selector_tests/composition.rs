//! Composition tests
//!
//! Covers both construction forms, input ordering and selectors used as
//! inputs of other selectors.

use super::test_utils::{state, CallLog, State};
use memo_select::{create_selector, BoxedSelector, Error, SelectorError};

#[test]
fn test_two_selectors_as_sequence() {
    let sum = create_selector(
        (|s: &State| s.x, |s: &State| s.y),
        |x: &i32, y: &i32| x + y,
    )
    .unwrap();

    assert_eq!(sum.select(&state(100, 200), &()), 300);
}

#[test]
fn test_two_selectors_as_arguments() {
    let sum = memo_select::create_selector!(
        |s: &State| s.x,
        |s: &State| s.y,
        |x: &i32, y: &i32| x + y,
    )
    .unwrap();

    assert_eq!(sum.select(&state(100, 200), &()), 300);
}

#[test]
fn test_both_forms_behave_identically() {
    let sequence = create_selector(
        (|s: &State| s.x, |s: &State| s.y),
        |x: &i32, y: &i32| x * 10 + y,
    )
    .unwrap();
    let variadic = memo_select::create_selector!(
        |s: &State| s.x,
        |s: &State| s.y,
        |x: &i32, y: &i32| x * 10 + y
    )
    .unwrap();

    for s in [state(1, 2), state(1, 2), state(3, 2), state(3, 4)] {
        assert_eq!(sequence.select(&s, &()), variadic.select(&s, &()));
    }
    assert_eq!(sequence.recomputations(), variadic.recomputations());
    assert_eq!(sequence.recomputations(), 3);
}

#[test]
fn test_input_order_decides_argument_position() {
    let x_minus_y = create_selector(
        (|s: &State| s.x, |s: &State| s.y),
        |a: &i32, b: &i32| a - b,
    )
    .unwrap();
    let y_minus_x = create_selector(
        (|s: &State| s.y, |s: &State| s.x),
        |a: &i32, b: &i32| a - b,
    )
    .unwrap();

    assert_eq!(x_minus_y.select(&state(10, 3), &()), 7);
    assert_eq!(y_minus_x.select(&state(10, 3), &()), -7);
}

#[test]
fn test_inputs_run_in_declaration_order() {
    let log = CallLog::new();
    let (first_log, second_log, third_log) = (log.clone(), log.clone(), log.clone());

    let selector = create_selector(
        (
            move |s: &State| {
                first_log.record("first");
                s.x
            },
            move |s: &State| {
                second_log.record("second");
                s.y
            },
            move |s: &State| {
                third_log.record("third");
                s.x * s.y
            },
        ),
        |a: &i32, b: &i32, c: &i32| a + b + c,
    )
    .unwrap();

    assert_eq!(selector.select(&state(2, 3), &()), 11);
    assert_eq!(log.calls(), vec!["first", "second", "third"]);

    // inputs run on every call, even when the result comes from the cache
    log.clear();
    selector.select(&state(2, 3), &());
    assert_eq!(log.calls(), vec!["first", "second", "third"]);
    assert_eq!(selector.recomputations(), 1);
}

#[test]
fn test_selector_of_selector_is_transparent() {
    let f = |s: &State| s.x;
    let g = |s: &State| s.y;
    let h = |s: &State| s.x - s.y;
    let inner_fn = |a: &i32, b: &i32| a * b;
    let outer_fn = |inner: &i32, c: &i32| inner + c;

    let inner = create_selector((f, g), inner_fn).unwrap();
    let outer = create_selector((inner.clone(), h), outer_fn).unwrap();

    for s in [state(2, 5), state(7, 1), state(-3, 4)] {
        let manual = outer_fn(&inner_fn(&f(&s), &g(&s)), &h(&s));
        assert_eq!(outer.select(&s, &()), manual);
    }
}

#[test]
fn test_selector_result_used_by_other_selector() {
    let simple = |_: &State| "foo".to_string();
    let describe = |arg: &String| format!("{arg}!");

    let combined = create_selector((simple,), describe).unwrap();
    let combined_twice = create_selector((combined.clone(),), describe).unwrap();

    assert_eq!(combined_twice.select(&state(0, 0), &()), "foo!!");
}

#[test]
fn test_compound_selector_mixed_with_plain_inputs() {
    let simple = |_: &State| "foo".to_string();
    let compound = create_selector((simple,), |_: &String| 42).unwrap();
    let func = create_selector((simple, compound), |p1: &String, p2: &i32| {
        p1.len() as i32 + p2
    })
    .unwrap();

    assert_eq!(func.select(&state(42, 42), &()), 45);
}

#[test]
fn test_unchanged_inner_result_skips_outer_recompute() {
    let inner = create_selector((|s: &State| s.x,), |x: &i32| x.signum()).unwrap();
    let outer = create_selector((inner.clone(),), |sign: &i32| match sign {
        1 => "positive",
        -1 => "negative",
        _ => "zero",
    })
    .unwrap();

    assert_eq!(outer.select(&state(5, 0), &()), "positive");
    assert_eq!(outer.select(&state(9, 0), &()), "positive");
    assert_eq!(inner.recomputations(), 2);
    assert_eq!(outer.recomputations(), 1);
}

#[test]
fn test_equal_inputs_from_new_state_hit_cache() {
    let x_only = create_selector((|s: &State| s.x,), |x: &i32| x * 2).unwrap();

    assert_eq!(x_only.select(&state(1, 1), &()), 2);
    assert_eq!(x_only.select(&state(1, 99), &()), 2);
    assert_eq!(x_only.recomputations(), 1);
}

#[test]
fn test_vec_inputs_feed_a_slice() {
    let inputs = vec![
        BoxedSelector::new(|s: &State| s.x),
        BoxedSelector::new(|s: &State| s.y),
        BoxedSelector::new(|s: &State| s.x + s.y),
    ];
    let total = create_selector(inputs, |values: &[i32]| values.iter().sum::<i32>()).unwrap();

    assert_eq!(total.select(&state(1, 2), &()), 6);
    assert_eq!(total.dependencies().len(), 3);
}

#[test]
fn test_array_inputs() {
    fn x_of(s: &State) -> i32 {
        s.x
    }
    fn y_of(s: &State) -> i32 {
        s.y
    }

    let inputs: [fn(&State) -> i32; 2] = [x_of, y_of];
    let max = create_selector(inputs, |values: &[i32]| {
        values.iter().copied().max().unwrap_or_default()
    })
    .unwrap();

    assert_eq!(max.select(&state(4, 9), &()), 9);
}

#[test]
fn test_empty_sequence_is_a_construction_error() {
    let inputs: Vec<BoxedSelector<State, (), i32>> = Vec::new();
    let err = create_selector(inputs, |values: &[i32]| values.len()).unwrap_err();

    assert!(matches!(err, Error::Selector(SelectorError::NoInputSelectors)));
}
