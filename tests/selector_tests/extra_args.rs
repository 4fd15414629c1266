//! Extra argument tests
//!
//! Input selectors that read props and further arguments next to the state.

use super::test_utils::{state, Props, State};
use memo_select::{create_selector, state_only, Select};

#[test]
fn test_selectors_with_props() {
    let selector = create_selector(
        (
            |s: &State, p: &Props| s.x + p.x,
            |s: &State, p: &Props| s.y + p.x,
        ),
        |x: &i32, y: &i32| x + y,
    )
    .unwrap();

    assert_eq!(selector.select(&state(100, 200), &(Props { x: 10 },)), 320);
}

#[test]
fn test_selectors_with_additional_arguments() {
    let selector = create_selector(
        (
            |s: &State, p: &Props, test: &i32| s.x + p.x + test,
            |s: &State, p: &Props, test: &i32| s.y + p.x + test,
        ),
        |x: &i32, y: &i32| x + y,
    )
    .unwrap();

    assert_eq!(
        selector.select(&state(100, 200), &(Props { x: 10 }, 10)),
        340
    );
}

#[test]
fn test_changed_props_recompute() {
    let selector = create_selector(
        (|s: &State, p: &Props| s.x * p.x,),
        |scaled: &i32| scaled + 1,
    )
    .unwrap();
    let s = state(3, 0);

    assert_eq!(selector.select(&s, &(Props { x: 2 },)), 7);
    assert_eq!(selector.select(&s, &(Props { x: 2 },)), 7);
    assert_eq!(selector.recomputations(), 1);

    assert_eq!(selector.select(&s, &(Props { x: 5 },)), 16);
    assert_eq!(selector.recomputations(), 2);
}

#[test]
fn test_composed_selector_sees_same_extra_arguments() {
    let inner = create_selector(
        (|s: &State, p: &Props| s.x + p.x,),
        |v: &i32| v * 2,
    )
    .unwrap();
    let outer = create_selector(
        (inner, |_: &State, p: &Props| p.x),
        |doubled: &i32, px: &i32| doubled - px,
    )
    .unwrap();

    // (1 + 4) * 2 - 4
    assert_eq!(outer.select(&state(1, 0), &(Props { x: 4 },)), 6);
}

#[test]
fn test_selector_through_trait() {
    fn run<T: Select<State, (Props,), Output = i32>>(selector: &T) -> i32 {
        selector.select(&state(1, 2), &(Props { x: 3 },))
    }

    let selector = create_selector(
        (|s: &State, p: &Props| s.x * p.x,),
        |v: &i32| v + 100,
    )
    .unwrap();

    assert_eq!(run(&selector), 103);
    assert_eq!(run(&|s: &State, p: &Props| s.y + p.x), 5);
}

#[test]
fn test_state_only_inputs_mix_with_props() {
    let scaled_y = create_selector((|s: &State| s.y,), |y: &i32| y * 10).unwrap();
    let selector = create_selector(
        (
            |s: &State, p: &Props| s.x + p.x,
            state_only(|s: &State| s.y),
            state_only(scaled_y.clone()),
        ),
        |a: &i32, b: &i32, c: &i32| a + b + c,
    )
    .unwrap();

    let s = state(1, 2);
    // (1 + 3) + 2 + 20
    assert_eq!(selector.select(&s, &(Props { x: 3 },)), 26);
    assert_eq!(selector.select(&s, &(Props { x: 3 },)), 26);
    assert_eq!(selector.recomputations(), 1);

    assert_eq!(selector.select(&s, &(Props { x: 4 },)), 27);
    assert_eq!(selector.recomputations(), 2);
    assert_eq!(scaled_y.recomputations(), 1);
}
