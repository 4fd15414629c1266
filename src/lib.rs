//! Memo Select
//!
//! Memoized selectors for deriving values from application state. A selector
//! runs a list of input selectors against the state, then feeds their outputs
//! to a result function that only re-runs when those outputs change.
//!
//! ```
//! use memo_select::{create_selector, create_structured_selector, BoxedSelector};
//!
//! struct State {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let total = create_selector((|s: &State| s.x, |s: &State| s.y), |x: &i32, y: &i32| x + y)?;
//! let state = State { x: 10, y: 20 };
//! assert_eq!(total.select(&state, &()), 30);
//! assert_eq!(total.select(&state, &()), 30);
//! assert_eq!(total.recomputations(), 1);
//!
//! let fields = create_structured_selector(vec![
//!     ("first", BoxedSelector::new(|s: &State| s.x)),
//!     ("second", BoxedSelector::new(|s: &State| s.y)),
//! ])?;
//! let map = fields.select(&state, &());
//! assert_eq!(map["first"], 10);
//! assert_eq!(map["second"], 20);
//! # Ok::<(), memo_select::Error>(())
//! ```
//!
//! Shape mismatches are rejected at compile time. Input selectors over
//! different states cannot be combined:
//!
//! ```compile_fail
//! use memo_select::create_selector;
//!
//! struct First { x: i32 }
//! struct Second { d: i32 }
//!
//! let selector = create_selector(
//!     (|s: &First| s.x, |s: &Second| s.d),
//!     |x: &i32, d: &i32| x + d,
//! );
//! ```
//!
//! The result function must take exactly the input outputs:
//!
//! ```compile_fail
//! use memo_select::create_selector;
//!
//! let selector = create_selector((|s: &i32| *s,), |a: &String| a.len());
//! ```
//!
//! ```compile_fail
//! use memo_select::create_selector;
//!
//! let selector = create_selector((|s: &i32| *s, |s: &i32| *s + 1), |a: &i32| *a);
//! ```
//!
//! At least one input selector is required:
//!
//! ```compile_fail
//! use memo_select::create_selector;
//!
//! let selector = create_selector((), |a: &i32| *a);
//! ```
//!
//! An equality check must answer with a `bool`:
//!
//! ```compile_fail
//! use memo_select::memoize_with;
//!
//! let increment = memoize_with(|a: &i32| a + 1, |a: &i32, b: &i32| a + b);
//! increment.call((2,));
//! ```
//!
//! And a memoized function only accepts its own argument types:
//!
//! ```compile_fail
//! use memo_select::memoize;
//!
//! let increment = memoize(|a: &i32| a + 1);
//! increment.call(("",));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod memoize;
pub mod selector;

pub use config::MemoizeOptions;
pub use error::{ConfigError, Error, Result, SelectorError};
pub use memoize::{
    memoize, memoize_with, memoize_with_options, ArgList, DefaultEquality, DefaultMemoize,
    EqualityCheck, Memoize, MemoizeStrategy, Memoized, ReferenceEquality, ResultFn,
};
pub use selector::{
    create_selector, create_selector_creator, create_structured_selector,
    create_structured_selector_with, state_only, BoxedSelector, Counted, InputSelectors, Select,
    Selector, SelectorCreator, StateOnly, Structure,
};
