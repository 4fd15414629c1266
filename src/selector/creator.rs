use tracing::debug;

use super::input::InputSelectors;
use super::{Counted, Selector};
use crate::error::{Result, SelectorError};
use crate::memoize::{ArgList, DefaultEquality, DefaultMemoize, MemoizeStrategy, Memoized, ResultFn};

/// Builds selectors whose result functions are memoized by strategy `M`.
#[derive(Debug, Clone, Default)]
pub struct SelectorCreator<M = DefaultMemoize> {
    strategy: M,
}

impl SelectorCreator {
    pub fn new() -> Self {
        Self {
            strategy: DefaultMemoize::new(),
        }
    }
}

impl<M> SelectorCreator<M> {
    pub fn with_strategy(strategy: M) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &M {
        &self.strategy
    }

    /// Composes `inputs` with `result_fn`.
    ///
    /// `inputs` is a tuple of input selectors, or a `Vec`/array of selectors
    /// of one type whose outputs reach `result_fn` as a slice. An empty
    /// `Vec` or array is rejected here rather than at the first call.
    pub fn create<S, X, I, F>(
        &self,
        inputs: I,
        result_fn: F,
    ) -> Result<Selector<S, X, I, M::Memoized>>
    where
        S: ?Sized,
        I: InputSelectors<S, X>,
        F: ResultFn<I::Outputs>,
        M: MemoizeStrategy<I::Outputs, Counted<F>>,
    {
        if inputs.is_empty() {
            return Err(SelectorError::NoInputSelectors.into());
        }

        debug!(inputs = inputs.len(), "created selector");
        let memoized = self.strategy.memoize(Counted::new(result_fn));
        Ok(Selector::new(inputs, memoized))
    }
}

/// Composes input selectors with a result function memoized by the default
/// single-slot strategy.
///
/// See the [`create_selector!`](crate::create_selector!) macro for the
/// variadic form.
#[allow(clippy::type_complexity)]
pub fn create_selector<S, X, I, F>(
    inputs: I,
    result_fn: F,
) -> Result<Selector<S, X, I, Memoized<Counted<F>, I::Outputs, DefaultEquality>>>
where
    S: ?Sized,
    I: InputSelectors<S, X>,
    I::Outputs: ArgList<DefaultEquality>,
    F: ResultFn<I::Outputs>,
    F::Output: Clone,
{
    SelectorCreator::new().create(inputs, result_fn)
}

/// A selector creator that memoizes result functions with `strategy`.
///
/// The strategy carries its own options, e.g.
/// `DefaultMemoize::with_equality(eq).options(MemoizeOptions::new(8)?)`.
pub fn create_selector_creator<M>(strategy: M) -> SelectorCreator<M> {
    SelectorCreator::with_strategy(strategy)
}
