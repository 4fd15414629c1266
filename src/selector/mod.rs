//! Memoized selectors composed from input selectors and a result function.

pub mod creator;
pub mod input;
pub mod structured;

mod macros;

pub use creator::{create_selector, create_selector_creator, SelectorCreator};
pub use input::{state_only, BoxedSelector, InputSelectors, Select, StateOnly};
pub use structured::{create_structured_selector, create_structured_selector_with, Structure};

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::memoize::{Memoize, ResultFn};

/// A result function that counts its completed invocations.
///
/// Selectors wrap their result function in `Counted` before handing it to the
/// memoize strategy, so recomputations are counted the same way whatever
/// strategy is plugged in.
pub struct Counted<F> {
    func: F,
    count: Cell<usize>,
}

impl<F> Counted<F> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            count: Cell::new(0),
        }
    }

    pub fn inner(&self) -> &F {
        &self.func
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}

impl<A, F> ResultFn<A> for Counted<F>
where
    F: ResultFn<A>,
{
    type Output = F::Output;

    fn apply(&self, args: &A) -> F::Output {
        let output = self.func.apply(args);
        self.count.set(self.count.get() + 1);
        output
    }
}

struct SelectorInner<I, M> {
    inputs: I,
    memoized: M,
}

/// A memoized selector over state `S` with extra arguments `X`.
///
/// Cloning is cheap and yields a handle to the same selector: the clones share
/// one cache and one recomputation counter.
pub struct Selector<S: ?Sized, X, I, M> {
    inner: Rc<SelectorInner<I, M>>,
    _signature: PhantomData<fn(&S, &X)>,
}

impl<S: ?Sized, X, I, M, F> Selector<S, X, I, M>
where
    I: InputSelectors<S, X>,
    M: Memoize<I::Outputs, Func = Counted<F>>,
    F: ResultFn<I::Outputs>,
{
    pub(crate) fn new(inputs: I, memoized: M) -> Self {
        Self {
            inner: Rc::new(SelectorInner { inputs, memoized }),
            _signature: PhantomData,
        }
    }

    /// Runs every input selector against `state` and `extra`, in order, and
    /// returns the memoized result for their outputs.
    pub fn select(&self, state: &S, extra: &X) -> F::Output {
        let outputs = self.inner.inputs.select_all(state, extra);
        self.inner.memoized.call(outputs)
    }

    /// [`Selector::select`] for result functions returning `Result`. An `Err`
    /// reaches the caller but is not cached, so the last good result stays
    /// addressable.
    pub fn try_select<T, Er>(&self, state: &S, extra: &X) -> Result<T, Er>
    where
        F: ResultFn<I::Outputs, Output = Result<T, Er>>,
        T: Clone,
        Er: Clone,
    {
        let outputs = self.inner.inputs.select_all(state, extra);
        self.inner.memoized.try_call(outputs)
    }

    /// Number of times the result function has run.
    pub fn recomputations(&self) -> usize {
        self.inner.memoized.func().count()
    }

    /// Sets the counter back to zero. Cached results stay.
    pub fn reset_recomputations(&self) {
        self.inner.memoized.func().reset();
    }

    /// The result function as given at construction, unmemoized.
    pub fn result_func(&self) -> &F {
        self.inner.memoized.func().inner()
    }

    pub fn dependencies(&self) -> &I {
        &self.inner.inputs
    }

    pub fn clear_cache(&self) {
        self.inner.memoized.clear_cache();
    }

    pub fn last_result(&self) -> Option<F::Output> {
        self.inner.memoized.last_result()
    }
}

impl<S: ?Sized, X, I, M, F> Select<S, X> for Selector<S, X, I, M>
where
    I: InputSelectors<S, X>,
    M: Memoize<I::Outputs, Func = Counted<F>>,
    F: ResultFn<I::Outputs>,
{
    type Output = F::Output;

    fn select(&self, state: &S, extra: &X) -> F::Output {
        Selector::select(self, state, extra)
    }
}

impl<S: ?Sized, X, I, M> Clone for Selector<S, X, I, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            _signature: PhantomData,
        }
    }
}

impl<S: ?Sized, X, I, M, F> fmt::Debug for Selector<S, X, I, M>
where
    I: InputSelectors<S, X>,
    M: Memoize<I::Outputs, Func = Counted<F>>,
    F: ResultFn<I::Outputs>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("inputs", &self.inner.inputs.len())
            .field("recomputations", &self.recomputations())
            .finish()
    }
}
