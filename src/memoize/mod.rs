//! Memoization of result functions.
//!
//! A [`Memoized`] function remembers its most recent calls and skips the
//! wrapped function when it is called again with arguments that compare equal,
//! position by position, to a cached call.

pub mod args;
pub mod cache;
pub mod equality;
pub mod func;

pub use args::ArgList;
pub use cache::MemoCache;
pub use equality::{DefaultEquality, EqualityCheck, ReferenceEquality};
pub use func::ResultFn;

use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::{debug, trace};

use crate::config::MemoizeOptions;

/// Common surface of memoized functions, whatever their caching policy.
pub trait Memoize<A> {
    type Func: ResultFn<A>;

    fn call(&self, args: A) -> <Self::Func as ResultFn<A>>::Output;

    /// The wrapped, unmemoized function.
    fn func(&self) -> &Self::Func;

    fn clear_cache(&self);

    fn last_result(&self) -> Option<<Self::Func as ResultFn<A>>::Output>;

    /// [`Memoize::call`] for fallible functions. Implementations that keep
    /// errors out of their cache override this; the default caches whatever
    /// `call` caches.
    fn try_call<T, Er>(&self, args: A) -> Result<T, Er>
    where
        Self::Func: ResultFn<A, Output = Result<T, Er>>,
        T: Clone,
        Er: Clone,
    {
        self.call(args)
    }
}

/// Builds memoized functions. This is the extension point of
/// [`crate::create_selector_creator`].
pub trait MemoizeStrategy<A, F: ResultFn<A>> {
    type Memoized: Memoize<A, Func = F>;

    fn memoize(&self, func: F) -> Self::Memoized;
}

pub struct Memoized<F, A, E = DefaultEquality>
where
    F: ResultFn<A>,
{
    func: F,
    equality: E,
    cache: RefCell<MemoCache<A, F::Output>>,
    recomputations: Cell<usize>,
}

/// Memoizes `func` with a single-slot cache and `PartialEq` comparison.
pub fn memoize<F, A>(func: F) -> Memoized<F, A>
where
    F: ResultFn<A>,
{
    Memoized::with_options(func, DefaultEquality, MemoizeOptions::default())
}

/// Memoizes `func` with a single-slot cache and a custom equality check.
pub fn memoize_with<F, A, E>(func: F, equality: E) -> Memoized<F, A, E>
where
    F: ResultFn<A>,
{
    Memoized::with_options(func, equality, MemoizeOptions::default())
}

pub fn memoize_with_options<F, A, E>(
    func: F,
    equality: E,
    options: MemoizeOptions,
) -> Memoized<F, A, E>
where
    F: ResultFn<A>,
{
    Memoized::with_options(func, equality, options)
}

impl<F, A, E> Memoized<F, A, E>
where
    F: ResultFn<A>,
{
    pub fn with_options(func: F, equality: E, options: MemoizeOptions) -> Self {
        debug!(max_size = options.max_size, "created memoized function");
        Self {
            func,
            equality,
            cache: RefCell::new(MemoCache::new(options.max_size)),
            recomputations: Cell::new(0),
        }
    }

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations.get()
    }

    /// Resets the counter. Cached results stay.
    pub fn reset_recomputations(&self) {
        self.recomputations.set(0);
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    fn record_recomputation(&self) {
        self.recomputations.set(self.recomputations.get() + 1);
    }
}

impl<F, A, E> Memoized<F, A, E>
where
    F: ResultFn<A>,
    F::Output: Clone,
    A: ArgList<E>,
{
    pub fn call(&self, args: A) -> F::Output {
        let cached = self
            .cache
            .borrow_mut()
            .lookup(&args, &self.equality)
            .cloned();
        if let Some(result) = cached {
            return result;
        }

        trace!(arity = args.arity(), "memo cache miss");
        // no borrow is held while the function runs; a panic leaves the cache as it was
        let result = self.func.apply(&args);
        self.record_recomputation();
        self.cache.borrow_mut().insert(args, result.clone());
        result
    }

    pub fn last_result(&self) -> Option<F::Output> {
        self.cache.borrow().most_recent().cloned()
    }
}

impl<F, A, E, T, Er> Memoized<F, A, E>
where
    F: ResultFn<A, Output = Result<T, Er>>,
    A: ArgList<E>,
    T: Clone,
{
    /// Like [`Memoized::call`] for fallible functions: an `Err` is returned
    /// to the caller and never cached.
    pub fn try_call(&self, args: A) -> Result<T, Er> {
        let cached = self
            .cache
            .borrow_mut()
            .lookup(&args, &self.equality)
            .and_then(|result| result.as_ref().ok().cloned());
        if let Some(value) = cached {
            return Ok(value);
        }

        trace!(arity = args.arity(), "memo cache miss");
        let computed = self.func.apply(&args);
        self.record_recomputation();
        let value = computed?;
        self.cache.borrow_mut().insert(args, Ok(value.clone()));
        Ok(value)
    }
}

impl<F, A, E> Memoize<A> for Memoized<F, A, E>
where
    F: ResultFn<A>,
    F::Output: Clone,
    A: ArgList<E>,
{
    type Func = F;

    fn call(&self, args: A) -> F::Output {
        Memoized::call(self, args)
    }

    fn func(&self) -> &F {
        &self.func
    }

    fn clear_cache(&self) {
        Memoized::clear_cache(self)
    }

    fn last_result(&self) -> Option<F::Output> {
        Memoized::last_result(self)
    }

    fn try_call<T, Er>(&self, args: A) -> Result<T, Er>
    where
        F: ResultFn<A, Output = Result<T, Er>>,
        T: Clone,
        Er: Clone,
    {
        Memoized::try_call(self, args)
    }
}

impl<F, A, E> fmt::Debug for Memoized<F, A, E>
where
    F: ResultFn<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.cache.borrow();
        f.debug_struct("Memoized")
            .field("recomputations", &self.recomputations.get())
            .field("cached", &cache.len())
            .field("max_size", &cache.capacity())
            .finish()
    }
}

/// The default strategy: [`Memoized`] with the configured equality check and
/// cache size.
#[derive(Debug, Clone)]
pub struct DefaultMemoize<E = DefaultEquality> {
    equality: E,
    options: MemoizeOptions,
}

impl DefaultMemoize {
    pub fn new() -> Self {
        Self::with_equality(DefaultEquality)
    }

    pub fn with_options(options: MemoizeOptions) -> Self {
        Self::with_equality(DefaultEquality).options(options)
    }
}

impl<E> DefaultMemoize<E> {
    pub fn with_equality(equality: E) -> Self {
        Self {
            equality,
            options: MemoizeOptions::default(),
        }
    }

    pub fn options(mut self, options: MemoizeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_size(&self) -> usize {
        self.options.max_size
    }
}

impl Default for DefaultMemoize {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, F, E> MemoizeStrategy<A, F> for DefaultMemoize<E>
where
    F: ResultFn<A>,
    F::Output: Clone,
    A: ArgList<E>,
    E: Clone,
{
    type Memoized = Memoized<F, A, E>;

    fn memoize(&self, func: F) -> Self::Memoized {
        Memoized::with_options(func, self.equality.clone(), self.options)
    }
}
