use std::fmt;

/// Derives one value from a state `S` and the extra call arguments `X`.
///
/// `X` is a tuple: `()` for selectors over the state alone, `(P,)` for one
/// extra argument such as component props, `(P, Q)` for two, and so on.
/// Closures implement this for the matching shape, so `|s: &State| s.x` is a
/// `Select<State, ()>` and `|s: &State, p: &Props| s.x + p.x` is a
/// `Select<State, (Props,)>`. Composed [`super::Selector`]s implement it too.
///
/// Wrap a state-only selector in [`state_only`] to use it next to selectors
/// that take extra arguments.
pub trait Select<S: ?Sized, X = ()> {
    type Output;

    fn select(&self, state: &S, extra: &X) -> Self::Output;
}

impl<S: ?Sized, O, F> Select<S, ()> for F
where
    F: Fn(&S) -> O,
{
    type Output = O;

    fn select(&self, state: &S, _extra: &()) -> O {
        self(state)
    }
}

macro_rules! impl_select_with_extra {
    ($($ty:ident $arg:ident),+) => {
        impl<S: ?Sized, O, F, $($ty),+> Select<S, ($($ty,)+)> for F
        where
            F: Fn(&S, $(&$ty),+) -> O,
        {
            type Output = O;

            fn select(&self, state: &S, extra: &($($ty,)+)) -> O {
                let ($($arg,)+) = extra;
                self(state, $($arg),+)
            }
        }
    };
}

impl_select_with_extra!(P p);
impl_select_with_extra!(P p, Q q);
impl_select_with_extra!(P p, Q q, T t);
impl_select_with_extra!(P p, Q q, T t, U u);

/// Adapts a selector over the state alone to any extra-argument shape `X`.
/// The extra arguments are ignored.
#[derive(Debug, Clone, Copy)]
pub struct StateOnly<T> {
    selector: T,
}

impl<T> StateOnly<T> {
    pub fn inner(&self) -> &T {
        &self.selector
    }
}

impl<S: ?Sized, X, T> Select<S, X> for StateOnly<T>
where
    T: Select<S, ()>,
{
    type Output = T::Output;

    fn select(&self, state: &S, _extra: &X) -> T::Output {
        self.selector.select(state, &())
    }
}

/// Lets `selector`, which reads only the state, run with any extra
/// arguments.
pub fn state_only<T>(selector: T) -> StateOnly<T> {
    StateOnly { selector }
}

/// A type-erased input selector, so selectors built from different closures
/// can share one `Vec`.
pub struct BoxedSelector<S: ?Sized, X, O> {
    inner: Box<dyn Select<S, X, Output = O>>,
}

impl<S: ?Sized, X, O> BoxedSelector<S, X, O> {
    pub fn new<T>(selector: T) -> Self
    where
        T: Select<S, X, Output = O> + 'static,
    {
        Self {
            inner: Box::new(selector),
        }
    }
}

impl<S: ?Sized, X, O> Select<S, X> for BoxedSelector<S, X, O> {
    type Output = O;

    fn select(&self, state: &S, extra: &X) -> O {
        self.inner.select(state, extra)
    }
}

impl<S: ?Sized, X, O> fmt::Debug for BoxedSelector<S, X, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedSelector")
    }
}

/// The ordered input selectors of a composed selector.
///
/// Tuples evaluate their members left to right and produce a tuple of
/// outputs. `Vec` and arrays hold selectors of one type and produce a `Vec`.
pub trait InputSelectors<S: ?Sized, X> {
    type Outputs;

    fn select_all(&self, state: &S, extra: &X) -> Self::Outputs;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ?Sized, X, T> InputSelectors<S, X> for Vec<T>
where
    T: Select<S, X>,
{
    type Outputs = Vec<T::Output>;

    fn select_all(&self, state: &S, extra: &X) -> Self::Outputs {
        self.iter().map(|input| input.select(state, extra)).collect()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<S: ?Sized, X, T, const N: usize> InputSelectors<S, X> for [T; N]
where
    T: Select<S, X>,
{
    type Outputs = Vec<T::Output>;

    fn select_all(&self, state: &S, extra: &X) -> Self::Outputs {
        self.iter().map(|input| input.select(state, extra)).collect()
    }

    fn len(&self) -> usize {
        N
    }
}

macro_rules! impl_input_selectors {
    ($arity:literal => $($ty:ident . $idx:tt),+) => {
        impl<S: ?Sized, X, $($ty),+> InputSelectors<S, X> for ($($ty,)+)
        where
            $($ty: Select<S, X>,)+
        {
            type Outputs = ($($ty::Output,)+);

            fn select_all(&self, state: &S, extra: &X) -> Self::Outputs {
                ($(self.$idx.select(state, extra),)+)
            }

            fn len(&self) -> usize {
                $arity
            }
        }
    };
}

impl_input_selectors!(1 => A.0);
impl_input_selectors!(2 => A.0, B.1);
impl_input_selectors!(3 => A.0, B.1, C.2);
impl_input_selectors!(4 => A.0, B.1, C.2, D.3);
impl_input_selectors!(5 => A.0, B.1, C.2, D.3, G.4);
impl_input_selectors!(6 => A.0, B.1, C.2, D.3, G.4, H.5);
impl_input_selectors!(7 => A.0, B.1, C.2, D.3, G.4, H.5, I.6);
impl_input_selectors!(8 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7);
impl_input_selectors!(9 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8);
impl_input_selectors!(10 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9);
impl_input_selectors!(11 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9, M.10);
impl_input_selectors!(12 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9, M.10, N.11);
