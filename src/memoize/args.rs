use super::equality::EqualityCheck;

/// An ordered list of arguments that a memoizer can compare against the
/// arguments of a cached call.
///
/// Tuples have a fixed arity. `Vec<T>` carries its arity at run time, so two
/// calls with different lengths never match.
pub trait ArgList<E> {
    fn arity(&self) -> usize;

    /// Same arity and every positional pair equal under `equality`.
    fn matches(&self, other: &Self, equality: &E) -> bool;
}

impl<E, T> ArgList<E> for Vec<T>
where
    E: EqualityCheck<T>,
{
    fn arity(&self) -> usize {
        self.len()
    }

    fn matches(&self, other: &Self, equality: &E) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| equality.equals(a, b))
    }
}

macro_rules! impl_arg_list {
    ($arity:literal => $($ty:ident . $idx:tt),+) => {
        impl<E, $($ty),+> ArgList<E> for ($($ty,)+)
        where
            E: $(EqualityCheck<$ty> +)+,
        {
            fn arity(&self) -> usize {
                $arity
            }

            fn matches(&self, other: &Self, equality: &E) -> bool {
                $(EqualityCheck::<$ty>::equals(equality, &self.$idx, &other.$idx))&&+
            }
        }
    };
}

impl_arg_list!(1 => A.0);
impl_arg_list!(2 => A.0, B.1);
impl_arg_list!(3 => A.0, B.1, C.2);
impl_arg_list!(4 => A.0, B.1, C.2, D.3);
impl_arg_list!(5 => A.0, B.1, C.2, D.3, G.4);
impl_arg_list!(6 => A.0, B.1, C.2, D.3, G.4, H.5);
impl_arg_list!(7 => A.0, B.1, C.2, D.3, G.4, H.5, I.6);
impl_arg_list!(8 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7);
impl_arg_list!(9 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8);
impl_arg_list!(10 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9);
impl_arg_list!(11 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9, M.10);
impl_arg_list!(12 => A.0, B.1, C.2, D.3, G.4, H.5, I.6, J.7, K.8, L.9, M.10, N.11);
