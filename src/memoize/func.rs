/// A function that can be applied to an argument list `A`.
///
/// Closures taking every argument by reference implement this for the
/// matching tuple, so `|x: &i32, y: &i32| x + y` is a `ResultFn<(i32, i32)>`.
/// A closure over a slice, `|xs: &[i32]| ...`, is a `ResultFn<Vec<i32>>`.
pub trait ResultFn<A> {
    type Output;

    fn apply(&self, args: &A) -> Self::Output;
}

impl<Func, R, T> ResultFn<Vec<T>> for Func
where
    Func: Fn(&[T]) -> R,
{
    type Output = R;

    fn apply(&self, args: &Vec<T>) -> R {
        self(args.as_slice())
    }
}

macro_rules! impl_result_fn {
    ($($ty:ident $arg:ident),+) => {
        impl<Func, R, $($ty),+> ResultFn<($($ty,)+)> for Func
        where
            Func: Fn($(&$ty),+) -> R,
        {
            type Output = R;

            fn apply(&self, args: &($($ty,)+)) -> R {
                let ($($arg,)+) = args;
                self($($arg),+)
            }
        }
    };
}

impl_result_fn!(A a);
impl_result_fn!(A a, B b);
impl_result_fn!(A a, B b, C c);
impl_result_fn!(A a, B b, C c, D d);
impl_result_fn!(A a, B b, C c, D d, G g);
impl_result_fn!(A a, B b, C c, D d, G g, H h);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i, J j);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i, J j, K k);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i, J j, K k, L l);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i, J j, K k, L l, M m);
impl_result_fn!(A a, B b, C c, D d, G g, H h, I i, J j, K k, L l, M m, N n);
