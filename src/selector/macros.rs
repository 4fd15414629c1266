/// Variadic form of [`create_selector`](crate::create_selector): every
/// argument but the last is an input selector, the last is the result
/// function.
///
/// ```
/// use memo_select::create_selector;
///
/// struct State {
///     x: i32,
///     y: i32,
/// }
///
/// let sum = create_selector!(|s: &State| s.x, |s: &State| s.y, |x: &i32, y: &i32| x + y)?;
/// assert_eq!(sum.select(&State { x: 100, y: 200 }, &()), 300);
/// # Ok::<(), memo_select::Error>(())
/// ```
///
/// `using creator;` builds the selector with a custom
/// [`SelectorCreator`](crate::SelectorCreator):
///
/// ```
/// use memo_select::{create_selector, create_selector_creator, DefaultMemoize, MemoizeOptions};
///
/// let creator = create_selector_creator(DefaultMemoize::with_options(MemoizeOptions::new(4)?));
/// let double = create_selector!(using creator; |s: &i32| *s, |x: &i32| x * 2)?;
/// assert_eq!(double.select(&21, &()), 42);
/// # Ok::<(), memo_select::Error>(())
/// ```
#[macro_export]
macro_rules! create_selector {
    (@collect [] [$($input:expr,)*] $result:expr $(,)?) => {
        $crate::create_selector(($($input,)*), $result)
    };
    (@collect [$creator:expr] [$($input:expr,)*] $result:expr $(,)?) => {
        $creator.create(($($input,)*), $result)
    };
    (@collect [$($creator:expr)?] [$($input:expr,)*] $head:expr, $($rest:tt)+) => {
        $crate::create_selector!(@collect [$($creator)?] [$($input,)* $head,] $($rest)+)
    };
    (using $creator:expr; $($args:tt)+) => {
        $crate::create_selector!(@collect [$creator] [] $($args)+)
    };
    ($($args:tt)+) => {
        $crate::create_selector!(@collect [] [] $($args)+)
    };
}
