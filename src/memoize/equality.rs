use std::rc::Rc;
use std::sync::Arc;

/// Decides whether two cached arguments are the same input.
///
/// Any `Fn(&T, &T) -> bool` is an equality check, so callers can pass
/// closures directly.
pub trait EqualityCheck<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Value equality through `PartialEq`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityCheck<T> for DefaultEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Identity of the pointee: two handles are equal only when they point at
/// the same allocation, whatever the contents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEquality;

impl<T: ?Sized> EqualityCheck<Rc<T>> for ReferenceEquality {
    fn equals(&self, a: &Rc<T>, b: &Rc<T>) -> bool {
        Rc::ptr_eq(a, b)
    }
}

impl<T: ?Sized> EqualityCheck<Arc<T>> for ReferenceEquality {
    fn equals(&self, a: &Arc<T>, b: &Arc<T>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl<'r, T: ?Sized> EqualityCheck<&'r T> for ReferenceEquality {
    fn equals(&self, a: &&'r T, b: &&'r T) -> bool {
        std::ptr::eq(*a, *b)
    }
}

impl<T: ?Sized, F> EqualityCheck<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
