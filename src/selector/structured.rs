use std::fmt::Display;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::creator::SelectorCreator;
use super::input::Select;
use super::{Counted, Selector};
use crate::error::{Result, SelectorError};
use crate::memoize::{DefaultEquality, MemoizeStrategy, Memoized, ResultFn};

/// Result function of a structured selector: puts the keys back onto the
/// input outputs, in key order.
#[derive(Debug, Clone)]
pub struct Structure<K> {
    keys: Vec<K>,
}

impl<K> Structure<K> {
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<K, O> ResultFn<Vec<O>> for Structure<K>
where
    K: Clone + Hash + Eq,
    O: Clone,
{
    type Output = IndexMap<K, O>;

    fn apply(&self, values: &Vec<O>) -> IndexMap<K, O> {
        self.keys.iter().cloned().zip(values.iter().cloned()).collect()
    }
}

/// Builds a selector returning a map from each key to the output of its
/// input selector, keys in the order given.
///
/// Selectors of different closure types can be mixed through
/// [`super::BoxedSelector`]. All values share one output type; keys holding
/// different types go through an enum or a `Box<dyn Any>`.
#[allow(clippy::type_complexity)]
pub fn create_structured_selector<S, X, K, T, P>(
    pairs: P,
) -> Result<Selector<S, X, Vec<T>, Memoized<Counted<Structure<K>>, Vec<T::Output>, DefaultEquality>>>
where
    S: ?Sized,
    P: IntoIterator<Item = (K, T)>,
    K: Clone + Hash + Eq + Display,
    T: Select<S, X>,
    T::Output: Clone + PartialEq,
{
    create_structured_selector_with(pairs, &SelectorCreator::new())
}

/// [`create_structured_selector`] with a custom selector creator.
pub fn create_structured_selector_with<S, X, K, T, P, M>(
    pairs: P,
    creator: &SelectorCreator<M>,
) -> Result<Selector<S, X, Vec<T>, M::Memoized>>
where
    S: ?Sized,
    P: IntoIterator<Item = (K, T)>,
    K: Clone + Hash + Eq + Display,
    T: Select<S, X>,
    T::Output: Clone,
    M: MemoizeStrategy<Vec<T::Output>, Counted<Structure<K>>>,
{
    let mut keys: IndexSet<K> = IndexSet::new();
    let mut inputs = Vec::new();
    for (key, selector) in pairs {
        let (index, inserted) = keys.insert_full(key);
        if !inserted {
            return Err(SelectorError::duplicate_key(keys[index].to_string()).into());
        }
        inputs.push(selector);
    }

    creator.create(
        inputs,
        Structure {
            keys: keys.into_iter().collect(),
        },
    )
}
