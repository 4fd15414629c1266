use std::collections::VecDeque;

use tracing::trace;

use super::args::ArgList;

#[derive(Debug, Clone)]
struct CacheEntry<A, R> {
    args: A,
    result: R,
}

/// Most recent `(args, result)` pairs, newest first.
///
/// With a capacity of one this is the single-slot cache: only a call with the
/// same arguments as the previous one is a hit.
#[derive(Debug)]
pub struct MemoCache<A, R> {
    entries: VecDeque<CacheEntry<A, R>>,
    capacity: usize,
}

impl<A, R> MemoCache<A, R> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds a cached result for `args` and promotes it to most recent.
    pub fn lookup<E>(&mut self, args: &A, equality: &E) -> Option<&R>
    where
        A: ArgList<E>,
    {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.args.matches(args, equality))?;

        if position > 0 {
            let entry = self.entries.remove(position)?;
            self.entries.push_front(entry);
        }

        trace!(position, arity = args.arity(), "memo cache hit");
        self.entries.front().map(|entry| &entry.result)
    }

    /// Stores a freshly computed pair, evicting the least recent entry when
    /// the cache is full.
    pub fn insert(&mut self, args: A, result: R) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
            trace!(capacity = self.capacity, "memo cache eviction");
        }
        self.entries.push_front(CacheEntry { args, result });
    }

    pub fn most_recent(&self) -> Option<&R> {
        self.entries.front().map(|entry| &entry.result)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
