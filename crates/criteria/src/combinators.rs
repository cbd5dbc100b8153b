//! Boolean combinators over criteria.
//!
//! Produced by [`Criteria::and`], [`Criteria::or`] and [`Criteria::not`].
//! Each combinator is itself a criteria, so they nest freely.

use crate::traits::Criteria;

/// Satisfied when both inner criteria are; short-circuits on the left.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Criteria for And<A, B>
where
    A: Criteria,
    B: Criteria<Item = A::Item>,
{
    type Item = A::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        self.left.is_satisfied_by(item) && self.right.is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        "And"
    }
}

/// Satisfied when either inner criteria is; short-circuits on the left.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Criteria for Or<A, B>
where
    A: Criteria,
    B: Criteria<Item = A::Item>,
{
    type Item = A::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        self.left.is_satisfied_by(item) || self.right.is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        "Or"
    }
}

/// Inverts the inner criteria.
#[derive(Debug, Clone, Copy)]
pub struct Not<C> {
    inner: C,
}

impl<C> Not<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Criteria> Criteria for Not<C> {
    type Item = C::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        !self.inner.is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        "Not"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymous::from_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_truth_tables() {
        let positive = || from_fn(|n: &i32| *n > 0);
        let even = || from_fn(|n: &i32| n % 2 == 0);

        let both = positive().and(even());
        assert!(both.is_satisfied_by(&4));
        assert!(!both.is_satisfied_by(&3));
        assert!(!both.is_satisfied_by(&-2));

        let either = positive().or(even());
        assert!(either.is_satisfied_by(&3));
        assert!(either.is_satisfied_by(&-2));
        assert!(!either.is_satisfied_by(&-3));

        let odd = even().not();
        assert!(odd.is_satisfied_by(&3));
        assert!(!odd.is_satisfied_by(&4));
    }

    #[test]
    fn test_and_short_circuits() {
        let right_calls = AtomicUsize::new(0);
        let never = from_fn(|_: &i32| false);
        let counted = from_fn(|_: &i32| {
            right_calls.fetch_add(1, Ordering::SeqCst);
            true
        });

        let both = never.and(counted);
        assert!(!both.is_satisfied_by(&1));
        assert_eq!(right_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_short_circuits() {
        let right_calls = AtomicUsize::new(0);
        let always = from_fn(|_: &i32| true);
        let counted = from_fn(|_: &i32| {
            right_calls.fetch_add(1, Ordering::SeqCst);
            false
        });

        let either = always.or(counted);
        assert!(either.is_satisfied_by(&1));
        assert_eq!(right_calls.load(Ordering::SeqCst), 0);
    }
}
