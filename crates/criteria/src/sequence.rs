//! Lazy sequence operations driven by criteria.
//!
//! [`SequenceExt`] is implemented for every iterator. Nothing here buffers:
//! each call to `next` pulls input until one item matches, then suspends.

use crate::traits::Criteria;
use std::borrow::Borrow;
use std::iter::FusedIterator;
use tracing;

/// Extension methods applying criteria to iterators.
pub trait SequenceExt: Iterator + Sized {
    /// Yield every item unchanged.
    fn one_at_a_time(self) -> OneAtATime<Self> {
        OneAtATime { iter: self }
    }

    /// Yield only the items satisfying `criteria`, in their original order.
    ///
    /// Items may be the criteria's item type or anything borrowing as it,
    /// so `movies.iter()` and `movies.into_iter()` both work.
    fn that_satisfy<C>(self, criteria: C) -> ThatSatisfy<Self, C>
    where
        C: Criteria,
        Self::Item: Borrow<C::Item>,
    {
        ThatSatisfy::new(self, criteria)
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Filter any iterable collection by `criteria`.
pub fn that_satisfy<I, C>(items: I, criteria: C) -> ThatSatisfy<I::IntoIter, C>
where
    I: IntoIterator,
    C: Criteria,
    I::Item: Borrow<C::Item>,
{
    ThatSatisfy::new(items.into_iter(), criteria)
}

/// Pass-through iterator returned by [`SequenceExt::one_at_a_time`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct OneAtATime<I> {
    iter: I,
}

impl<I: Iterator> Iterator for OneAtATime<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for OneAtATime<I> {}

/// Lazy filtering iterator returned by [`SequenceExt::that_satisfy`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ThatSatisfy<I, C> {
    iter: I,
    criteria: C,
    examined: usize,
    yielded: usize,
    exhausted: bool,
}

impl<I, C> ThatSatisfy<I, C> {
    fn new(iter: I, criteria: C) -> Self {
        Self {
            iter,
            criteria,
            examined: 0,
            yielded: 0,
            exhausted: false,
        }
    }

    /// The criteria this iterator filters by.
    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    /// How many input items have been pulled so far.
    pub fn examined(&self) -> usize {
        self.examined
    }
}

impl<I, C> Iterator for ThatSatisfy<I, C>
where
    I: Iterator,
    C: Criteria,
    I::Item: Borrow<C::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let criteria = &self.criteria;
        let examined = &mut self.examined;
        let found = self.iter.find(|item| {
            *examined += 1;
            criteria.is_satisfied_by(<I::Item as Borrow<C::Item>>::borrow(item))
        });

        match found {
            Some(item) => {
                self.yielded += 1;
                Some(item)
            }
            None => {
                if !self.exhausted {
                    self.exhausted = true;
                    tracing::trace!(
                        "Sequence exhausted: {} (examined: {}, yielded: {})",
                        self.criteria.name(),
                        self.examined,
                        self.yielded
                    );
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, C> FusedIterator for ThatSatisfy<I, C>
where
    I: FusedIterator,
    C: Criteria,
    I::Item: Borrow<C::Item>,
{
}
