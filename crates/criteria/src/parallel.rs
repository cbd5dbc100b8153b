//! Data-parallel filtering over slices.
//!
//! Unlike [`SequenceExt::that_satisfy`](crate::SequenceExt::that_satisfy) this
//! is eager: the whole slice is tested up front across the rayon pool. It
//! only makes sense for large, fully materialized collections.

use crate::traits::Criteria;
use rayon::prelude::*;

/// Parallel counterpart of the lazy sequence filter.
pub trait ParallelCriteriaExt<T: Sync> {
    /// Collect references to every element satisfying `criteria`.
    ///
    /// The result keeps the slice's order.
    fn par_that_satisfy<C>(&self, criteria: &C) -> Vec<&T>
    where
        C: Criteria<Item = T> + ?Sized;

    /// Count the elements satisfying `criteria`.
    fn par_count_satisfying<C>(&self, criteria: &C) -> usize
    where
        C: Criteria<Item = T> + ?Sized;
}

impl<T: Sync> ParallelCriteriaExt<T> for [T] {
    fn par_that_satisfy<C>(&self, criteria: &C) -> Vec<&T>
    where
        C: Criteria<Item = T> + ?Sized,
    {
        self.par_iter()
            .filter(|item| criteria.is_satisfied_by(item))
            .collect()
    }

    fn par_count_satisfying<C>(&self, criteria: &C) -> usize
    where
        C: Criteria<Item = T> + ?Sized,
    {
        self.par_iter()
            .filter(|item| criteria.is_satisfied_by(item))
            .count()
    }
}
