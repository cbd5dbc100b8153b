//! Criteria built from an ad-hoc closure.
//!
//! Handy when a predicate is used once and doesn't deserve its own type.

use crate::traits::Criteria;
use std::fmt;
use std::marker::PhantomData;

/// Delegates [`Criteria::is_satisfied_by`] to a caller-supplied function.
///
/// ## Usage
/// ```
/// use criteria::{AnonymousCriteria, Criteria};
///
/// let even = AnonymousCriteria::new(|n: &u32| n % 2 == 0);
/// assert!(even.is_satisfied_by(&4));
/// assert!(!even.is_satisfied_by(&5));
/// ```
pub struct AnonymousCriteria<T: ?Sized, F> {
    condition: F,
    // fn(&T) keeps the criteria Send + Sync regardless of T
    _item: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> AnonymousCriteria<T, F>
where
    F: Fn(&T) -> bool,
{
    /// Wrap `condition` as a criteria over `T`.
    pub fn new(condition: F) -> Self {
        Self {
            condition,
            _item: PhantomData,
        }
    }
}

/// Shorthand for [`AnonymousCriteria::new`].
pub fn from_fn<T: ?Sized, F>(condition: F) -> AnonymousCriteria<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    AnonymousCriteria::new(condition)
}

impl<T: ?Sized, F> Criteria for AnonymousCriteria<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    type Item = T;

    fn is_satisfied_by(&self, item: &T) -> bool {
        (self.condition)(item)
    }

    fn name(&self) -> &str {
        "AnonymousCriteria"
    }
}

impl<T: ?Sized, F: Clone> Clone for AnonymousCriteria<T, F> {
    fn clone(&self) -> Self {
        Self {
            condition: self.condition.clone(),
            _item: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for AnonymousCriteria<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnonymousCriteria").finish_non_exhaustive()
    }
}
