//! Core trait for the criteria abstraction.
//!
//! This module defines the Criteria trait that allows composable,
//! reusable predicates to be applied to any item type.

use crate::combinators::{And, Not, Or};
use std::sync::Arc;

/// A type-erased criteria, convenient for storing heterogeneous predicates.
pub type BoxedCriteria<T> = Box<dyn Criteria<Item = T>>;

/// Core trait for testing a single item.
///
/// All criteria must implement this trait to be used with
/// [`SequenceExt::that_satisfy`](crate::SequenceExt::that_satisfy).
///
/// ## Design Note
/// - `Send + Sync` allows one criteria to be shared by concurrent iterations
/// - `is_satisfied_by` borrows the item, so filtering never clones
/// - Implementations keep their parameters immutable after construction
pub trait Criteria: Send + Sync {
    /// The type of item this criteria tests.
    type Item: ?Sized;

    /// Returns true when `item` satisfies this criteria.
    ///
    /// Must be a total function: no panics, no side effects, and the same
    /// item always yields the same answer.
    fn is_satisfied_by(&self, item: &Self::Item) -> bool;

    /// Returns the name of this criteria (for logging/debugging)
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Satisfied when both `self` and `other` are. `other` is only
    /// evaluated when `self` holds.
    fn and<C>(self, other: C) -> And<Self, C>
    where
        Self: Sized,
        C: Criteria<Item = Self::Item>,
    {
        And::new(self, other)
    }

    /// Satisfied when either `self` or `other` is. `other` is only
    /// evaluated when `self` fails.
    fn or<C>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
        C: Criteria<Item = Self::Item>,
    {
        Or::new(self, other)
    }

    /// Satisfied exactly when `self` is not.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedCriteria<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<C: Criteria + ?Sized> Criteria for &C {
    type Item = C::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Criteria + ?Sized> Criteria for Box<C> {
    type Item = C::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: Criteria + ?Sized> Criteria for Arc<C> {
    type Item = C::Item;

    fn is_satisfied_by(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied_by(item)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
