//! Ordered collections of criteria.
//!
//! `AllOf` and `AnyOf` chain any number of criteria together using the
//! builder pattern. Members are evaluated in insertion order and evaluation
//! stops at the first member that decides the outcome.

use crate::traits::{BoxedCriteria, Criteria};
use std::fmt;
use tracing;

/// Satisfied when every member is satisfied.
///
/// ## Usage
/// ```ignore
/// let classic_comedy = AllOf::new()
///     .with(Movie::is_published_between(1980, 1989))
///     .with(Movie::is_of_genre([Genre::Comedy]));
///
/// let hits: Vec<&Movie> = movies.iter().that_satisfy(&classic_comedy).collect();
/// ```
pub struct AllOf<T: ?Sized> {
    members: Vec<BoxedCriteria<T>>,
}

impl<T: ?Sized + 'static> AllOf<T> {
    /// Create an empty AllOf, which every item satisfies.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Add a member (builder pattern).
    ///
    /// # Arguments
    /// * `criteria` - Any type implementing Criteria over the same item type
    ///
    /// # Returns
    /// Self for method chaining
    pub fn with(mut self, criteria: impl Criteria<Item = T> + 'static) -> Self {
        self.members.push(Box::new(criteria));
        self
    }

    /// Add an already boxed member.
    pub fn push(&mut self, criteria: BoxedCriteria<T>) {
        self.members.push(criteria);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: ?Sized + 'static> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> FromIterator<BoxedCriteria<T>> for AllOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedCriteria<T>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Criteria for AllOf<T> {
    type Item = T;

    fn is_satisfied_by(&self, item: &T) -> bool {
        for member in &self.members {
            if !member.is_satisfied_by(item) {
                tracing::trace!("AllOf rejected item at member: {}", member.name());
                return false;
            }
        }
        true
    }

    fn name(&self) -> &str {
        "AllOf"
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.members.iter().map(|m| m.name()))
            .finish()
    }
}

/// Satisfied when at least one member is satisfied.
///
/// An empty AnyOf is satisfied by nothing.
pub struct AnyOf<T: ?Sized> {
    members: Vec<BoxedCriteria<T>>,
}

impl<T: ?Sized + 'static> AnyOf<T> {
    /// Create an empty AnyOf, which no item satisfies.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Add a member (builder pattern).
    pub fn with(mut self, criteria: impl Criteria<Item = T> + 'static) -> Self {
        self.members.push(Box::new(criteria));
        self
    }

    /// Add an already boxed member.
    pub fn push(&mut self, criteria: BoxedCriteria<T>) {
        self.members.push(criteria);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: ?Sized + 'static> Default for AnyOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> FromIterator<BoxedCriteria<T>> for AnyOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedCriteria<T>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> Criteria for AnyOf<T> {
    type Item = T;

    fn is_satisfied_by(&self, item: &T) -> bool {
        for member in &self.members {
            if member.is_satisfied_by(item) {
                tracing::trace!("AnyOf accepted item at member: {}", member.name());
                return true;
            }
        }
        false
    }

    fn name(&self) -> &str {
        "AnyOf"
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.members.iter().map(|m| m.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymous::from_fn;

    #[test]
    fn test_empty_sets() {
        let all: AllOf<i32> = AllOf::new();
        let any: AnyOf<i32> = AnyOf::new();

        assert!(all.is_empty());
        assert!(all.is_satisfied_by(&7));
        assert!(!any.is_satisfied_by(&7));
    }

    #[test]
    fn test_all_of_requires_every_member() {
        let in_range = AllOf::new()
            .with(from_fn(|n: &i32| *n >= 10))
            .with(from_fn(|n: &i32| *n <= 20));

        assert_eq!(in_range.len(), 2);
        assert!(in_range.is_satisfied_by(&10));
        assert!(in_range.is_satisfied_by(&20));
        assert!(!in_range.is_satisfied_by(&9));
        assert!(!in_range.is_satisfied_by(&21));
    }

    #[test]
    fn test_any_of_requires_one_member() {
        let mut outside = AnyOf::new().with(from_fn(|n: &i32| *n < 10));
        outside.push(Box::new(from_fn(|n: &i32| *n > 20)));

        assert!(outside.is_satisfied_by(&5));
        assert!(outside.is_satisfied_by(&25));
        assert!(!outside.is_satisfied_by(&15));
    }

    #[test]
    fn test_collect_into_set() {
        let members: Vec<BoxedCriteria<i32>> = vec![
            from_fn(|n: &i32| *n != 0).boxed(),
            from_fn(|n: &i32| n % 3 == 0).boxed(),
        ];
        let all: AllOf<i32> = members.into_iter().collect();

        assert!(all.is_satisfied_by(&9));
        assert!(!all.is_satisfied_by(&0));
        assert!(!all.is_satisfied_by(&4));
    }
}
