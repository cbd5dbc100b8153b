//! Reusable predicates ("criteria") and the lazy sequence filter that
//! applies them.
//!
//! This crate provides:
//! - Criteria trait with blanket impls for references, boxes and `Arc`
//! - AnonymousCriteria for wrapping closures
//! - Combinators (`and`, `or`, `not`) and ordered sets (`AllOf`, `AnyOf`)
//! - SequenceExt for lazily filtering any iterator
//! - ParallelCriteriaExt for eager, data-parallel filtering of slices
//!
//! ## Architecture
//! What to test lives in a criteria; how to iterate lives in the sequence
//! adaptor. New predicates never touch the filtering mechanism.
//!
//! ## Example Usage
//! ```
//! use criteria::{from_fn, Criteria, SequenceExt};
//!
//! let small = from_fn(|n: &i32| *n < 10);
//! let odd = from_fn(|n: &i32| n % 2 == 1);
//!
//! let picked: Vec<i32> = vec![1, 4, 9, 12, 15]
//!     .into_iter()
//!     .that_satisfy(small.and(odd))
//!     .collect();
//! assert_eq!(picked, vec![1, 9]);
//! ```

pub mod traits;
pub mod anonymous;
pub mod combinators;
pub mod set;
pub mod sequence;
pub mod parallel;

// Re-export main types
pub use traits::{BoxedCriteria, Criteria};
pub use anonymous::{from_fn, AnonymousCriteria};
pub use combinators::{And, Not, Or};
pub use set::{AllOf, AnyOf};
pub use sequence::{that_satisfy, OneAtATime, SequenceExt, ThatSatisfy};
pub use parallel::ParallelCriteriaExt;
