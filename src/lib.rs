//! A growable sequence container with copy-on-write sharing and inline
//! storage for the single-element case.
//!
//! [`CowVector<T>`] has three storage representations and moves between them
//! as it grows and shrinks:
//!
//! - empty: no element, no allocation;
//! - inline: exactly one element stored in the vector itself;
//! - shared: a reference counted heap block holding the elements.
//!
//! Cloning a vector in the shared representation is *O*(1): both handles
//! point at the same block until one of them is mutated, at which point the
//! mutating handle clones the block first. Read-only access never clones.
//!
//! ```
//! use cow_vector::CowVector;
//!
//! let mut a = CowVector::new();
//! a.push(5);
//! assert!(a.is_inline());
//!
//! a.push(7);
//! let b = a.clone(); // shares the block with a
//!
//! a.push(9);
//! assert_eq!(a.as_slice(), &[5, 7, 9]);
//! assert_eq!(b.as_slice(), &[5, 7]); // b never sees a's mutation
//! ```
//!
//! The reference count is not atomic. Sharing is strictly single-threaded,
//! which the type system enforces: `CowVector<T>` is neither `Send` nor
//! `Sync`.

mod raw;
mod vector;

pub use crate::raw::AllocError;
pub use crate::vector::CowVector;
