//! # Owned singly linked list
//!
//! A forward-only sequence container with O(1) front operations and O(1)
//! positional insertion/removal after a cursor.
//!
//! ## Core components
//!
//! - [`list::SingleList`]: the container itself.
//! - [`iter::Iter`], [`iter::IterMut`], [`iter::IntoIter`]: forward
//!   iteration over the elements in list order.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: positions into the list,
//!   starting at the ghost position before the first element. The mutable
//!   cursor carries the positional mutations `insert_after` and
//!   `remove_next`.
//!
//! ## Safety
//!
//! The public API is entirely safe. Internally nodes are linked with raw
//! `NonNull` pointers; the invariants upheld by this module are:
//!
//! - Every node is reachable from the list head by following `next` links,
//!   and is owned by exactly one link (its predecessor's, or the head).
//! - The chain is acyclic and ends in `None` after exactly `len` steps.
//! - Every allocated node is released by exactly one `Box::from_raw`.

pub mod cursor;
pub mod iter;
pub mod list;
pub(crate) mod node;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::SingleList;

#[cfg(test)]
mod tests;
