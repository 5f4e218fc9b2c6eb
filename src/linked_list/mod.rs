//! Owned (non-intrusive) linked list implementations.
//!
//! In an owned linked list, the list allocates and owns its nodes: each node
//! holds one element and the link to its successor, and every node is
//! released when the element is removed or the list is dropped. This is in
//! contrast to an intrusive linked list, where the caller provides storage
//! for the nodes and the list only threads links through it.
//!
//! # Examples
//!
//! ```
//! use strand_collections::linked_list::single::SingleList;
//!
//! let mut list = SingleList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//!
//! assert_eq!(list.len(), 3);
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
pub mod single;
