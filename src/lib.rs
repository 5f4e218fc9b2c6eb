//! Owned sequential collections built on linked nodes.
//!
//! The crate is `no_std` and allocates through [`alloc`]; see
//! [`linked_list::single::SingleList`] for the main container.

#![no_std]

extern crate alloc;

pub mod linked_list;
