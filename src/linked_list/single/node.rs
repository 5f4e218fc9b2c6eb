use alloc::boxed::Box;
use core::ptr::NonNull;

/// A link to the successor node, `None` at the end of the chain.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// A heap-allocated node owning one element and the link to its successor.
pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) data: T,
}

impl<T> Node<T> {
    /// Allocates a node on the heap and returns the raw handle to it.
    ///
    /// Ownership of the allocation moves to the caller; it must eventually
    /// be released through [`Node::dealloc`].
    pub(crate) fn alloc(data: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { next, data })))
    }

    /// Releases a node previously produced by [`Node::alloc`] and returns
    /// its element.
    ///
    /// # Safety
    ///
    /// `node` must have been returned by [`Node::alloc`] and must not be
    /// reachable from any link afterwards.
    pub(crate) unsafe fn dealloc(node: NonNull<Node<T>>) -> T {
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.data
    }
}
