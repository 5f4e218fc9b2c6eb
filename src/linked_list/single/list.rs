use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;

use alloc::boxed::Box;

use super::cursor::{Cursor, CursorMut};
use super::iter::{Iter, IterMut};
use super::node::{Link, Node};

/// An owned singly linked list.
///
/// Elements live in individually allocated nodes, each owned by its
/// predecessor's link (or by the list head for the first one). Front
/// operations and cursor-based positional operations are O(1).
///
/// # Examples
///
/// ```
/// use strand_collections::linked_list::single::SingleList;
///
/// let mut list = SingleList::new();
/// list.push_front(2);
/// list.push_front(1);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.len(), 2);
/// ```
pub struct SingleList<T> {
    pub(super) head: Link<T>,
    pub(super) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> SingleList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SingleList {
            head: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Inserts `value` at the front of the list in O(1).
    pub fn push_front(&mut self, value: T) {
        self.head = Some(Node::alloc(value, self.head));
        self.len += 1;
    }

    /// Removes and returns the first element in O(1), or `None` if the list
    /// is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|node| unsafe {
            self.head = node.as_ref().next;
            self.len -= 1;
            Node::dealloc(node)
        })
    }

    /// Removes every element in O(N).
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Only the head link and the length are exchanged; no node is moved,
    /// copied, or reallocated.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a forward iterator over shared references to the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a forward iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Returns a cursor at the ghost position before the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Returns a mutable cursor at the ghost position before the first
    /// element.
    ///
    /// The ghost position is the anchor for mutating the very front of the
    /// list: [`CursorMut::insert_after`] there is `push_front`, and
    /// [`CursorMut::remove_next`] there is `pop_front`.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }
}

impl<T> Default for SingleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for SingleList<T> {
    /// Builds a list holding the yielded values in iteration order, in O(N).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SingleList::new();
        let mut iter = iter.into_iter();

        let Some(first) = iter.next() else {
            return list;
        };
        let mut tail = Node::alloc(first, None);
        list.head = Some(tail);
        list.len = 1;

        for value in iter {
            let node = Node::alloc(value, None);
            unsafe { tail.as_mut().next = Some(node) };
            tail = node;
            list.len += 1;
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SingleList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> Clone for SingleList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Replaces `self` with a deep copy of `source`.
    ///
    /// The copy is fully built before `self` is touched, so `self` keeps its
    /// old contents if cloning an element panics; the old nodes are released
    /// when the temporary drops.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T: PartialEq> PartialEq for SingleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleList<T> {}

impl<T: PartialOrd> PartialOrd for SingleList<T> {
    /// Lexicographic comparison of the element sequences.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SingleList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SingleList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SingleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

unsafe impl<T: Send> Send for SingleList<T> {}
unsafe impl<T: Sync> Sync for SingleList<T> {}
