use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::SingleList;
use super::node::{Link, Node};

/// Traversal core shared by [`Iter`] and [`IterMut`]; mutability only
/// enters at the point the element reference is produced.
struct RawIter<T> {
    current: Link<T>,
    remaining: usize,
}

impl<T> RawIter<T> {
    fn new(head: Link<T>, len: usize) -> Self {
        RawIter {
            current: head,
            remaining: len,
        }
    }

    /// Yields the current node and steps past it.
    ///
    /// # Safety
    ///
    /// The chain the iterator was created over must stay alive and unmodified
    /// for as long as the raw iterator is advanced.
    unsafe fn next(&mut self) -> Option<NonNull<Node<T>>> {
        self.current.inspect(|node| {
            self.current = unsafe { node.as_ref().next };
            self.remaining -= 1;
        })
    }
}

impl<T> Clone for RawIter<T> {
    fn clone(&self) -> Self {
        RawIter {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// A forward iterator over shared references to the elements of a
/// [`SingleList`], in list order.
pub struct Iter<'a, T> {
    raw: RawIter<T>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a SingleList<T>) -> Self {
        Iter {
            raw: RawIter::new(list.head, list.len),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        unsafe { self.raw.next().map(|node| &(*node.as_ptr()).data) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.remaining, Some(self.raw.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A forward iterator over mutable references to the elements of a
/// [`SingleList`], in list order.
pub struct IterMut<'a, T> {
    raw: RawIter<T>,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut SingleList<T>) -> Self {
        IterMut {
            raw: RawIter::new(list.head, list.len),
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        unsafe { self.raw.next().map(|node| &mut (*node.as_ptr()).data) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.raw.remaining, Some(self.raw.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reads the remaining chain through shared references only.
        let remaining = Iter {
            raw: self.raw.clone(),
            marker: PhantomData,
        };
        f.debug_list().entries(remaining).finish()
    }
}

/// An owning iterator over the elements of a [`SingleList`].
///
/// Elements are drained front to back; whatever has not been consumed is
/// dropped with the iterator.
pub struct IntoIter<T> {
    list: SingleList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SingleList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SingleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

unsafe impl<T> Send for Iter<'_, T> where T: Sync {}
unsafe impl<T> Sync for Iter<'_, T> where T: Sync {}

unsafe impl<T> Send for IterMut<'_, T> where T: Send {}
unsafe impl<T> Sync for IterMut<'_, T> where T: Sync {}
