use super::list::SingleList;
use super::node::{Link, Node};

/// Follows one link from `current`, re-entering the chain at `head` from the
/// ghost position.
///
/// # Safety
///
/// `current` must be `None` or point to a live node of the chain headed by
/// `head`.
unsafe fn step<T>(current: Link<T>, head: Link<T>) -> Link<T> {
    match current {
        None => head,
        Some(node) => unsafe { node.as_ref().next },
    }
}

/// A shared position in a [`SingleList`].
///
/// A cursor is either at the *ghost* position before the first element or at
/// a real element. [`Cursor::move_next`] steps ghost → first → … → last →
/// ghost, so the ghost doubles as the position past the last element. The
/// cursor borrows the list, so the elements it points at cannot be removed
/// under it.
pub struct Cursor<'a, T> {
    current: Link<T>,
    list: &'a SingleList<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(super) fn new(list: &'a SingleList<T>) -> Self {
        Cursor {
            current: None,
            list,
        }
    }

    /// Returns the element under the cursor, or `None` at the ghost
    /// position.
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Returns the element after the cursor; at the ghost position this is
    /// the front element.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = unsafe { step(self.current, self.list.head) };
        next.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Moves the cursor to the next position; past the last element it
    /// returns to the ghost position.
    pub fn move_next(&mut self) {
        self.current = unsafe { step(self.current, self.list.head) };
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }
}

/// An exclusive position in a [`SingleList`], carrying the positional
/// mutations.
///
/// Positions behave exactly as for [`Cursor`]. Operations the underlying
/// representation cannot honor (removing past the tail, reading the ghost)
/// report `None` instead of being undefined, and a cursor cannot name a node
/// of another list or outlive one, since it borrows the list it came from.
pub struct CursorMut<'a, T> {
    current: Link<T>,
    list: &'a mut SingleList<T>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(super) fn new(list: &'a mut SingleList<T>) -> Self {
        CursorMut {
            current: None,
            list,
        }
    }

    /// Returns the element under the cursor, or `None` at the ghost
    /// position.
    pub fn current(&mut self) -> Option<&mut T> {
        self.current.map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Returns the element after the cursor; at the ghost position this is
    /// the front element.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = unsafe { step(self.current, self.list.head) };
        next.map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Moves the cursor to the next position; past the last element it
    /// returns to the ghost position.
    pub fn move_next(&mut self) {
        self.current = unsafe { step(self.current, self.list.head) };
    }

    /// Inserts `value` immediately after the cursor in O(1).
    ///
    /// At the ghost position this is exactly `push_front`. The cursor stays
    /// where it is; the new element becomes [`CursorMut::peek_next`], and one
    /// [`CursorMut::move_next`] lands on it.
    pub fn insert_after(&mut self, value: T) {
        let next = unsafe { step(self.current, self.list.head) };
        let node = Node::alloc(value, next);
        match self.current {
            None => self.list.head = Some(node),
            Some(mut prev) => unsafe { prev.as_mut().next = Some(node) },
        }
        self.list.len += 1;
    }

    /// Removes and returns the element immediately after the cursor in O(1),
    /// or `None` if the cursor is at the last element.
    ///
    /// At the ghost position this is exactly `pop_front`.
    pub fn remove_next(&mut self) -> Option<T> {
        let victim = unsafe { step(self.current, self.list.head) }?;
        unsafe {
            let after = victim.as_ref().next;
            match self.current {
                None => self.list.head = after,
                Some(mut prev) => prev.as_mut().next = after,
            }
            self.list.len -= 1;
            Some(Node::dealloc(victim))
        }
    }

    /// Reborrows the position as a shared [`Cursor`].
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.current,
            list: self.list,
        }
    }
}

unsafe impl<T> Send for Cursor<'_, T> where T: Sync {}
unsafe impl<T> Sync for Cursor<'_, T> where T: Sync {}

unsafe impl<T> Send for CursorMut<'_, T> where T: Send {}
unsafe impl<T> Sync for CursorMut<'_, T> where T: Sync {}
