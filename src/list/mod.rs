use std::fmt::{self, Debug, Display, Formatter};

use crate::arena::{Arena, NodeId};
use crate::Iter;

pub mod cursor;
pub mod iterator;

/// The `List` is a circular doubly-linked sequence with a
/// container-managed cursor. It allows inserting and removing elements at
/// both ends and around the cursor in constant time. In compromise,
/// accessing elements at an arbitrary position takes *O*(*n*) time.
///
/// The `List` contains:
/// - an arena of node slots addressed by stable, generation-checked ids
///   (nodes never move once allocated);
/// - `head` and `tail` ids marking the logical first and last element of
///   the ring (`None` exactly when the list is empty);
/// - a `cursor` id marking the current element for the relative
///   operations in [`cursor`](crate::list::cursor), or `None` when no
///   current element is set;
/// - a `len` field that is maintained on every mutation and never
///   recomputed by traversal.
///
/// # Naming Conventions
///
/// - `front`/`back`: the elements at `head`/`tail`;
/// - `current`: the element under the cursor;
/// - `before`/`after`: the ring neighbors of the current element. The
///   ring wraps, so the element before the front is the back.
pub struct List<T> {
    arena: Arena<T>,
    len: usize,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    cursor: Option<NodeId>,
}

// Private methods. All bookkeeping of `len`, `head` and `tail` (and the
// only cursor invalidation point) lives in these four primitives; the
// public operations are thin wrappers around them.
impl<T> List<T> {
    /// Link the first node of the ring: it is its own predecessor and
    /// successor, and it is both head and tail.
    fn link_solo(&mut self, value: T) -> NodeId {
        debug_assert!(self.is_empty());
        let id = self.arena.next_id();
        let id = self.arena.alloc(value, id, id);
        self.head = Some(id);
        self.tail = Some(id);
        self.len = 1;
        id
    }

    /// Link a new node immediately before `anchor`. If `anchor` is the
    /// head, the new node becomes the head.
    fn link_before(&mut self, anchor: NodeId, value: T) -> NodeId {
        let prev = self.arena[anchor].prev;
        debug_assert_eq!(self.arena[prev].next, anchor);
        let id = self.arena.alloc(value, prev, anchor);
        self.arena[prev].next = id;
        self.arena[anchor].prev = id;
        if self.head == Some(anchor) {
            self.head = Some(id);
        }
        self.len += 1;
        id
    }

    /// Link a new node immediately after `anchor`. If `anchor` is the
    /// tail, the new node becomes the tail.
    fn link_after(&mut self, anchor: NodeId, value: T) -> NodeId {
        let next = self.arena[anchor].next;
        debug_assert_eq!(self.arena[next].prev, anchor);
        let id = self.arena.alloc(value, anchor, next);
        self.arena[next].prev = id;
        self.arena[anchor].next = id;
        if self.tail == Some(anchor) {
            self.tail = Some(id);
        }
        self.len += 1;
        id
    }

    /// Unlink `node` from the ring and return its value.
    ///
    /// Head and tail follow the removal: removing the head makes its
    /// successor the head, removing the tail makes its predecessor the
    /// tail. Removing the last remaining node empties the list. Removing
    /// the node under the cursor unsets the cursor.
    fn unlink(&mut self, node: NodeId) -> T {
        if self.len == 1 {
            debug_assert_eq!(self.head, Some(node));
            self.head = None;
            self.tail = None;
            self.cursor = None;
            self.len = 0;
            return self.arena.free(node).value;
        }
        let removed = self.arena.free(node);
        self.arena[removed.prev].next = removed.next;
        self.arena[removed.next].prev = removed.prev;
        if self.head == Some(node) {
            self.head = Some(removed.next);
        }
        if self.tail == Some(node) {
            self.tail = Some(removed.prev);
        }
        if self.cursor == Some(node) {
            self.cursor = None;
        }
        self.len -= 1;
        removed.value
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            len: 0,
            head: None,
            tail: None,
            cursor: None,
        }
    }

    /// Create an empty `List` whose arena can hold `capacity` elements
    /// before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            len: 0,
            head: None,
            tail: None,
            cursor: None,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// The length is bookkept on every mutation, never recounted by
    /// traversal.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List` and unsets the cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.arena.clear();
        self.len = 0;
        self.head = None;
        self.tail = None;
        self.cursor = None;
    }

    /// Provides a reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        let id = self.head?;
        Some(&self.arena[id].value)
    }

    /// Provides a mutable reference to the front element, or `None` if
    /// the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let id = self.head?;
        Some(&mut self.arena[id].value)
    }

    /// Provides a reference to the back element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        let id = self.tail?;
        Some(&self.arena[id].value)
    }

    /// Provides a mutable reference to the back element, or `None` if
    /// the list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let id = self.tail?;
        Some(&mut self.arena[id].value)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// assert_eq!(list.back().unwrap(), &2);
    /// ```
    pub fn push_front(&mut self, value: T) {
        match self.head {
            Some(head) => {
                self.link_before(head, value);
            }
            None => {
                self.link_solo(value);
            }
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, value: T) {
        match self.tail {
            Some(tail) => {
                self.link_after(tail, value);
            }
            None => {
                self.link_solo(value);
            }
        }
    }

    /// Removes the first element and returns it, or `None` if the list
    /// is empty.
    ///
    /// Removing the element under the cursor unsets the cursor; removing
    /// the sole element empties the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes the last element and returns it, or `None` if the list
    /// is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Provides a forward iterator in front-to-back order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Asserts every structural invariant of the list: `len` matching a
    /// full ring traversal, `prev`/`next` being mutual inverses, head
    /// and tail delimiting the ring, and the cursor referring to a ring
    /// member.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none(), "len/head disagree");
        assert_eq!(self.len == 0, self.tail.is_none(), "len/tail disagree");
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => {
                assert_eq!(self.cursor, None, "cursor set on an empty list");
                return;
            }
        };
        if self.len == 1 {
            assert_eq!(head, tail, "singleton head and tail differ");
        }
        let mut cursor_seen = false;
        let mut node = head;
        for step in 0..self.len {
            let next = self.arena[node].next;
            assert_eq!(
                self.arena[next].prev,
                node,
                "prev/next are not mutual inverses at step {}",
                step
            );
            if self.cursor == Some(node) {
                cursor_seen = true;
            }
            assert_eq!(
                node == tail,
                step == self.len - 1,
                "tail is not the last ring member"
            );
            node = next;
        }
        assert_eq!(node, head, "ring does not close after len steps");
        assert!(
            self.cursor.is_none() || cursor_seen,
            "cursor refers to a node outside the ring"
        );
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `Liste de <N> éléments : [ e1 e2 ... eN ]`,
/// without a trailing newline. This is the historical report format of
/// the simulation output files.
///
/// # Examples
///
/// ```
/// use cursor_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "Liste de 3 éléments : [ 1 2 3 ]");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Liste de {} éléments : [ ", self.len)?;
        for value in self.iter() {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuilds the list element by element. The clone's cursor is unset.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

/// Lists compare equal when they hold the same elements in the same
/// front-to-back order, regardless of cursor positions or arena layout.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}
