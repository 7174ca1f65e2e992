//! Cursor navigation and cursor-relative mutation.
//!
//! The cursor is part of the [`List`] itself: an id designating the
//! "current" element. It starts unset, must be initialized with
//! [`rewind`](List::rewind) once the list is non-empty, and is advanced
//! explicitly by the caller. Every relative operation (inserting on
//! either side of the current element, removing one of its neighbors)
//! runs in *O*(1).
//!
//! Two removal policies coexist on purpose and must not be unified:
//! [`pop_front`](List::pop_front) and [`pop_back`](List::pop_back) on a
//! sole element empty the list, while [`remove_before`](List::remove_before)
//! and [`remove_after`](List::remove_after) spare it. A traversal driven
//! by the cursor can therefore never remove the element it stands on out
//! from under itself.

use crate::arena::NodeId;
use crate::list::List;

impl<T> List<T> {
    /// The id of the current node.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    fn current_node(&self) -> NodeId {
        self.cursor
            .expect("No current element (`rewind` must be called first)")
    }

    /// Moves the cursor to the front element.
    ///
    /// On an empty list the cursor becomes unset; it stays unusable
    /// until `rewind` is called again on a non-empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.current(), None);
    ///
    /// list.rewind();
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn rewind(&mut self) {
        self.cursor = self.head;
    }

    /// Moves the cursor to the successor of the current element,
    /// cyclically: advancing from the back element reaches the front
    /// element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.rewind();
    ///
    /// list.advance();
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// list.advance();
    /// list.advance(); // wraps around to the front
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let current = self.current_node();
        self.cursor = Some(self.arena[current].next);
    }

    /// Moves the cursor to the predecessor of the current element,
    /// cyclically: retreating from the front element reaches the back
    /// element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.rewind();
    ///
    /// list.retreat(); // wraps around to the back
    /// assert_eq!(list.current(), Some(&3));
    /// ```
    #[inline]
    pub fn retreat(&mut self) {
        let current = self.current_node();
        self.cursor = Some(self.arena[current].prev);
    }

    /// Moves the cursor by `offset` elements: forward for a positive
    /// offset, backward for a negative one. Both directions wrap.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(|`offset`|) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// list.rewind();
    ///
    /// list.seek(3);
    /// assert_eq!(list.current(), Some(&4));
    ///
    /// list.seek(-2);
    /// assert_eq!(list.current(), Some(&2));
    ///
    /// list.seek(4); // a full turn lands on the same element
    /// assert_eq!(list.current(), Some(&2));
    /// ```
    pub fn seek(&mut self, offset: isize) {
        // A zero offset still requires a current element.
        self.current_node();
        if offset >= 0 {
            for _ in 0..offset {
                self.advance();
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                self.retreat();
            }
        }
    }

    /// Provides a reference to the current element, or `None` if no
    /// current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.current(), None);
    ///
    /// list.rewind();
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    #[inline]
    pub fn current(&self) -> Option<&T> {
        let id = self.cursor?;
        Some(&self.arena[id].value)
    }

    /// Provides a mutable reference to the current element, or `None`
    /// if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.rewind();
    ///
    /// if let Some(x) = list.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(list.current(), Some(&5));
    /// ```
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let id = self.cursor?;
        Some(&mut self.arena[id].value)
    }

    /// Returns `true` if the current element is the front element.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    #[inline]
    pub fn current_is_front(&self) -> bool {
        Some(self.current_node()) == self.head
    }

    /// Returns `true` if the current element is the back element.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// list.rewind();
    /// assert!(list.current_is_front());
    /// assert!(!list.current_is_back());
    ///
    /// list.advance();
    /// assert!(list.current_is_back());
    /// ```
    #[inline]
    pub fn current_is_back(&self) -> bool {
        Some(self.current_node()) == self.tail
    }

    /// Inserts an element immediately before the current element. If
    /// the current element is the front, the new element becomes the
    /// front. The cursor keeps designating the same element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// list.rewind();
    /// list.advance();
    ///
    /// list.insert_before(2);
    /// assert_eq!(list.current(), Some(&3));
    /// assert_eq!(list.to_string(), "Liste de 3 éléments : [ 1 2 3 ]");
    ///
    /// // Inserting before the front element moves the front.
    /// list.rewind();
    /// list.insert_before(0);
    /// assert_eq!(list.front(), Some(&0));
    /// assert_eq!(list.current(), Some(&1));
    /// ```
    pub fn insert_before(&mut self, value: T) {
        let current = self.current_node();
        self.link_before(current, value);
    }

    /// Inserts an element immediately after the current element. If the
    /// current element is the back, the new element becomes the back.
    /// The cursor keeps designating the same element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// list.rewind();
    ///
    /// list.insert_after(2); // [1, 2, 3], still at 1
    /// assert_eq!(list.current(), Some(&1));
    ///
    /// list.seek(2); // move to 3, the back element
    /// list.insert_after(4); // the back moves to 4
    /// assert_eq!(list.back(), Some(&4));
    /// assert_eq!(list.to_string(), "Liste de 4 éléments : [ 1 2 3 4 ]");
    /// ```
    pub fn insert_after(&mut self, value: T) {
        let current = self.current_node();
        self.link_after(current, value);
    }

    /// Removes and returns the element immediately before the current
    /// element, or returns `None` without removing anything when the
    /// current element is the only one.
    ///
    /// The ring wraps: when the current element is the front, the
    /// element before it is the back. Head and tail follow the removal
    /// as usual.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.rewind();
    /// list.advance(); // current = 2
    ///
    /// assert_eq!(list.remove_before(), Some(1)); // the front moves to 2
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// // Before the front element sits the back element.
    /// list.rewind();
    /// assert_eq!(list.remove_before(), Some(3));
    /// assert_eq!(list.to_string(), "Liste de 1 éléments : [ 2 ]");
    ///
    /// // A sole element is never removed relative to the cursor.
    /// assert_eq!(list.remove_before(), None);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_before(&mut self) -> Option<T> {
        let current = self.current_node();
        if self.len == 1 {
            return None;
        }
        let target = self.arena[current].prev;
        Some(self.unlink(target))
    }

    /// Removes and returns the element immediately after the current
    /// element, or returns `None` without removing anything when the
    /// current element is the only one.
    ///
    /// The ring wraps: when the current element is the back, the
    /// element after it is the front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if no current element is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.rewind();
    /// assert_eq!(list.remove_after(), Some(2));
    ///
    /// // After the back element comes the front element.
    /// list.advance(); // current = 3, the back
    /// assert_eq!(list.remove_after(), Some(1));
    /// assert_eq!(list.front(), Some(&3));
    ///
    /// assert_eq!(list.remove_after(), None); // sole element is spared
    /// ```
    pub fn remove_after(&mut self) -> Option<T> {
        let current = self.current_node();
        if self.len == 1 {
            return None;
        }
        let target = self.arena[current].next;
        Some(self.unlink(target))
    }
}

#[cfg(test)]
mod tests {
    use std::iter::FromIterator;

    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use crate::List;

    fn contents(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn rewind_and_walk() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.current(), None);

        list.rewind();
        assert_eq!(list.current(), Some(&1));
        assert!(list.current_is_front());

        list.advance();
        assert_eq!(list.current(), Some(&2));
        assert!(!list.current_is_front());
        assert!(!list.current_is_back());

        list.advance();
        assert_eq!(list.current(), Some(&3));
        assert!(list.current_is_back());

        list.advance();
        assert!(list.current_is_front());
    }

    #[test]
    fn retreat_from_front_wraps_to_back() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.retreat();
        assert_eq!(list.current(), Some(&3));
        assert!(list.current_is_back());
        list.retreat();
        assert_eq!(list.current(), Some(&2));
    }

    #[test]
    fn seek_both_directions() {
        let mut list = List::from_iter(0..6);
        list.rewind();

        list.seek(0);
        assert_eq!(list.current(), Some(&0));

        list.seek(4);
        assert_eq!(list.current(), Some(&4));

        list.seek(-3);
        assert_eq!(list.current(), Some(&1));

        list.seek(-2);
        assert_eq!(list.current(), Some(&5));

        list.seek(13);
        assert_eq!(list.current(), Some(&0));
    }

    #[test]
    fn rewind_on_empty_leaves_cursor_unset() {
        let mut list = List::<i32>::new();
        list.rewind();
        assert_eq!(list.current(), None);
    }

    #[test]
    fn current_mut_grows_in_place() {
        let mut list = List::from_iter([1, 2]);
        list.rewind();
        list.advance();
        *list.current_mut().unwrap() += 10;
        assert_eq!(contents(&list), [1, 12]);
    }

    #[test]
    fn insert_before_in_the_middle() {
        let mut list = List::from_iter([1, 3]);
        list.rewind();
        list.advance();
        list.insert_before(2);
        assert_eq!(contents(&list), [1, 2, 3]);
        assert_eq!(list.current(), Some(&3));
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        list.check_invariants();
    }

    #[test]
    fn insert_before_the_front_moves_the_front() {
        let mut list = List::from_iter([1, 2]);
        list.rewind();
        list.insert_before(0);
        assert_eq!(contents(&list), [0, 1, 2]);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.current(), Some(&1));
        assert!(!list.current_is_front());
        list.check_invariants();
    }

    #[test]
    fn insert_after_the_back_moves_the_back() {
        let mut list = List::from_iter([1, 2]);
        list.rewind();
        list.advance();
        list.insert_after(3);
        assert_eq!(contents(&list), [1, 2, 3]);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.current(), Some(&2));
        assert!(!list.current_is_back());
        list.check_invariants();
    }

    #[test]
    fn insert_after_in_the_middle() {
        let mut list = List::from_iter([1, 3]);
        list.rewind();
        list.insert_after(2);
        assert_eq!(contents(&list), [1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        list.check_invariants();
    }

    #[test]
    fn insert_around_a_sole_element() {
        let mut list = List::from_iter([1]);
        list.rewind();
        list.insert_before(0);
        list.insert_after(2);
        assert_eq!(contents(&list), [0, 1, 2]);
        assert_eq!(list.current(), Some(&1));
        assert!(!list.current_is_front());
        assert!(!list.current_is_back());
        list.check_invariants();
    }

    #[test]
    fn remove_before_with_cursor_past_the_front() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.advance();
        // The removed neighbor is the front; the front moves to the
        // current element.
        assert_eq!(list.remove_before(), Some(1));
        assert_eq!(contents(&list), [2, 3]);
        assert!(list.current_is_front());
        list.check_invariants();
    }

    #[test]
    fn remove_before_with_cursor_at_the_front() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        // The removed neighbor wraps around to the back.
        assert_eq!(list.remove_before(), Some(3));
        assert_eq!(contents(&list), [1, 2]);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.current(), Some(&1));
        list.check_invariants();
    }

    #[test]
    fn remove_after_with_cursor_at_the_back() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.seek(2);
        // The removed neighbor wraps around to the front.
        assert_eq!(list.remove_after(), Some(1));
        assert_eq!(contents(&list), [2, 3]);
        assert_eq!(list.front(), Some(&2));
        assert!(list.current_is_back());
        list.check_invariants();
    }

    #[test]
    fn remove_after_before_the_back() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.advance();
        // The removed neighbor is the back; the back moves to the
        // current element.
        assert_eq!(list.remove_after(), Some(3));
        assert_eq!(contents(&list), [1, 2]);
        assert!(list.current_is_back());
        list.check_invariants();
    }

    #[test]
    fn remove_down_to_two_then_one() {
        let mut list = List::from_iter([1, 2]);
        list.rewind();
        assert_eq!(list.remove_after(), Some(2));
        assert_eq!(list.len(), 1);
        assert_eq!(list.current(), Some(&1));
        assert!(list.current_is_front());
        assert!(list.current_is_back());
        list.check_invariants();

        // From here on, cursor-relative removal is a no-op.
        assert_eq!(list.remove_before(), None);
        assert_eq!(list.remove_after(), None);
        assert_eq!(list.len(), 1);
        list.check_invariants();
    }

    #[test]
    fn singleton_cursor_removals_are_noops() {
        let mut list = List::from_iter([9]);
        list.rewind();
        assert_eq!(list.remove_before(), None);
        assert_eq!(list.remove_after(), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.current(), Some(&9));
        list.check_invariants();
    }

    #[test]
    fn pop_under_the_cursor_unsets_it() {
        let mut list = List::from_iter([1, 2]);
        list.rewind();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.current(), None);
        list.check_invariants();

        let mut list = List::from_iter([1, 2]);
        list.rewind();
        list.advance();
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.current(), None);
        list.check_invariants();
    }

    #[test]
    fn pop_elsewhere_keeps_the_cursor() {
        let mut list = List::from_iter([1, 2, 3]);
        list.rewind();
        list.advance();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.current(), Some(&2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.current(), Some(&2));
        list.check_invariants();
    }

    #[test]
    #[should_panic(expected = "No current element")]
    fn advance_without_current_panics() {
        let mut list = List::from_iter([1]);
        list.advance();
    }

    #[test]
    #[should_panic(expected = "No current element")]
    fn seek_without_current_panics() {
        let mut list = List::from_iter([1]);
        list.seek(0);
    }

    #[test]
    #[should_panic(expected = "No current element")]
    fn insert_before_without_current_panics() {
        let mut list = List::from_iter([1]);
        list.insert_before(0);
    }

    #[test]
    #[should_panic(expected = "No current element")]
    fn remove_after_without_current_panics() {
        let mut list = List::from_iter([1]);
        list.remove_after();
    }

    #[test]
    #[should_panic(expected = "No current element")]
    fn current_is_front_without_current_panics() {
        let list = List::from_iter([1]);
        list.current_is_front();
    }

    #[quickcheck]
    fn advancing_len_times_returns_to_front(values: Vec<i32>) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let mut list = List::from_iter(values);
        list.rewind();
        for _ in 0..list.len() {
            list.advance();
        }
        TestResult::from_bool(list.current_is_front())
    }

    #[quickcheck]
    fn seek_forward_then_back_is_identity(values: Vec<i32>, offset: u8) -> TestResult {
        if values.is_empty() {
            return TestResult::discard();
        }
        let mut list = List::from_iter(values);
        list.rewind();
        list.seek(offset as isize);
        list.seek(-(offset as isize));
        TestResult::from_bool(list.current_is_front())
    }
}
