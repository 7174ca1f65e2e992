//! This crate provides a circular doubly-linked sequence with a
//! container-managed cursor, backed by a generational slot arena.
//!
//! The [`List`] allows inserting and removing elements at both ends and
//! around its cursor in constant time. In compromise, reaching an
//! arbitrary position takes *O*(*n*) cursor steps.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.rewind(); // the cursor starts unset; place it on the front
//! list.advance(); // current = 2
//!
//! list.insert_before(10); // [1, 10, 2, 3, 4], still at 2
//! assert_eq!(list.current(), Some(&2));
//!
//! assert_eq!(list.remove_after(), Some(3)); // [1, 10, 2, 4]
//! assert_eq!(list.to_string(), "Liste de 4 éléments : [ 1 10 2 4 ]");
//! ```
//!
//! # Memory Layout
//!
//! Nodes live in an arena of slots and refer to their ring neighbors by
//! slot id, never by pointer:
//!
//! ```text
//!      head: 0            tail: 2
//!        │                  │
//!        ▼                  ▼
//! ┌──────────────┬──────────────┬──────────────┐
//! │ slot 0       │ slot 1       │ slot 2       │   arena (Vec of slots)
//! │ value: A     │ value: B     │ value: C     │
//! │ next: 1      │ next: 2      │ next: 0      │
//! │ prev: 2      │ prev: 0      │ prev: 1      │
//! └──────────────┴──────────────┴──────────────┘
//!                       ▲
//!                       │
//!                   cursor: 1
//! ```
//!
//! The links wrap in both directions, so a single node refers to itself
//! and every node always has a live predecessor and successor. The
//! `List` additionally tracks a logical head and tail (the ring itself
//! has no distinguished start) and a length that is bookkept on every
//! mutation.
//!
//! Freed slots are recycled through a free list, and every id carries
//! the generation of its slot: an id that survives the removal of its
//! node goes stale instead of silently pointing at whatever reuses the
//! slot. This is what lets the cursor be plain data inside the
//! container: no borrows are held across mutations, and no `unsafe`
//! is needed anywhere.
//!
//! # The Cursor
//!
//! The cursor designates the "current" element and is driven explicitly:
//! [`rewind`](List::rewind) places it on the front element,
//! [`advance`](List::advance), [`retreat`](List::retreat) and
//! [`seek`](List::seek) move it around the ring (wrapping in both
//! directions), and the relative operations
//! [`insert_before`](List::insert_before),
//! [`insert_after`](List::insert_after),
//! [`remove_before`](List::remove_before) and
//! [`remove_after`](List::remove_after) edit the neighborhood of the
//! current element in *O*(1). See [`list::cursor`] for the full rules,
//! including the one deliberate asymmetry: cursor-relative removal
//! spares a sole element, while [`pop_front`](List::pop_front) and
//! [`pop_back`](List::pop_back) empty the list.
//!
//! # Iteration
//!
//! [`Iter`] walks the elements in front-to-back order as a double-ended,
//! exact-size, fused iterator, independently of the cursor. Consuming
//! the list yields [`IntoIter`], which drains front to back.
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Printing
//!
//! `List<T: Display>` renders as `Liste de <N> éléments : [ e1 ... eN ]`,
//! the report format of the [`algae`] growth simulation that ships with
//! the crate (`algues` binary).

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;

mod arena;

pub mod algae;
pub mod list;
