//! One-dimensional algae growth, the classic client of the cursor list.
//!
//! A colony is a [`List`] of [`Alga`] cells. Each growth pass walks the
//! colony once with the cursor: a cell below the size cap grows in
//! place; a cell at the cap splits into a small and a medium cell whose
//! left-to-right order depends on the orientation of the parent. The
//! split exercises the whole cursor surface: it inserts on both sides
//! of the current cell, then steps past it and removes it behind the
//! cursor.

use std::fmt;

use tracing::debug;

use crate::List;

/// Size of a freshly budded small cell, and of the initial seed.
pub const SMALL_SIZE: i32 = 4;
/// Size of the medium cell produced by a split.
pub const MEDIUM_SIZE: i32 = 5;
/// A cell reaching this size splits instead of growing.
pub const MAX_SIZE: i32 = 9;

/// Which way a cell leans. Rendered as `-1` (left) and `1` (right) in
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
}

impl Orientation {
    /// The mirrored orientation.
    pub fn opposite(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    /// The historical numeric encoding: `-1` for left, `1` for right.
    pub fn signum(self) -> i32 {
        match self {
            Orientation::Left => -1,
            Orientation::Right => 1,
        }
    }
}

/// One algae cell: a size and an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alga {
    pub size: i32,
    pub orientation: Orientation,
}

impl Alga {
    pub fn new(size: i32, orientation: Orientation) -> Self {
        Self { size, orientation }
    }
}

/// Renders as `(size,orientation)` with the numeric orientation, e.g.
/// `(4,-1)`. This is the cell format of the report files.
impl fmt::Display for Alga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.size, self.orientation.signum())
    }
}

/// A new colony: one small, left-leaning cell.
///
/// # Examples
///
/// ```
/// use cursor_list::algae;
///
/// let colony = algae::colony();
/// assert_eq!(colony.to_string(), "Liste de 1 éléments : [ (4,-1) ]");
/// ```
pub fn colony() -> List<Alga> {
    let mut colony = List::new();
    colony.push_front(Alga::new(SMALL_SIZE, Orientation::Left));
    colony
}

/// Runs one growth pass over the colony.
///
/// Exactly the cells present at the start of the pass are visited; the
/// cells budded during the pass are only considered from the next pass
/// on. A visited cell below [`MAX_SIZE`] grows by one. A visited cell at
/// the cap is replaced by two cells: a small one leaning like its
/// parent and a medium one leaning the other way, the small one sitting
/// on the left for a left-leaning parent and on the right otherwise.
///
/// After the pass, no cell exceeds [`MAX_SIZE`] (checked in debug
/// builds).
///
/// # Examples
///
/// ```
/// use cursor_list::algae;
///
/// let mut colony = algae::colony();
/// for _ in 0..6 {
///     algae::grow(&mut colony);
/// }
/// // Five passes grow the seed to the cap; the sixth splits it.
/// assert_eq!(colony.to_string(), "Liste de 2 éléments : [ (4,-1) (5,1) ]");
/// ```
pub fn grow(colony: &mut List<Alga>) {
    colony.rewind();
    let originals = colony.len();
    for _ in 0..originals {
        let alga = *colony
            .current()
            .expect("Growth pass left the colony without a current cell");
        if alga.size >= MAX_SIZE {
            let small = Alga::new(SMALL_SIZE, alga.orientation);
            let medium = Alga::new(MEDIUM_SIZE, alga.orientation.opposite());
            if small.orientation == Orientation::Left {
                colony.insert_before(small);
                colony.insert_after(medium);
            } else {
                colony.insert_after(small);
                colony.insert_before(medium);
            }
            // Step onto the budded pair, then drop the parent behind.
            colony.advance();
            colony.remove_before();
            debug!(
                size = alga.size,
                orientation = alga.orientation.signum(),
                "alga split"
            );
        } else if let Some(current) = colony.current_mut() {
            current.size += 1;
        }
        colony.advance();
    }
    debug_assert!(max_size_respected(colony));
}

/// Returns `true` if no cell of the colony exceeds [`MAX_SIZE`].
pub fn max_size_respected(colony: &List<Alga>) -> bool {
    colony.iter().all(|alga| alga.size <= MAX_SIZE)
}
