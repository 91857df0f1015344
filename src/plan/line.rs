//! Line extraction: one row or column, ordered for a direction.
//!
//! Every downstream planner works on a single "line" — the occupied cells of
//! a row (horizontal directions) or column (vertical directions) sorted so
//! that index 0 is the tile closest to the wall tiles travel toward. That
//! ordering convention is load-bearing: the merge planner scans pairs front
//! to back, and the alignment planner packs ranks against index 0.

use smallvec::SmallVec;

use crate::core::{Axis, Board, Direction, Tile};

/// A sorted line of tiles. Inline capacity covers the default board size.
pub type LineBuf = SmallVec<[Tile; 8]>;

/// Extract the occupied cells of line `index`, sorted leading edge first.
///
/// For vertical directions the line is the column with x = `index`; for
/// horizontal directions it is the row with y = `index`. Panics if `index`
/// is outside the board.
///
/// ```
/// use slide_merge::core::{Board, Direction};
/// use slide_merge::plan::extract_line;
///
/// let mut board = Board::new(4);
/// board.insert(2, 3, 0);
/// board.insert(4, 1, 0);
///
/// // Swiping left: index 0 is the tile nearest x = 0.
/// let line = extract_line(&board, Direction::Left, 0);
/// assert_eq!(line[0].value, 4);
/// assert_eq!(line[1].value, 2);
///
/// // Swiping right reverses the order.
/// let line = extract_line(&board, Direction::Right, 0);
/// assert_eq!(line[0].value, 2);
/// ```
#[must_use]
pub fn extract_line(board: &Board, direction: Direction, index: usize) -> LineBuf {
    assert!(
        index < board.size(),
        "line index {index} outside a {0}x{0} board",
        board.size()
    );

    let axis = direction.axis();
    let mut line: LineBuf = board
        .tiles()
        .filter(|tile| match axis {
            Axis::Horizontal => tile.y == index,
            Axis::Vertical => tile.x == index,
        })
        .copied()
        .collect();

    // At rest, positions within a line are unique, so this order is total
    // and independent of the board's internal iteration order.
    line.sort_unstable_by_key(|tile| match axis {
        Axis::Horizontal => tile.x,
        Axis::Vertical => tile.y,
    });
    if !direction.is_leading() {
        line.reverse();
    }
    line
}
