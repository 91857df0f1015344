//! Swipe directions and their geometry.
//!
//! A move is parameterized by one of four symbolic directions. Rather than a
//! per-direction dispatch table of filter/sort closures, each direction is
//! reduced to two facts: which [`Axis`] tiles travel along, and whether they
//! travel toward the low-index wall ([`Direction::is_leading`]). All line
//! extraction and alignment is generic over that pair, which keeps the four
//! directions symmetric by construction.
//!
//! [`Direction::from_drag`] classifies a raw 2D drag vector for hosts that
//! feed gestures straight in: horizontal wins when `|dx| > |dy|`, ties go
//! vertical.

use serde::{Deserialize, Serialize};

/// One of the four swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The axis tiles travel along for a given direction.
///
/// Horizontal directions slide tiles within a row (the x coordinate changes);
/// vertical directions slide tiles within a column (the y coordinate changes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The axis tiles travel along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Whether tiles travel toward the low-index wall.
    ///
    /// Up and left pack tiles against coordinate 0; down and right pack them
    /// against coordinate `size - 1`.
    #[must_use]
    pub const fn is_leading(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// Classify a raw drag vector into a direction.
    ///
    /// Horizontal wins only when `|dx| > |dy|`; a tie is classified as
    /// vertical. The sign convention is screen-style: positive `dx` is right,
    /// positive `dy` is down.
    ///
    /// ```
    /// use slide_merge::core::Direction;
    ///
    /// assert_eq!(Direction::from_drag(30.0, -10.0), Direction::Right);
    /// assert_eq!(Direction::from_drag(-5.0, 5.0), Direction::Down); // tie -> vertical
    /// ```
    #[must_use]
    pub fn from_drag(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{name}")
    }
}
