//! Value types shared by the maze model, the search engine and the renderers.

use std::fmt;

/// Position of a single square in the maze grid.
///
/// Cells are addressed by row first and column second, both counted from the top-left corner of
/// the grid. The type is a plain value: equality, ordering and hashing are all by value, which is
/// what lets it key the predecessor map and the visited set of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row index, growing downwards.
    pub row: usize,
    /// Zero-based column index, growing to the right.
    pub col: usize,
}

impl Cell {
    /// Creates a cell from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the cell displaced by the given signed offsets, or `None` if either coordinate
    /// would become negative.
    ///
    /// The upper bound is not checked here since the cell type knows nothing about the grid it
    /// lives in; see [`Maze::in_bounds`](crate::maze::Maze::in_bounds) for that.
    #[must_use]
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };

        Some(Self { row, col })
    }

    /// Returns `true` if `other` lies exactly one unit away along exactly one axis.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single maze square.
///
/// This enumeration maps one-to-one onto the characters accepted in maze files. Every symbol
/// except [`Symbol::Wall`] can be walked through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Impassable square, written as `#`.
    Wall,
    /// Open square, written as `.`.
    Free,
    /// The single square the exploration starts from, written as `S`.
    Start,
    /// The single square the exploration is looking for, written as `G`.
    Goal,
}

impl Symbol {
    /// Parses a maze file character into a symbol.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Free),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            _ => None,
        }
    }

    /// Returns the maze file character for this symbol.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Free => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    /// Returns `true` for every symbol but [`Symbol::Wall`].
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
