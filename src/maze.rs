//! Maze grid model.
//!
//! This module turns rows of maze characters into an immutable [`Maze`] that answers the three
//! queries the search engine is built on: bounds, passability and neighbor enumeration.

use thiserror::Error;

use crate::types::{Cell, Symbol};

/// Unit moves explored from every cell, in the order neighbors are produced: up, down, left,
/// right. Exploration tie-breaking in both search strategies depends on this order.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Reasons a grid is rejected when building a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMazeError {
    /// The grid has no rows at all.
    #[error("maze has no rows")]
    Empty,
    /// A row is not as long as the first one.
    #[error("row {row} has {found} cells but the first row has {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The grid does not contain exactly one start marker.
    #[error("maze must contain exactly one 'S' (start), found {0}")]
    StartCount(usize),
    /// The grid does not contain exactly one goal marker.
    #[error("maze must contain exactly one 'G' (goal), found {0}")]
    GoalCount(usize),
    /// The grid contains a character outside of `#`, `.`, `S` and `G`.
    #[error("unknown maze symbol {symbol:?} at {cell}")]
    UnknownSymbol {
        /// The unrecognized character.
        symbol: char,
        /// Where it was found.
        cell: Cell,
    },
}

/// Immutable, validated maze.
///
/// A maze is a rectangular grid of [`Symbol`]s holding exactly one start and one goal. Both are
/// located once at construction time and exposed through [`Maze::start`] and [`Maze::goal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Grid symbols stored row by row.
    grid: Vec<Vec<Symbol>>,
    /// Number of columns shared by every row.
    cols: usize,
    /// Location of the `S` marker.
    start: Cell,
    /// Location of the `G` marker.
    goal: Cell,
}

impl Maze {
    /// Builds a maze from rows of maze characters.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidMazeError`] if there are no rows, if the rows are not all the same
    /// length, if a character other than `#`, `.`, `S` or `G` shows up, or if the grid does not
    /// hold exactly one start and one goal.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidMazeError> {
        let expected = rows
            .first()
            .ok_or(InvalidMazeError::Empty)?
            .as_ref()
            .chars()
            .count();

        let mut grid = Vec::with_capacity(rows.len());
        let mut starts = Vec::new();
        let mut goals = Vec::new();

        for (row_idx, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(InvalidMazeError::RaggedRow {
                    row: row_idx,
                    expected,
                    found,
                });
            }

            let mut symbols = Vec::with_capacity(found);
            for (col_idx, character) in line.chars().enumerate() {
                let cell = Cell::new(row_idx, col_idx);
                let symbol =
                    Symbol::from_char(character).ok_or(InvalidMazeError::UnknownSymbol {
                        symbol: character,
                        cell,
                    })?;
                match symbol {
                    Symbol::Start => starts.push(cell),
                    Symbol::Goal => goals.push(cell),
                    Symbol::Wall | Symbol::Free => {}
                }
                symbols.push(symbol);
            }
            grid.push(symbols);
        }

        let start = match starts.as_slice() {
            [start] => *start,
            other => return Err(InvalidMazeError::StartCount(other.len())),
        };
        let goal = match goals.as_slice() {
            [goal] => *goal,
            other => return Err(InvalidMazeError::GoalCount(other.len())),
        };

        Ok(Self {
            grid,
            cols: expected,
            start,
            goal,
        })
    }

    /// Builds a maze from a multiline string, one row per line.
    ///
    /// # Errors
    ///
    /// Same as [`Maze::new`].
    pub fn parse(text: &str) -> Result<Self, InvalidMazeError> {
        let rows: Vec<&str> = text.lines().collect();
        Self::new(&rows)
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Location of the start marker.
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Location of the goal marker.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.goal
    }

    /// Returns `true` if the cell lies inside the grid.
    #[must_use]
    pub const fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols
    }

    /// Returns the symbol stored at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn symbol(&self, cell: Cell) -> Option<Symbol> {
        self.grid.get(cell.row)?.get(cell.col).copied()
    }

    /// Returns `true` if the cell can be walked through.
    ///
    /// Start, goal and free cells are all passable. Cells outside the grid are reported as not
    /// passable.
    #[must_use]
    pub fn passable(&self, cell: Cell) -> bool {
        self.symbol(cell).is_some_and(Symbol::is_passable)
    }

    /// Yields the passable cells one unit move away from `cell`.
    ///
    /// Neighbors come out in the fixed order up, down, left, right, skipping moves that leave the
    /// grid or hit a wall. Since the maze never changes, calling this again yields the same cells
    /// in the same order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS.iter().filter_map(move |&(d_row, d_col)| {
            cell.offset(d_row, d_col)
                .filter(|&next| self.in_bounds(next) && self.passable(next))
        })
    }

    /// Yields every cell of the grid with its symbol, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Symbol)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(move |(col_idx, &symbol)| (Cell::new(row_idx, col_idx), symbol))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_locates_start_and_goal() {
        let maze = Maze::new(&["#S#", "...", "#G#"]).expect("valid maze should build");

        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 3);
        assert_eq!(maze.start(), Cell::new(0, 1));
        assert_eq!(maze.goal(), Cell::new(2, 1));
    }

    #[test]
    fn test_new_empty_grid() {
        let rows: [&str; 0] = [];
        assert_eq!(Maze::new(&rows), Err(InvalidMazeError::Empty));
    }

    #[test]
    fn test_new_two_starts() {
        assert_eq!(
            Maze::new(&["S.S", "..G"]),
            Err(InvalidMazeError::StartCount(2))
        );
    }

    #[test]
    fn test_new_missing_start() {
        assert_eq!(
            Maze::new(&["...", "..G"]),
            Err(InvalidMazeError::StartCount(0))
        );
    }

    #[test]
    fn test_new_missing_goal() {
        assert_eq!(
            Maze::new(&["S..", "..."]),
            Err(InvalidMazeError::GoalCount(0))
        );
    }

    #[test]
    fn test_new_two_goals() {
        assert_eq!(Maze::new(&["SGG"]), Err(InvalidMazeError::GoalCount(2)));
    }

    #[test]
    fn test_new_unequal_rows() {
        assert_eq!(
            Maze::new(&["###", "##"]),
            Err(InvalidMazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_new_unknown_symbol() {
        assert_eq!(
            Maze::new(&["S.x", "..G"]),
            Err(InvalidMazeError::UnknownSymbol {
                symbol: 'x',
                cell: Cell::new(0, 2),
            })
        );
    }

    #[test]
    fn test_parse_ignores_trailing_newline() {
        let maze = Maze::parse("S.\n.G\n").expect("valid maze should parse");

        assert_eq!(maze.rows(), 2);
        assert_eq!(maze.goal(), Cell::new(1, 1));
    }

    #[test]
    fn test_in_bounds() {
        let maze = Maze::new(&["S.G"]).expect("valid maze should build");

        assert!(maze.in_bounds(Cell::new(0, 0)));
        assert!(maze.in_bounds(Cell::new(0, 2)));
        assert!(!maze.in_bounds(Cell::new(0, 3)));
        assert!(!maze.in_bounds(Cell::new(1, 0)));
    }

    #[test]
    fn test_passable() {
        let maze = Maze::new(&["S#G", "..."]).expect("valid maze should build");

        assert!(maze.passable(Cell::new(0, 0)));
        assert!(!maze.passable(Cell::new(0, 1)));
        assert!(maze.passable(Cell::new(0, 2)));
        assert!(maze.passable(Cell::new(1, 1)));
        assert!(!maze.passable(Cell::new(5, 5)));
    }

    #[test]
    fn test_neighbors_order_is_up_down_left_right() {
        let maze = Maze::new(&["...", ".S.", "..G"]).expect("valid maze should build");
        let neighbors: Vec<Cell> = maze.neighbors(Cell::new(1, 1)).collect();

        assert_eq!(
            neighbors,
            vec![
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_neighbors_stay_inside_the_grid() {
        let maze = Maze::new(&["S..", "..G"]).expect("valid maze should build");

        for (cell, _) in maze.cells() {
            assert!(maze.neighbors(cell).all(|next| maze.in_bounds(next)));
        }
        assert_eq!(
            maze.neighbors(Cell::new(1, 2)).collect::<Vec<_>>(),
            vec![Cell::new(0, 2), Cell::new(1, 1)]
        );
        assert_eq!(maze.neighbors(Cell::new(4, 4)).count(), 0);
    }

    #[test]
    fn test_neighbors_skip_walls_and_edges() {
        let maze = Maze::new(&["S#", ".G"]).expect("valid maze should build");
        let neighbors: Vec<Cell> = maze.neighbors(Cell::new(0, 0)).collect();

        assert_eq!(neighbors, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn test_neighbors_are_restartable() {
        let maze = Maze::new(&[".S.", "..G"]).expect("valid maze should build");
        let first: Vec<Cell> = maze.neighbors(Cell::new(0, 1)).collect();
        let second: Vec<Cell> = maze.neighbors(Cell::new(0, 1)).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_cells_visits_grid_in_row_order() {
        let maze = Maze::new(&["S#", ".G"]).expect("valid maze should build");
        let cells: Vec<(Cell, Symbol)> = maze.cells().collect();

        assert_eq!(
            cells,
            vec![
                (Cell::new(0, 0), Symbol::Start),
                (Cell::new(0, 1), Symbol::Wall),
                (Cell::new(1, 0), Symbol::Free),
                (Cell::new(1, 1), Symbol::Goal),
            ]
        );
    }
}
