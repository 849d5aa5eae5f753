//! Plain text rendering of a finished exploration.

use std::{collections::HashSet, fmt};

use ratatui::crossterm::style::Stylize as _;

use crate::{
    engine::Exploration,
    maze::Maze,
    types::{Cell, Symbol},
};

/// What a single maze square shows once an exploration is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Glyph {
    /// The start marker.
    Start,
    /// The goal marker.
    Goal,
    /// A square on the reconstructed path.
    Path,
    /// A square the search expanded but that is not on the path.
    Explored,
    /// An impassable square.
    Wall,
    /// An open square the search never expanded.
    Free,
}

impl Glyph {
    /// Picks the glyph for `cell`, markers first, then path, then exploration.
    pub(crate) fn of(
        maze: &Maze,
        cell: Cell,
        path: &HashSet<Cell>,
        explored: &HashSet<Cell>,
    ) -> Self {
        match maze.symbol(cell) {
            Some(Symbol::Start) => Self::Start,
            Some(Symbol::Goal) => Self::Goal,
            Some(Symbol::Wall) | None => Self::Wall,
            Some(Symbol::Free) if path.contains(&cell) => Self::Path,
            Some(Symbol::Free) if explored.contains(&cell) => Self::Explored,
            Some(Symbol::Free) => Self::Free,
        }
    }

    /// Character drawn for this glyph.
    pub(crate) const fn symbol(self) -> &'static str {
        match self {
            Self::Start => "S",
            Self::Goal => "G",
            Self::Path => "*",
            Self::Explored => "o",
            Self::Wall => "#",
            Self::Free => ".",
        }
    }

    /// Writes this glyph, with terminal colors when `colored` is set.
    fn write_to(self, f: &mut fmt::Formatter<'_>, colored: bool) -> fmt::Result {
        let symbol = self.symbol();
        if !colored {
            return f.write_str(symbol);
        }

        let styled = match self {
            Self::Start => symbol.green().bold(),
            Self::Goal => symbol.red().bold(),
            Self::Path => symbol.yellow().bold(),
            Self::Explored => symbol.cyan(),
            Self::Wall => symbol.dark_grey(),
            Self::Free => symbol.stylize(),
        };
        write!(f, "{styled}")
    }
}

/// One-line description of an exploration's outcome.
pub(crate) fn summary(exploration: &Exploration) -> String {
    let explored = exploration.trace.len();
    exploration.path_len().map_or_else(
        || format!("explored {explored} cells, goal unreachable"),
        |length| format!("explored {explored} cells, path of {length} cells"),
    )
}

/// The maze with an exploration and its path laid over it, preceded by a headline.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Report<'run> {
    /// The explored maze.
    maze: &'run Maze,
    /// The search result drawn over it.
    exploration: &'run Exploration,
    /// Whether to emit terminal colors.
    colored: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: HashSet<Cell> = self.exploration.path.iter().flatten().copied().collect();
        let explored: HashSet<Cell> = self.exploration.trace.iter().copied().collect();

        writeln!(
            f,
            "{} ({}): {}",
            self.exploration.algorithm.abbreviation(),
            self.exploration.algorithm,
            summary(self.exploration)
        )?;

        for row in 0..self.maze.rows() {
            for col in 0..self.maze.cols() {
                Glyph::of(self.maze, Cell::new(row, col), &path, &explored)
                    .write_to(f, self.colored)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Draws the maze with the exploration and path laid over it, preceded by a headline.
pub(crate) fn render(maze: &Maze, exploration: &Exploration, colored: bool) -> String {
    Report {
        maze,
        exploration,
        colored,
    }
    .to_string()
}
