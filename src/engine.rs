//! Breadth-first and depth-first maze exploration.
//!
//! Both strategies share a single traversal, [`explore`], which is generic over the [`Frontier`]
//! holding discovered but not yet expanded cells. A first-in first-out frontier yields
//! breadth-first search and a last-in first-out one yields depth-first search; nothing else
//! differs between the two.

use std::{collections::VecDeque, fmt};

use crate::{
    maze::Maze,
    trail::{self, PredecessorMap, ReconstructionError},
    types::Cell,
};

/// Container of cells waiting to be expanded.
///
/// The order in which [`Frontier::remove_next`] hands cells back is the whole difference between
/// the search strategies.
pub trait Frontier {
    /// Adds a freshly discovered cell.
    fn insert(&mut self, cell: Cell);

    /// Takes out the next cell to expand, or `None` once the frontier is exhausted.
    fn remove_next(&mut self) -> Option<Cell>;
}

/// First-in first-out frontier driving breadth-first search.
#[derive(Debug, Default)]
pub struct Fifo {
    /// Pending cells, oldest at the front.
    queue: VecDeque<Cell>,
}

impl Frontier for Fifo {
    fn insert(&mut self, cell: Cell) {
        self.queue.push_back(cell);
    }

    fn remove_next(&mut self) -> Option<Cell> {
        self.queue.pop_front()
    }
}

/// Last-in first-out frontier driving depth-first search.
#[derive(Debug, Default)]
pub struct Lifo {
    /// Pending cells, newest at the top.
    stack: Vec<Cell>,
}

impl Frontier for Lifo {
    fn insert(&mut self, cell: Cell) {
        self.stack.push(cell);
    }

    fn remove_next(&mut self) -> Option<Cell> {
        self.stack.pop()
    }
}

/// Available exploration strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Expands cells in discovery order. Finds a path with the fewest cells.
    BreadthFirst,
    /// Expands the most recently discovered cell first. Gives no length guarantee.
    DepthFirst,
}

impl Algorithm {
    /// Short upper-case name used in titles and reports.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BreadthFirst => "breadth-first search",
            Self::DepthFirst => "depth-first search",
        };
        f.write_str(name)
    }
}

/// Snapshot handed to the expansion hook after every expanded cell.
#[derive(Clone, Copy, Debug)]
pub struct Expansion<'trace> {
    /// The cell that was just expanded.
    pub current: Cell,
    /// Every expanded cell so far, `current` being the last one.
    pub explored: &'trace [Cell],
}

/// Result of a single search over a maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration {
    /// Strategy that produced this result.
    pub algorithm: Algorithm,
    /// Cells from start to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Cell>>,
    /// Cells in the order they were taken out of the frontier.
    pub trace: Vec<Cell>,
    /// Discovery links recorded during the search.
    pub predecessors: PredecessorMap,
}

impl Exploration {
    /// Returns `true` if a path to the goal was found.
    #[must_use]
    pub const fn reached_goal(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path, if there is one.
    #[must_use]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Explores `maze` from its start until the goal is taken out of the frontier or the frontier
/// runs dry.
///
/// A cell counts as visited once it has an entry in the [`PredecessorMap`], which happens as soon
/// as it is inserted into the frontier, so no cell is ever inserted twice and the trace never
/// holds duplicates. Neighbors are inserted in the maze's fixed up, down, left, right order.
///
/// `on_expand` runs once for every cell appended to the trace, after that cell's neighbors have
/// been inserted. This includes the goal: when the goal is reached, the hook is called for it
/// before the loop stops, so it always sees the complete trace and the number of calls equals the
/// trace length. A loop that stops on the goal before reporting it would show one step fewer.
/// The hook is the place to hang animation or logging and has no influence on the search itself.
///
/// # Errors
///
/// Returns a [`ReconstructionError`] if the recorded predecessors cannot be walked back from the
/// goal to the start, which would mean the traversal itself is broken.
pub fn explore<F, H>(
    maze: &Maze,
    algorithm: Algorithm,
    mut frontier: F,
    mut on_expand: H,
) -> Result<Exploration, ReconstructionError>
where
    F: Frontier,
    H: FnMut(Expansion<'_>),
{
    let start = maze.start();
    let goal = maze.goal();

    let mut predecessors = PredecessorMap::with_root(start);
    let mut trace = Vec::new();
    frontier.insert(start);

    while let Some(current) = frontier.remove_next() {
        trace.push(current);
        let reached = current == goal;

        if !reached {
            for next in maze.neighbors(current) {
                if predecessors.record(next, current) {
                    frontier.insert(next);
                }
            }
        }

        on_expand(Expansion {
            current,
            explored: &trace,
        });

        if reached {
            break;
        }
    }

    let path = trail::reconstruct_path(&predecessors, start, goal)?;

    Ok(Exploration {
        algorithm,
        path,
        trace,
        predecessors,
    })
}

/// Runs the given strategy over `maze`, reporting every expansion to `on_expand`.
///
/// # Errors
///
/// See [`explore`].
pub fn search<H>(
    maze: &Maze,
    algorithm: Algorithm,
    on_expand: H,
) -> Result<Exploration, ReconstructionError>
where
    H: FnMut(Expansion<'_>),
{
    match algorithm {
        Algorithm::BreadthFirst => explore(maze, algorithm, Fifo::default(), on_expand),
        Algorithm::DepthFirst => explore(maze, algorithm, Lifo::default(), on_expand),
    }
}

/// Breadth-first search from the maze start to its goal.
///
/// # Errors
///
/// See [`explore`].
pub fn breadth_first_search(maze: &Maze) -> Result<Exploration, ReconstructionError> {
    search(maze, Algorithm::BreadthFirst, |_| {})
}

/// Depth-first search from the maze start to its goal, using an explicit stack.
///
/// # Errors
///
/// See [`explore`].
pub fn depth_first_search(maze: &Maze) -> Result<Exploration, ReconstructionError> {
    search(maze, Algorithm::DepthFirst, |_| {})
}
