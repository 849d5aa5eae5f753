//! Predecessor bookkeeping and path reconstruction.

use std::collections::{hash_map::Entry, HashMap};

use thiserror::Error;

use crate::types::Cell;

/// Internal-consistency failures found while walking a [`PredecessorMap`].
///
/// Maps built by the search engine never trigger these; they guard against a hand-built or
/// corrupted map sending the backward walk astray.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructionError {
    /// The walk reached a cell with no recorded predecessor before reaching the start.
    #[error("predecessor chain from {goal} breaks at {at} before reaching the start")]
    BrokenChain {
        /// Cell the walk started from.
        goal: Cell,
        /// Cell whose predecessor is missing.
        at: Cell,
    },
    /// The walk did not reach the start within as many steps as the map has entries.
    #[error("predecessor chain from {goal} does not reach the start within {steps} steps")]
    Cycle {
        /// Cell the walk started from.
        goal: Cell,
        /// Number of steps taken before giving up.
        steps: usize,
    },
}

/// Record of which cell each visited cell was discovered from.
///
/// The root of a search maps to `None`. Every other entry points at the cell that was being
/// expanded when it was first inserted into the frontier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    /// Discovery links keyed by the discovered cell.
    links: HashMap<Cell, Option<Cell>>,
}

impl PredecessorMap {
    /// Creates a map holding only the search root.
    #[must_use]
    pub fn with_root(root: Cell) -> Self {
        let mut links = HashMap::new();
        let _ = links.insert(root, None);
        Self { links }
    }

    /// Records that `cell` was discovered while expanding `from`.
    ///
    /// Returns `true` if `cell` had not been visited yet. A cell that is already in the map,
    /// including the root, keeps its first predecessor and `false` is returned.
    pub fn record(&mut self, cell: Cell, from: Cell) -> bool {
        match self.links.entry(cell) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let _ = slot.insert(Some(from));
                true
            }
        }
    }

    /// Returns the predecessor of `cell`.
    ///
    /// The outer `Option` is `None` if `cell` was never visited; the inner one is `None` for the
    /// search root.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Option<Cell>> {
        self.links.get(&cell).copied()
    }

    /// Returns `true` if `cell` was visited.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.links.contains_key(&cell)
    }

    /// Number of visited cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if no cell was visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Rebuilds the path from `start` to `goal` out of a predecessor map.
///
/// Returns `Ok(None)` when `goal` was never visited, which is how an unreachable goal shows up.
/// Otherwise the predecessor links are followed backwards from `goal` until `start`, and the
/// collected chain is returned in start-to-goal order, both ends included.
///
/// # Errors
///
/// Returns a [`ReconstructionError`] if the chain breaks before reaching `start` or runs for
/// more steps than the map has entries, which can only happen with a malformed map.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    start: Cell,
    goal: Cell,
) -> Result<Option<Vec<Cell>>, ReconstructionError> {
    if !predecessors.contains(goal) {
        return Ok(None);
    }

    let limit = predecessors.len();
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        if path.len() > limit {
            return Err(ReconstructionError::Cycle {
                goal,
                steps: path.len(),
            });
        }

        current = predecessors
            .get(current)
            .flatten()
            .ok_or(ReconstructionError::BrokenChain { goal, at: current })?;
        path.push(current);
    }

    path.reverse();
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a map describing the chain `cells[0] <- cells[1] <- ...`.
    fn chain(cells: &[Cell]) -> PredecessorMap {
        let mut map = PredecessorMap::with_root(*cells.first().expect("chain needs a root"));
        for pair in cells.windows(2) {
            if let [from, cell] = pair {
                assert!(map.record(*cell, *from), "chain cells must be distinct");
            }
        }
        map
    }

    #[test]
    fn test_unvisited_goal_has_no_path() {
        let map = PredecessorMap::with_root(Cell::new(0, 0));

        assert_eq!(
            reconstruct_path(&map, Cell::new(0, 0), Cell::new(3, 3)),
            Ok(None)
        );
    }

    #[test]
    fn test_goal_equal_to_start() {
        let map = PredecessorMap::with_root(Cell::new(1, 1));

        assert_eq!(
            reconstruct_path(&map, Cell::new(1, 1), Cell::new(1, 1)),
            Ok(Some(vec![Cell::new(1, 1)]))
        );
    }

    #[test]
    fn test_path_is_start_to_goal() {
        let cells = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
        ];
        let map = chain(&cells);

        assert_eq!(
            reconstruct_path(&map, Cell::new(0, 0), Cell::new(2, 1)),
            Ok(Some(cells.to_vec()))
        );
    }

    #[test]
    fn test_path_to_intermediate_cell() {
        let cells = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        let map = chain(&cells);

        assert_eq!(
            reconstruct_path(&map, Cell::new(0, 0), Cell::new(0, 1)),
            Ok(Some(vec![Cell::new(0, 0), Cell::new(0, 1)]))
        );
    }

    #[test]
    fn test_broken_chain_is_reported() {
        let mut map = PredecessorMap::with_root(Cell::new(5, 5));
        assert!(map.record(Cell::new(0, 2), Cell::new(0, 1)));

        assert_eq!(
            reconstruct_path(&map, Cell::new(5, 5), Cell::new(0, 2)),
            Err(ReconstructionError::BrokenChain {
                goal: Cell::new(0, 2),
                at: Cell::new(0, 1),
            })
        );
    }

    #[test]
    fn test_root_reached_before_start_is_reported() {
        let map = chain(&[Cell::new(0, 0), Cell::new(0, 1)]);

        assert_eq!(
            reconstruct_path(&map, Cell::new(9, 9), Cell::new(0, 1)),
            Err(ReconstructionError::BrokenChain {
                goal: Cell::new(0, 1),
                at: Cell::new(0, 0),
            })
        );
    }

    #[test]
    fn test_cycle_is_reported() {
        let mut map = PredecessorMap::with_root(Cell::new(0, 0));
        assert!(map.record(Cell::new(1, 0), Cell::new(1, 1)));
        assert!(map.record(Cell::new(1, 1), Cell::new(1, 0)));

        assert!(matches!(
            reconstruct_path(&map, Cell::new(0, 0), Cell::new(1, 0)),
            Err(ReconstructionError::Cycle { .. })
        ));
    }

    #[test]
    fn test_map_queries() {
        let mut map = PredecessorMap::with_root(Cell::new(0, 0));
        assert!(map.record(Cell::new(0, 1), Cell::new(0, 0)));

        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
        assert_eq!(map.get(Cell::new(0, 0)), Some(None));
        assert_eq!(map.get(Cell::new(0, 1)), Some(Some(Cell::new(0, 0))));
        assert_eq!(map.get(Cell::new(2, 2)), None);
        assert!(!PredecessorMap::default().contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_record_keeps_first_predecessor() {
        let root = Cell::new(0, 0);
        let mut map = PredecessorMap::with_root(root);

        assert!(map.record(Cell::new(0, 1), root));
        assert!(!map.record(Cell::new(0, 1), Cell::new(1, 1)));
        assert!(!map.record(root, Cell::new(0, 1)));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(Cell::new(0, 1)), Some(Some(root)));
        assert_eq!(map.get(root), Some(None));
    }
}
