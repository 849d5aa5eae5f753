//! Map data and management module.
//!
//! This module contains the `Map` struct, which pairs raw maze rows with a display name, and the
//! built-in maze used when no file is given on the command line.

use crate::maze::{InvalidMazeError, Maze};

/// Maze rows as read from their source, before validation.
///
/// This structure represents a maze the way it was loaded, either from a file or from the built-in
/// default. It carries a display name so the renderers can title their output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Map {
    /// Display name of the map.
    ///
    /// This field holds the file stem of the maze file, or `Default` for the built-in maze.
    pub(crate) key: String,
    /// Map content as rows of strings.
    ///
    /// Each string is one row of the maze, without its line terminator.
    pub(crate) data: Vec<String>,
}

impl Default for Map {
    fn default() -> Self {
        Self::new("Default", DEFAULT_MAP)
    }
}

impl Map {
    /// Builds a new map from a name and multiline string content.
    ///
    /// Trailing line terminators are dropped; the rows themselves are kept as they are and only
    /// checked once [`Map::maze`] is called.
    pub(crate) fn new<K: Into<String>>(key: K, data: &str) -> Self {
        Self {
            key: key.into(),
            data: data.lines().map(str::to_owned).collect(),
        }
    }

    /// Validates the rows and builds the maze they describe.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidMazeError`] if the rows do not form a valid maze.
    pub(crate) fn maze(&self) -> Result<Maze, InvalidMazeError> {
        Maze::new(&self.data)
    }
}

/// Default maze used when no file is selected.
const DEFAULT_MAP: &str = "\
#####################
#S....#.......#.....#
#.###.#.#####.#.###.#
#.#...#.#...#...#...#
#.#.###.#.#.#####.###
#.#.....#.#.....#...#
#.#######.#####.###.#
#.......#.....#.#...#
#######.#####.#.#.###
#.............#....G#
#####################";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine, types::Cell};

    #[test]
    fn test_map_default() {
        let map = Map::default();

        assert_eq!(map.key, "Default");
        assert_eq!(map.data.len(), 11);
        assert!(map
            .data
            .first()
            .expect("Map should have at least one row")
            .starts_with("###"));
    }

    #[test]
    fn test_default_map_is_solvable() {
        let maze = Map::default().maze().expect("default map should be valid");

        assert_eq!(maze.start(), Cell::new(1, 1));
        assert_eq!(maze.goal(), Cell::new(9, 19));

        let exploration = engine::breadth_first_search(&maze).expect("search should succeed");
        assert_eq!(exploration.path_len(), Some(47));
    }

    #[test]
    fn test_map_new_drops_line_terminators() {
        let map = Map::new("test", "S.\n.G\n");

        assert_eq!(map.key, "test");
        assert_eq!(map.data, vec!["S.", ".G"]);
    }

    #[test]
    fn test_map_new_empty_data() {
        let map = Map::new("empty", "");

        assert!(map.data.is_empty());
        assert_eq!(map.maze(), Err(InvalidMazeError::Empty));
    }

    #[test]
    fn test_map_invalid_rows() {
        let map = Map::new("ragged", "S.G\n..");

        assert!(matches!(
            map.maze(),
            Err(InvalidMazeError::RaggedRow { row: 1, .. })
        ));
    }
}
