//! Breadth-first and depth-first exploration of grid mazes.
//!
//! A maze is a rectangular grid of `#` walls, `.` free cells, one `S` start and one `G` goal.
//! [`maze::Maze`] validates such a grid and answers bounds, passability and neighbor queries;
//! [`engine`] explores it with either search strategy and hands back the order in which cells
//! were expanded along with the path found, rebuilt by [`trail`]. The remaining modules are the
//! command-line front end: a plain text report and an animated terminal view.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io::{self, Write as _};

use color_eyre::eyre::{Result, WrapErr as _};

pub mod engine;
pub mod maze;
pub mod trail;
pub mod types;

mod animation;
mod app;
mod cli;
mod events;
mod file_loader;
mod logging;
mod map;
mod report;
mod ui;

pub use cli::{AlgorithmChoice, Cli};

use crate::{
    app::App,
    engine::{Algorithm, Exploration},
    map::Map,
    maze::Maze,
};

/// Runs the program as configured on the command line.
///
/// The maze is loaded from the given file or taken from the built-in default, explored with every
/// requested strategy, and the results are either printed as a plain report or replayed in the
/// animated terminal view.
///
/// # Errors
///
/// This function may return errors if:
/// - A logger was already installed
/// - The maze file cannot be read or does not describe a valid maze
/// - The terminal cannot be drawn to or written to
pub fn run(cli: Cli) -> Result<()> {
    let logger = logging::init(logging::level_for_verbosity(cli.verbose))?;

    let map = match &cli.file {
        Some(path) => file_loader::load_map(path)?,
        None => Map::default(),
    };
    let maze = map
        .maze()
        .wrap_err_with(|| format!("maze {} is not valid", map.key))?;
    log::info!(
        "maze {} is {}x{}, start {} goal {}",
        map.key,
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.goal()
    );

    let explorations = cli
        .algo
        .algorithms()
        .into_iter()
        .map(|algorithm| explore_logged(&maze, algorithm))
        .collect::<Result<Vec<_>>>()?;

    if cli.animate {
        logger.hold();
        let mut terminal = ratatui::init();
        let result = App::new(map.key, maze, explorations, cli.delay).run(&mut terminal);
        ratatui::restore();
        logger.release_to_stderr()?;

        return result;
    }

    let mut stdout = io::stdout().lock();
    for exploration in &explorations {
        writeln!(
            stdout,
            "{}",
            report::render(&maze, exploration, !cli.no_color)
        )?;
    }

    Ok(())
}

/// Runs one strategy, logging each expansion at trace level and the outcome at info level.
fn explore_logged(maze: &Maze, algorithm: Algorithm) -> Result<Exploration> {
    let exploration = engine::search(maze, algorithm, |step| {
        log::trace!(
            "{}: expanded {} ({} so far)",
            algorithm.abbreviation(),
            step.current,
            step.explored.len()
        );
    })?;
    log::info!(
        "{}: {}",
        algorithm.abbreviation(),
        report::summary(&exploration)
    );

    Ok(exploration)
}
