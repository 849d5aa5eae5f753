//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::engine::Algorithm;

/// Default pause between two animation frames, in seconds.
const DEFAULT_DELAY: &str = "0.03";

/// Explore a grid maze with breadth-first and depth-first search.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Search strategy to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algo: AlgorithmChoice,
    /// Maze file to load; the built-in maze is used when omitted.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Replay the exploration step by step in an interactive terminal view.
    #[arg(long)]
    pub animate: bool,
    /// Seconds to wait between two animation steps.
    #[arg(long, value_name = "SECONDS", default_value = DEFAULT_DELAY, value_parser = parse_delay)]
    pub delay: Duration,
    /// Print the plain report without colors.
    #[arg(long)]
    pub no_color: bool,
    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Strategies selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Breadth-first search only.
    Bfs,
    /// Depth-first search only.
    Dfs,
    /// Breadth-first search, then depth-first search.
    Both,
}

impl AlgorithmChoice {
    /// Expands the choice into the strategies to run, in order.
    #[must_use]
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Self::Bfs => vec![Algorithm::BreadthFirst],
            Self::Dfs => vec![Algorithm::DepthFirst],
            Self::Both => vec![Algorithm::BreadthFirst, Algorithm::DepthFirst],
        }
    }
}

/// Parses a non-negative number of seconds into a [`Duration`].
fn parse_delay(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .parse()
        .map_err(|err| format!("`{raw}` is not a number of seconds: {err}"))?;

    Duration::try_from_secs_f64(seconds)
        .map_err(|err| format!("`{raw}` is not a usable delay: {err}"))
}
