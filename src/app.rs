//! Core application state and loop for the animated maze view.

use std::{io, time::Duration};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{animation::AnimationManager, engine::Exploration, events, maze::Maze, ui};

/// One finished search together with its playback state.
#[derive(Clone, Debug)]
pub(crate) struct Run {
    /// The search result being replayed.
    pub(crate) exploration: Exploration,
    /// Playback state of the exploration trace.
    pub(crate) animation: AnimationManager,
}

/// Application state container for the animated view.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
#[derive(Clone, Debug)]
pub(crate) struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Display name of the maze.
    pub(crate) title: String,
    /// The maze every run explored.
    pub(crate) maze: Maze,
    /// One entry per search, shown side by side.
    pub(crate) runs: Vec<Run>,
}

impl App {
    /// Creates the application state, replaying each exploration with `delay` between steps.
    pub(crate) fn new(
        title: String,
        maze: Maze,
        explorations: Vec<Exploration>,
        delay: Duration,
    ) -> Self {
        let runs = explorations
            .into_iter()
            .map(|exploration| Run {
                animation: AnimationManager::new(exploration.trace.clone(), delay),
                exploration,
            })
            .collect();

        Self {
            exit: false,
            title,
            maze,
            runs,
        }
    }

    /// Advances every playback.
    pub(crate) fn update(&mut self) {
        for run in &mut self.runs {
            run.animation.update();
        }
    }

    /// Applies `action` to the playback of every run.
    pub(crate) fn for_each_animation<F>(&mut self, mut action: F)
    where
        F: FnMut(&mut AnimationManager),
    {
        for run in &mut self.runs {
            action(&mut run.animation);
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current state, handles user input and advances the playback. The
    /// loop continues until the exit condition is `true`, after which the function returns to the
    /// call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
