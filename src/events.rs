//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{animation::AnimationManager, app::App};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a short timeout so playback keeps advancing while
/// no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    app.update();

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char(' ') => handle_space_events(app),
        KeyCode::Char('r') => handle_r_events(app),
        KeyCode::Char('l') => handle_l_events(app),
        _ => {}
    }
}

/// Handles space key presses by pausing or resuming every playback.
///
/// Playbacks are kept in step: if any of them is running they are all paused, otherwise they are
/// all resumed.
pub(crate) fn handle_space_events(app: &mut App) {
    let any_running = app.runs.iter().any(|run| !run.animation.is_paused());

    app.for_each_animation(|animation| {
        if animation.is_paused() != any_running {
            animation.toggle_pause();
        }
    });
}

/// Handles 'r' key presses by replaying every exploration from the start.
pub(crate) fn handle_r_events(app: &mut App) {
    app.for_each_animation(AnimationManager::reset);
}

/// Handles 'l' key presses by skipping to the end of every exploration.
pub(crate) fn handle_l_events(app: &mut App) {
    app.for_each_animation(AnimationManager::finish);
}
