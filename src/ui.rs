//! User interface rendering for the animated maze view.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    app::{App, Run},
    maze::Maze,
    report,
    types::{Cell, Symbol},
};

/// Updates the application UI based on the persistent state.
///
/// This function lays out one bordered pane per run, side by side, above a tooltip listing the
/// key bindings.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame<'_>) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Panes
        Constraint::Length(2), // Tooltip block
    ])
    .split(frame.area());

    let panes_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get pane area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let panes = Layout::horizontal(vec![Constraint::Fill(1); app.runs.len()]).split(panes_area);
    for (run, area) in app.runs.iter().zip(panes.iter()) {
        run_pane(frame, &app.maze, &app.title, run, *area)?;
    }

    let tooltip_block = Block::bordered()
        .title("(q) quit / (space) pause / (r) replay / (l) skip to end")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame<'_>) {
    frame.render_widget(Clear, frame.area());
}

/// Renders a single run: the maze with its exploration overlaid, and a status line.
///
/// Walls, markers and explored cells are drawn as separate [`Points`] layers on a [`Canvas`]
/// centered in the pane. The path is only drawn once playback has revealed the whole trace.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn run_pane(
    frame: &mut Frame<'_>,
    maze: &Maze,
    title: &str,
    run: &Run,
    area: Rect,
) -> Result<()> {
    let exploration = &run.exploration;
    let animation = &run.animation;

    let block = Block::bordered()
        .title(format!(
            "{} / {title}",
            exploration.algorithm.abbreviation()
        ))
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(area);
    frame.render_widget(block, area);

    let inner_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner_space);
    let maze_area = *inner_layout
        .first()
        .ok_or_eyre("failed to get maze area from layout")?;
    let status_area = *inner_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let space = centered(maze_area, maze)?;

    // Pre-compute screen coordinates to handle errors before closures
    let walls: Vec<Cell> = maze
        .cells()
        .filter(|&(_, symbol)| symbol == Symbol::Wall)
        .map(|(cell, _)| cell)
        .collect();
    let wall_coords = transform_maze_to_screen_coords(&walls, maze)?;
    let explored_coords = transform_maze_to_screen_coords(animation.explored(), maze)?;
    let path_coords = if animation.is_finished() {
        transform_maze_to_screen_coords(exploration.path.as_deref().unwrap_or_default(), maze)?
    } else {
        Vec::new()
    };
    let current_coords = if animation.is_finished() {
        Vec::new()
    } else {
        transform_maze_to_screen_coords(animation.current().as_slice(), maze)?
    };
    let start_coords = transform_maze_to_screen_coords(&[maze.start()], maze)?;
    let goal_coords = transform_maze_to_screen_coords(&[maze.goal()], maze)?;

    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: Color::Green,
            });
            ctx.draw(&Points {
                coords: &explored_coords,
                color: Color::Blue,
            });
            ctx.draw(&Points {
                coords: &path_coords,
                color: Color::Yellow,
            });
            ctx.draw(&Points {
                coords: &current_coords,
                color: Color::Red,
            });
            ctx.draw(&Points {
                coords: &start_coords,
                color: Color::Magenta,
            });
            ctx.draw(&Points {
                coords: &goal_coords,
                color: Color::Cyan,
            });
        });
    frame.render_widget(canvas, space);

    let status = if animation.is_finished() {
        report::summary(exploration)
    } else {
        format!(
            "exploring {}/{}",
            animation.explored().len(),
            exploration.trace.len()
        )
    };
    let status = if animation.is_paused() {
        format!("{status} [paused]")
    } else {
        status
    };
    frame.render_widget(Line::raw(status).centered(), status_area);

    Ok(())
}

/// Returns a maze-sized rectangle centered within `area`, clipped to it.
///
/// # Errors
///
/// This function may return errors if the maze dimensions do not fit terminal coordinates.
pub(crate) fn centered(area: Rect, maze: &Maze) -> Result<Rect> {
    let rows = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(maze.rows())?),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze rows from vertical layout")?;

    Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(maze.cols())?),
        Constraint::Min(0),
    ])
    .split(rows)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze cells to canvas coordinates (x, y) centered on the origin:
/// x = col - (cols - 1) / 2 and y = (rows - 1) / 2 - row, so the first row ends up at the top.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_maze_to_screen_coords(
    cells: &[Cell],
    maze: &Maze,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(maze.rows())?);
    let cols_n = f64::from(u16::try_from(maze.cols())?);

    cells
        .iter()
        .map(|cell| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(cell.row)?);
            let screen_x = f64::from(u16::try_from(cell.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{engine, map::Map};

    /// Creates a test app over the built-in maze running both strategies.
    fn create_test_app() -> App {
        let map = Map::default();
        let maze = map.maze().expect("default map should be valid");
        let explorations = vec![
            engine::breadth_first_search(&maze).expect("search should succeed"),
            engine::depth_first_search(&maze).expect("search should succeed"),
        ];
        App::new(map.key, maze, explorations, Duration::from_secs(60))
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Collects the rendered buffer into a single string.
    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_initial_state() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing initial state should succeed");
        let text = buffer_text(&terminal);
        assert!(text.contains("BFS / Default"));
        assert!(text.contains("DFS / Default"));
        assert!(text.contains("exploring 0/"));
    }

    #[test]
    fn test_draw_finished_state() {
        let mut app = create_test_app();
        app.for_each_animation(crate::animation::AnimationManager::finish);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing finished state should succeed");
        assert!(buffer_text(&terminal).contains("path of 47 cells"));
    }

    #[test]
    fn test_draw_paused_state() {
        let mut app = create_test_app();
        app.for_each_animation(crate::animation::AnimationManager::toggle_pause);
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing paused state should succeed");
        assert!(buffer_text(&terminal).contains("[paused]"));
    }

    #[test]
    fn test_draw_in_tiny_terminal() {
        let app = create_test_app();
        let mut terminal =
            Terminal::new(TestBackend::new(10, 4)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing into a tiny terminal should succeed");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_centered_area_matches_maze() {
        let maze = Maze::new(&["S..", "..G"]).expect("test maze should be valid");
        let area = centered(Rect::new(0, 0, 11, 8), &maze).expect("centering should succeed");

        assert_eq!(area.width, 3);
        assert_eq!(area.height, 2);
    }

    #[test]
    fn test_transform_maze_to_screen_coords() {
        let maze = Maze::new(&["S..", "...", "..G"]).expect("test maze should be valid");
        let coords = transform_maze_to_screen_coords(
            &[Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
            &maze,
        )
        .expect("conversion should succeed");

        assert_eq!(coords, vec![(-1.0, 1.0), (0.0, 0.0), (1.0, -1.0)]);
    }
}
