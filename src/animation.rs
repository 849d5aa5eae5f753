//! Timed replay of an exploration trace.
//!
//! The search engine runs to completion before anything is drawn; this module then reveals its
//! trace one expanded cell at a time so the exploration can be followed on screen.

use std::time::{Duration, Instant};

use crate::types::Cell;

/// Animation state manager for exploration playback.
///
/// This structure manages the animation state including timing, pausing and the number of trace
/// entries currently revealed.
#[derive(Clone, Debug)]
pub(crate) struct AnimationManager {
    /// Expanded cells in the order the search took them out of its frontier.
    steps: Vec<Cell>,
    /// Number of steps currently revealed.
    current_index: usize,
    /// Timestamp of the last animation frame update.
    last_update_time: Instant,
    /// Time between two revealed steps.
    delay: Duration,
    /// Whether playback is suspended.
    paused: bool,
}

impl AnimationManager {
    /// Creates a manager replaying `steps` with `delay` between them, starting now.
    pub(crate) fn new(steps: Vec<Cell>, delay: Duration) -> Self {
        Self::new_at(steps, delay, Instant::now())
    }

    /// Creates a manager replaying `steps` with `delay` between them, starting at `now`.
    pub(crate) const fn new_at(steps: Vec<Cell>, delay: Duration, now: Instant) -> Self {
        Self {
            steps,
            current_index: 0,
            last_update_time: now,
            delay,
            paused: false,
        }
    }

    /// Rewinds playback to the beginning and resumes it.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.paused = false;
        self.last_update_time = Instant::now();
    }

    /// Reveals every remaining step at once.
    pub(crate) const fn finish(&mut self) {
        self.current_index = self.steps.len();
    }

    /// Pauses a running playback, or resumes a paused one.
    pub(crate) const fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Returns `true` while playback is paused.
    pub(crate) const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` once every step has been revealed.
    pub(crate) const fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Steps revealed so far.
    pub(crate) fn explored(&self) -> &[Cell] {
        self.steps.get(..self.current_index).unwrap_or(&self.steps)
    }

    /// Most recently revealed step.
    pub(crate) fn current(&self) -> Option<Cell> {
        self.explored().last().copied()
    }

    /// Advances playback based on the current time.
    pub(crate) fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advances playback by as many steps as whole delays have passed since the last update.
    ///
    /// Paused or finished playback only moves the reference time forward, so resuming does not
    /// reveal a burst of steps.
    pub(crate) fn update_at(&mut self, now: Instant) {
        if self.paused || self.is_finished() {
            self.last_update_time = now;
            return;
        }

        let elapsed = now.saturating_duration_since(self.last_update_time);
        if elapsed < self.delay {
            return;
        }

        let advance = if self.delay.is_zero() {
            self.steps.len()
        } else {
            usize::try_from(elapsed.as_nanos() / self.delay.as_nanos()).unwrap_or(usize::MAX)
        };

        self.current_index = self
            .current_index
            .saturating_add(advance)
            .min(self.steps.len());
        self.last_update_time = now;
    }
}
