//! Scene controller — mediates between UI input, the scene model, the
//! picker view, and the playback timer.
//!
//! The controller is host-agnostic: it owns the two drawing surfaces as
//! in-memory canvases and models the playback timer as a repeating deadline
//! advanced by explicit `tick` calls. The editor event loop supplies the
//! clock; nothing in here sleeps or spawns.

use std::time::{Duration, Instant};

use crate::canvas::{BACKGROUND, Canvas, Surface};
use crate::scene::{Action, Line, SceneError, SceneModel};
use crate::types::{Color, Point};
use crate::view::{PickerEntry, SceneView};

/// Logical canvas size shared by the primary and preview surfaces.
pub const CANVAS_WIDTH: u16 = 64;
pub const CANVAS_HEIGHT: u16 = 40;

/// Playback speed bounds, frames per second.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 30;
pub const DEFAULT_SPEED: u32 = 5;

/// A running playback timer: a repeating deadline the event loop polls
/// against. Replaced wholesale on re-`play`, dropped on `stop`.
#[derive(Debug, Clone, Copy)]
struct Playback {
    interval: Duration,
    next_due: Instant,
}

pub struct SceneController {
    model: SceneModel,
    picker: Vec<PickerEntry>,
    primary: Canvas,
    preview: Canvas,
    playback: Option<Playback>,
    speed: u32,
}

impl Default for SceneController {
    fn default() -> Self {
        SceneController {
            model: SceneModel::new(),
            picker: Vec::new(),
            primary: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            preview: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            playback: None,
            speed: DEFAULT_SPEED,
        }
    }
}

impl SceneController {
    pub fn new() -> Self {
        SceneController::default()
    }

    // -----------------------------------------------------------------------
    // Playback state machine: {Idle, Playing}
    // -----------------------------------------------------------------------

    /// Start (or restart) looping playback at `speed` frames per second.
    /// Calling this while already playing replaces the existing timer, so a
    /// speed change never leaves a duplicate timer ticking.
    pub fn play(&mut self, speed: u32, now: Instant) {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        let interval = Duration::from_millis(1000 / u64::from(speed));
        self.speed = speed;
        self.playback = Some(Playback {
            interval,
            next_due: now + interval,
        });
    }

    /// Cancel playback. Idempotent: stopping while idle is a no-op.
    pub fn stop(&mut self) {
        self.playback = None;
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// Last speed handed to `play`, kept across stop for the UI.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Change the playback speed. While playing this restarts the timer at
    /// the new rate (stop-then-restart, never a second timer).
    pub fn set_speed(&mut self, speed: u32, now: Instant) {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        if self.is_playing() {
            self.play(speed, now);
        } else {
            self.speed = speed;
        }
    }

    /// When the event loop should wake up next, if playing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.playback.map(|p| p.next_due)
    }

    /// Fire `next_frame` once per elapsed interval and return how many
    /// frames were advanced. Idle, or not yet due: 0. If the scene empties
    /// while playing there is nothing left to cycle, so playback stops.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(p) = self.playback {
            if now < p.next_due {
                break;
            }
            if self.next_frame().is_err() {
                self.stop();
                break;
            }
            if let Some(p) = &mut self.playback {
                p.next_due += p.interval;
            }
            fired += 1;
        }
        fired
    }

    /// Advance to the next frame (wrapping) and redraw.
    pub fn next_frame(&mut self) -> Result<(), SceneError> {
        self.model.next()?;
        self.redraw();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Frame operations
    // -----------------------------------------------------------------------

    /// Append a new empty frame, make it active, redraw. Returns its index.
    pub fn add_frame(&mut self) -> usize {
        let index = self.model.add_frame();
        // A just-appended index is always in range.
        let _ = self.model.set_active(index);
        self.redraw();
        index
    }

    /// Duplicate the frame at `index`; the copy becomes active.
    pub fn duplicate_frame(&mut self, index: usize) -> Result<usize, SceneError> {
        let new_index = self.model.duplicate_frame(index)?;
        self.redraw();
        Ok(new_index)
    }

    /// Delete the frame at `index`; the first remaining frame becomes
    /// active, or none if the scene emptied.
    pub fn delete_frame(&mut self, index: usize) -> Result<Option<usize>, SceneError> {
        let active = self.model.delete_frame(index)?;
        self.redraw();
        Ok(active)
    }

    /// Select the frame at `index`. Valid while idle or playing; does not
    /// change the playback state.
    pub fn set_active_frame(&mut self, index: usize) -> Result<(), SceneError> {
        self.model.set_active(index)?;
        self.redraw();
        Ok(())
    }

    /// Discard all strokes of the active frame.
    pub fn clear_frame(&mut self) {
        if let Some(frame) = self.model.active_frame_mut() {
            frame.clear();
            self.redraw();
        }
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Record one stroke segment in the model's current color and redraw
    /// immediately, so strokes are visible while drawing regardless of the
    /// playback timer. No active frame: guarded no-op.
    pub fn add_line_action(&mut self, from: Point, to: Point) {
        let color = self.model.current_color();
        if let Some(frame) = self.model.active_frame_mut() {
            frame.add_action(Action::Line(Line::new(from, to, color)));
            self.redraw();
        }
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.model.set_current_color(color);
    }

    /// Re-render the picker projection, then draw the active frame onto
    /// both surfaces. No active frame: the surfaces fall back to the
    /// background, drawing is skipped.
    pub fn redraw(&mut self) {
        self.picker = SceneView::render(self.model.frames(), self.model.active());
        match self.model.active_frame() {
            Some(frame) => {
                frame.draw(&mut self.primary);
                frame.draw(&mut self.preview);
            }
            None => {
                self.primary.fill(BACKGROUND);
                self.preview.fill(BACKGROUND);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Accessors for the UI layer
    // -----------------------------------------------------------------------

    pub fn model(&self) -> &SceneModel {
        &self.model
    }

    pub fn picker(&self) -> &[PickerEntry] {
        &self.picker
    }

    pub fn primary(&self) -> &Canvas {
        &self.primary
    }

    pub fn preview(&self) -> &Canvas {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_with_frames(n: usize) -> SceneController {
        let mut c = SceneController::new();
        for _ in 0..n {
            c.add_frame();
        }
        c
    }

    fn surfaces_equal(a: &Canvas, b: &Canvas) -> bool {
        a.rows().flatten().eq(b.rows().flatten())
    }

    #[test]
    fn add_line_action_records_current_color() {
        let mut c = controller_with_frames(1);
        c.set_current_color(Color::Magenta);
        c.add_line_action(Point::new(0, 0), Point::new(10, 10));

        let frame = c.model().active_frame().unwrap();
        assert_eq!(frame.actions().len(), 1);
        let Action::Line(line) = &frame.actions()[0];
        assert_eq!(line.from, Point::new(0, 0));
        assert_eq!(line.to, Point::new(10, 10));
        assert_eq!(line.color, Color::Magenta);
    }

    #[test]
    fn add_line_action_without_active_frame_is_noop() {
        let mut c = SceneController::new();
        c.add_line_action(Point::new(0, 0), Point::new(5, 5));
        assert!(c.model().is_empty());
    }

    #[test]
    fn stroke_is_visible_on_both_surfaces() {
        let mut c = controller_with_frames(1);
        c.set_current_color(Color::Black);
        c.add_line_action(Point::new(2, 2), Point::new(8, 2));
        assert_eq!(c.primary().get(5, 2), Color::Black);
        assert!(surfaces_equal(c.primary(), c.preview()));
    }

    #[test]
    fn duplicate_renders_identically_at_copy_time() {
        let mut c = controller_with_frames(1);
        c.add_line_action(Point::new(1, 1), Point::new(20, 14));
        let before = c.primary().clone();

        let copy = c.duplicate_frame(0).unwrap();
        assert_eq!(c.model().active(), Some(copy));
        assert!(surfaces_equal(&before, c.primary()));

        // Mutating the duplicate does not touch the source frame.
        c.add_line_action(Point::new(0, 30), Point::new(40, 30));
        assert_eq!(c.model().frames()[0].actions().len(), 1);
        assert_eq!(c.model().frames()[copy].actions().len(), 2);
    }

    #[test]
    fn delete_makes_first_remaining_frame_active() {
        let mut c = controller_with_frames(3);
        assert_eq!(c.delete_frame(0).unwrap(), Some(0));
        assert_eq!(c.model().len(), 2);
        assert_eq!(c.model().active(), Some(0));
    }

    #[test]
    fn redraw_with_no_frames_clears_to_background() {
        let mut c = controller_with_frames(1);
        c.add_line_action(Point::new(0, 0), Point::new(5, 5));
        c.delete_frame(0).unwrap();
        assert!(c.primary().rows().flatten().all(|&cell| cell == BACKGROUND));
        assert!(c.picker().is_empty());
    }

    #[test]
    fn picker_tracks_active_frame() {
        let mut c = controller_with_frames(3);
        c.set_active_frame(1).unwrap();
        let active: Vec<usize> = c
            .picker()
            .iter()
            .filter(|e| e.active)
            .map(|e| e.index)
            .collect();
        assert_eq!(active, vec![1]);
    }

    // -----------------------------------------------------------------------
    // Playback timer
    // -----------------------------------------------------------------------

    #[test]
    fn three_elapsed_intervals_fire_exactly_three_ticks() {
        let mut c = controller_with_frames(4);
        let start = Instant::now();
        c.play(2, start); // 500ms interval
        assert!(c.is_playing());

        let interval = Duration::from_millis(500);
        assert_eq!(c.tick(start + 3 * interval), 3);
        assert_eq!(c.model().active(), Some(2)); // started at 3, advanced 3, wrapped

        c.stop();
        assert_eq!(c.tick(start + 10 * interval), 0);
        assert_eq!(c.model().active(), Some(2));
    }

    #[test]
    fn tick_before_deadline_fires_nothing() {
        let mut c = controller_with_frames(2);
        let start = Instant::now();
        c.play(2, start);
        assert_eq!(c.tick(start + Duration::from_millis(100)), 0);
    }

    #[test]
    fn play_while_playing_replaces_the_timer() {
        let mut c = controller_with_frames(4);
        let start = Instant::now();
        c.play(2, start);
        // Speed change: stop-then-restart semantics, no duplicate timer.
        c.play(10, start);
        assert_eq!(c.speed(), 10);

        // One second elapses: exactly 10 ticks at the new rate, not 10 + 2.
        assert_eq!(c.tick(start + Duration::from_secs(1)), 10);
    }

    #[test]
    fn speed_is_clamped() {
        let mut c = controller_with_frames(1);
        c.play(0, Instant::now());
        assert_eq!(c.speed(), MIN_SPEED);
        c.play(1000, Instant::now());
        assert_eq!(c.speed(), MAX_SPEED);
    }

    #[test]
    fn set_speed_while_idle_does_not_start_playback() {
        let mut c = controller_with_frames(2);
        c.set_speed(12, Instant::now());
        assert_eq!(c.speed(), 12);
        assert!(!c.is_playing());
    }

    #[test]
    fn set_speed_while_playing_restarts_the_timer() {
        let mut c = controller_with_frames(4);
        let start = Instant::now();
        c.play(2, start);
        c.set_speed(4, start);
        assert!(c.is_playing());
        // 250ms interval: one second elapsed fires 4 ticks, not 2.
        assert_eq!(c.tick(start + Duration::from_secs(1)), 4);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut c = controller_with_frames(1);
        c.stop();
        c.stop();
        assert!(!c.is_playing());
    }

    #[test]
    fn emptying_the_scene_stops_playback() {
        let mut c = controller_with_frames(1);
        let start = Instant::now();
        c.play(5, start);
        c.delete_frame(0).unwrap();
        assert_eq!(c.tick(start + Duration::from_secs(1)), 0);
        assert!(!c.is_playing());
    }

    #[test]
    fn cycle_returns_to_start_after_len_ticks() {
        let mut c = controller_with_frames(3);
        c.set_active_frame(2).unwrap();
        let start = Instant::now();
        c.play(10, start);
        let interval = Duration::from_millis(100);
        assert_eq!(c.tick(start + 3 * interval), 3);
        assert_eq!(c.model().active(), Some(2));
    }
}
