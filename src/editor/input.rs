//! Event handling: translate crossterm key/mouse events into controller
//! operations.

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::scene::SceneError;

use super::config::matches_binding;
use super::palette::{PALETTE, Tool};
use super::state::EditorState;
use super::ui::Layout;

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Redraw,
    ToggleFullscreen,
    Quit,
}

pub fn handle_event(state: &mut EditorState, layout: &Layout, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, layout, mouse),
        Event::Resize(_, _) => Action::Redraw,
        _ => Action::Continue,
    }
}

fn handle_key(state: &mut EditorState, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Continue;
    }

    state.status_message = None;
    let bindings = state.config.key_bindings.clone();

    if matches_binding(&bindings.quit, &key) || matches_binding("Esc", &key) {
        return Action::Quit;
    }

    if matches_binding(&bindings.play_toggle, &key) {
        if state.controller.is_playing() {
            state.controller.stop();
        } else {
            let speed = state.controller.speed();
            state.controller.play(speed, Instant::now());
        }
        return Action::Redraw;
    }

    if matches_binding(&bindings.speed_up, &key) {
        let speed = state.controller.speed().saturating_add(1);
        state.controller.set_speed(speed, Instant::now());
        return Action::Redraw;
    }

    if matches_binding(&bindings.speed_down, &key) {
        let speed = state.controller.speed().saturating_sub(1);
        state.controller.set_speed(speed, Instant::now());
        return Action::Redraw;
    }

    if matches_binding(&bindings.add_frame, &key) {
        state.controller.add_frame();
        return Action::Redraw;
    }

    if matches_binding(&bindings.duplicate_frame, &key) {
        if let Some(active) = state.controller.model().active() {
            let result = state.controller.duplicate_frame(active).map(|_| ());
            report(state, result);
        }
        return Action::Redraw;
    }

    if matches_binding(&bindings.delete_frame, &key) {
        if let Some(active) = state.controller.model().active() {
            let result = state.controller.delete_frame(active).map(|_| ());
            report(state, result);
        }
        return Action::Redraw;
    }

    if matches_binding(&bindings.clear_frame, &key) {
        state.controller.clear_frame();
        return Action::Redraw;
    }

    if matches_binding(&bindings.next_frame, &key) {
        return select_neighbor(state, 1);
    }

    if matches_binding(&bindings.prev_frame, &key) {
        return select_neighbor(state, -1);
    }

    if matches_binding(&bindings.swap_color, &key) {
        state.swap_colors();
        return Action::Redraw;
    }

    if matches_binding(&bindings.toggle_tool, &key) {
        state.tool = state.tool.toggle();
        state.drag = None;
        return Action::Redraw;
    }

    if matches_binding(&bindings.fullscreen, &key) {
        return Action::ToggleFullscreen;
    }

    // Palette: digits 1-8 pick the corresponding swatch.
    if let crossterm::event::KeyCode::Char(c) = key.code {
        if let Some(digit) = c.to_digit(10) {
            let idx = digit as usize;
            if (1..=PALETTE.len()).contains(&idx) {
                state.pick_color(PALETTE[idx - 1]);
                return Action::Redraw;
            }
        }
    }

    Action::Continue
}

/// Select the frame `delta` away from the active one, wrapping at both
/// ends. No frames: no-op.
fn select_neighbor(state: &mut EditorState, delta: i32) -> Action {
    let len = state.controller.model().len();
    if len == 0 {
        return Action::Continue;
    }
    let current = state.controller.model().active().unwrap_or(0) as i32;
    let target = (current + delta).rem_euclid(len as i32) as usize;
    let result = state.controller.set_active_frame(target);
    report(state, result);
    Action::Redraw
}

fn handle_mouse(state: &mut EditorState, layout: &Layout, mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.drag = layout.canvas_point(mouse.column, mouse.row);
            Action::Continue
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let here = layout.canvas_point(mouse.column, mouse.row);
            match (state.tool, state.drag, here) {
                (Tool::Draw, Some(prev), Some(cur)) => {
                    state.controller.add_line_action(prev, cur);
                    state.drag = Some(cur);
                    Action::Redraw
                }
                // Leaving the canvas area ends the stroke.
                (_, _, here) => {
                    state.drag = here;
                    Action::Continue
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.drag = None;
            Action::Continue
        }
        _ => Action::Continue,
    }
}

// Index operations take indices read from the model an instant earlier, so
// they cannot legally fail; surface the error instead of swallowing it if
// that ever changes.
fn report(state: &mut EditorState, result: Result<(), SceneError>) {
    if let Err(e) = result {
        state.status_message = Some(e.to_string());
    }
}
